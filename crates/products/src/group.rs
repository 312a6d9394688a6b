//! Stage grouping: one display unit per compound per program.

use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use crate::product::ProductRecord;

static STAGE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(stage\s*\d+\)\s*$").expect("stage suffix pattern is valid")
});

/// Key identifying a group: `(program, base name)`, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub program: String,
    pub base_name: String,
}

/// Records of the same compound within one program, presented as one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub program: String,
    pub base_name: String,
    /// Union of member dosage forms, first-seen order.
    pub dosage_forms: Vec<String>,
    pub rx_type: Option<String>,
    pub image: Option<String>,
    /// Whether the first member seen was a staged item.
    pub staged: bool,
    /// Members ordered by ascending stage (non-staged as 0).
    pub members: Vec<ProductRecord>,
}

impl Group {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            program: self.program.clone(),
            base_name: self.base_name.clone(),
        }
    }

    /// More than one regimen step to choose from.
    pub fn is_multi_stage(&self) -> bool {
        self.members.len() > 1
    }

    /// Member at `index`, clamped to the last member.
    pub fn member(&self, index: usize) -> Option<&ProductRecord> {
        self.members
            .get(index)
            .or_else(|| self.members.last())
    }

    /// Lowercased text searched by the catalog search box.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.base_name,
            self.program,
            self.dosage_forms.join(" ")
        )
        .to_lowercase()
    }
}

/// Display name with a trailing `(stage N)` removed for staged items.
pub fn base_name(record: &ProductRecord) -> String {
    let name = record.display_name();
    if record.is_staged() {
        STAGE_SUFFIX.replace(name, "").trim().to_string()
    } else {
        name.trim().to_string()
    }
}

struct Builder {
    dosage_forms: IndexSet<String>,
    rx_type: Option<String>,
    image: Option<String>,
    staged: bool,
    members: Vec<ProductRecord>,
}

/// Collapse a flat list into groups, in order of first appearance.
///
/// Full recompute; grouping the same input always yields the same groups.
pub fn group_items(items: &[ProductRecord]) -> Vec<Group> {
    let mut groups: IndexMap<GroupKey, Builder> = IndexMap::new();

    for item in items {
        let key = GroupKey {
            program: item.program.clone(),
            base_name: base_name(item),
        };
        let builder = groups.entry(key).or_insert_with(|| Builder {
            dosage_forms: IndexSet::new(),
            rx_type: item.rx_type.clone(),
            image: item.image.clone(),
            staged: item.is_staged(),
            members: Vec::new(),
        });
        builder.dosage_forms.extend(item.dosage_form.iter().cloned());
        builder.members.push(item.clone());
    }

    groups
        .into_iter()
        .map(|(key, mut b)| {
            b.members.sort_by_key(ProductRecord::stage_number);
            Group {
                program: key.program,
                base_name: key.base_name,
                dosage_forms: b.dosage_forms.into_iter().collect(),
                rx_type: b.rx_type,
                image: b.image,
                staged: b.staged,
                members: b.members,
            }
        })
        .collect()
}
