//! Program labels, deep-link slugs and program ordering.

use core::cmp::Ordering;

use percent_encoding::percent_decode_str;

use crate::classify::is_peptide_like;
use crate::product::ProductRecord;

pub const WEIGHT_LOSS: &str = "Weight Loss & Metabolic Optimization";
pub const HAIR: &str = "Hair Loss & Scalp Health";
pub const DERMATOLOGY: &str = "Dermatology & Aesthetics";
pub const WOMENS_HEALTH: &str = "Women’s Hormone Balance";
pub const MENS_HEALTH: &str = "Men’s Health & Performance";
pub const LONGEVITY: &str = "Longevity & Cellular Health";
pub const RECOVERY: &str = "Regenerative & Injury Recovery";
pub const NEURO: &str = "Neuro, Mood & Sleep Optimization";
pub const GROWTH_HORMONE: &str = "Growth Hormone Optimization";

pub const PEPTIDE_PROGRAMS_LABEL: &str = "Peptide Programs";
pub const WELLNESS_LABEL: &str = "Wellness & Vitality";

/// Query parameter carrying the deep-linked program.
pub const PROGRAM_PARAM: &str = "program";

const PROGRAM_SLUGS: &[(&str, &str)] = &[
    ("weight-loss", WEIGHT_LOSS),
    ("hair", HAIR),
    ("derm", DERMATOLOGY),
    ("womens", WOMENS_HEALTH),
    ("mens", MENS_HEALTH),
    ("longevity", LONGEVITY),
    ("recovery", RECOVERY),
    ("neuro", NEURO),
    ("gh", GROWTH_HORMONE),
];

const PEPTIDE_SLUG: &str = "peptides";
const WELLNESS_SLUG: &str = "wellness";

const PEPTIDE_PROGRAMS: &[&str] = &[RECOVERY, LONGEVITY, NEURO, GROWTH_HORMONE];
const WELLNESS_PROGRAMS: &[&str] = &[MENS_HEALTH, WOMENS_HEALTH, LONGEVITY];
const WELLNESS_COMPOUNDS: &[&str] = &["NAD+", "Glutathione"];

/// Selector priority entry for the neuro track. The published label is
/// [`NEURO`], which this entry does not match, so it sorts with the unknowns.
const NEURO_PRIORITY_ENTRY: &str = "Neuro / Mood / Sleep";

/// Category selector order; programs not listed follow alphabetically.
const PROGRAM_PRIORITY: &[&str] = &[
    WEIGHT_LOSS,
    RECOVERY,
    LONGEVITY,
    NEURO_PRIORITY_ENTRY,
    GROWTH_HORMONE,
    MENS_HEALTH,
    WOMENS_HEALTH,
    DERMATOLOGY,
    HAIR,
];

/// Catalog restriction requested through `?program=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramFilter {
    /// A single program label, matched exactly against the trimmed record program.
    Program(String),
    /// Peptide programs plus anything peptide-like.
    PeptidePrograms,
    /// Men's/women's/longevity programs plus the wellness compounds.
    WellnessVitality,
}

impl ProgramFilter {
    /// Resolve a slug (case-insensitive) or a literal label. Blank values mean "no filter".
    pub fn resolve(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        let key = value.to_lowercase();
        if key == PEPTIDE_SLUG {
            return Some(Self::PeptidePrograms);
        }
        if key == WELLNESS_SLUG {
            return Some(Self::WellnessVitality);
        }

        let label = PROGRAM_SLUGS
            .iter()
            .find(|(slug, _)| *slug == key)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or_else(|| value.to_string());
        Some(Self::Program(label))
    }

    /// Resolve the first `program` parameter of a URL query string (`?a=1&program=hair`).
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        query
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key) == PROGRAM_PARAM).then(|| decode_component(value))
            })
            .next()
            .and_then(|value| Self::resolve(&value))
    }

    /// Human-readable section heading for the filtered view.
    pub fn label(&self) -> &str {
        match self {
            Self::Program(label) => label,
            Self::PeptidePrograms => PEPTIDE_PROGRAMS_LABEL,
            Self::WellnessVitality => WELLNESS_LABEL,
        }
    }

    /// `true` for the multi-program pseudo-categories.
    pub fn is_pseudo(&self) -> bool {
        !matches!(self, Self::Program(_))
    }

    pub fn matches(&self, record: &ProductRecord) -> bool {
        let program = record.program.trim();
        match self {
            Self::Program(label) => program == label,
            Self::PeptidePrograms => {
                is_peptide_like(record) || PEPTIDE_PROGRAMS.contains(&record.program.as_str())
            }
            Self::WellnessVitality => {
                WELLNESS_PROGRAMS.contains(&record.program.as_str())
                    || WELLNESS_COMPOUNDS.contains(&compound_name(record))
            }
        }
    }
}

/// Display name with any " — descriptor" tail removed.
fn compound_name(record: &ProductRecord) -> &str {
    let name = record.display_name();
    name.split_once('—')
        .map_or(name, |(head, _)| head)
        .trim()
}

/// `application/x-www-form-urlencoded` component decoding (`+` is a space).
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Items left after the deep-link filter, with the heading to show for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredItems {
    pub items: Vec<ProductRecord>,
    pub label: Option<String>,
}

/// Apply an optional deep-link filter. Without one every item passes and no label is set.
pub fn filter_by_program(filter: Option<&ProgramFilter>, items: &[ProductRecord]) -> FilteredItems {
    match filter {
        None => FilteredItems {
            items: items.to_vec(),
            label: None,
        },
        Some(filter) => FilteredItems {
            items: items.iter().filter(|it| filter.matches(it)).cloned().collect(),
            label: Some(filter.label().to_string()),
        },
    }
}

/// Case-insensitive label ordering, ties broken by the raw string.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Distinct programs in selector order.
pub fn order_programs<'a, I>(programs: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut distinct: Vec<&str> = Vec::new();
    for program in programs {
        if !distinct.contains(&program) {
            distinct.push(program);
        }
    }

    let priority = |p: &str| PROGRAM_PRIORITY.iter().position(|known| *known == p);
    distinct.sort_by(|a, b| match (priority(a), priority(b)) {
        (Some(ia), Some(ib)) => ia.cmp(&ib),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate(a, b),
    });

    distinct.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, program: &str) -> ProductRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "program": program,
        }))
        .unwrap()
    }

    fn sample() -> Vec<ProductRecord> {
        vec![
            item("tirz", "Tirzepatide", WEIGHT_LOSS),
            item("fin", "Finasteride", HAIR),
            item("bpc", "BPC-157", WEIGHT_LOSS),
            item("sermo", "Sermorelin", GROWTH_HORMONE),
            item("nad", "NAD+ — Injection", DERMATOLOGY),
            item("gluta", "Glutathione", "Other"),
            item("trt", "Testosterone Cypionate", MENS_HEALTH),
            item("epi", "Epithalon", LONGEVITY),
        ]
    }

    fn ids(f: &FilteredItems) -> Vec<&str> {
        f.items.iter().map(|it| it.id.as_str()).collect()
    }

    #[test]
    fn resolves_slugs_case_insensitively() {
        assert_eq!(
            ProgramFilter::resolve(" Weight-Loss "),
            Some(ProgramFilter::Program(WEIGHT_LOSS.to_string()))
        );
        assert_eq!(ProgramFilter::resolve("PEPTIDES"), Some(ProgramFilter::PeptidePrograms));
        assert_eq!(ProgramFilter::resolve("wellness"), Some(ProgramFilter::WellnessVitality));
        assert_eq!(ProgramFilter::resolve("   "), None);
    }

    #[test]
    fn unknown_value_is_used_as_literal_label() {
        assert_eq!(
            ProgramFilter::resolve(" Dermatology & Aesthetics "),
            Some(ProgramFilter::Program(DERMATOLOGY.to_string()))
        );
        let custom = ProgramFilter::resolve("Sleep Lab").unwrap();
        assert_eq!(custom.label(), "Sleep Lab");
        assert!(!custom.is_pseudo());
    }

    #[test]
    fn parses_program_from_query_string() {
        assert_eq!(
            ProgramFilter::from_query("?utm=x&program=weight-loss"),
            Some(ProgramFilter::Program(WEIGHT_LOSS.to_string()))
        );
        assert_eq!(
            ProgramFilter::from_query("program=Hair%20Loss+%26+Scalp%20Health"),
            Some(ProgramFilter::Program(HAIR.to_string()))
        );
        assert_eq!(
            ProgramFilter::from_query("?program=peptides&program=hair"),
            Some(ProgramFilter::PeptidePrograms)
        );
        assert_eq!(ProgramFilter::from_query("?utm=x"), None);
        assert_eq!(ProgramFilter::from_query("?program="), None);
        assert_eq!(ProgramFilter::from_query(""), None);
    }

    #[test]
    fn weight_loss_slug_keeps_only_that_program() {
        let filter = ProgramFilter::resolve("weight-loss");
        let out = filter_by_program(filter.as_ref(), &sample());
        assert_eq!(ids(&out), vec!["tirz", "bpc"]);
        assert_eq!(out.label.as_deref(), Some(WEIGHT_LOSS));
    }

    #[test]
    fn peptide_slug_is_program_union_plus_heuristic() {
        let filter = ProgramFilter::resolve("peptides");
        let out = filter_by_program(filter.as_ref(), &sample());
        assert_eq!(ids(&out), vec!["bpc", "sermo", "nad", "gluta", "epi"]);
        assert_eq!(out.label.as_deref(), Some(PEPTIDE_PROGRAMS_LABEL));
    }

    #[test]
    fn wellness_slug_matches_programs_and_compounds() {
        let filter = ProgramFilter::resolve("wellness");
        let out = filter_by_program(filter.as_ref(), &sample());
        assert_eq!(ids(&out), vec!["nad", "gluta", "trt", "epi"]);
        assert_eq!(out.label.as_deref(), Some(WELLNESS_LABEL));
    }

    #[test]
    fn literal_label_matches_trimmed_program() {
        let items = vec![item("a", "A", "  Hair Loss & Scalp Health "), item("b", "B", WEIGHT_LOSS)];
        let out = filter_by_program(Some(&ProgramFilter::Program(HAIR.to_string())), &items);
        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn no_filter_passes_everything_without_label() {
        let out = filter_by_program(None, &sample());
        assert_eq!(out.items.len(), sample().len());
        assert_eq!(out.label, None);
    }

    #[test]
    fn programs_follow_priority_then_alphabetical() {
        let ordered = order_programs([
            "Zeta Clinic",
            HAIR,
            "alpha care",
            WEIGHT_LOSS,
            HAIR,
            NEURO,
            "Beta",
        ]);
        assert_eq!(
            ordered,
            vec![
                WEIGHT_LOSS.to_string(),
                HAIR.to_string(),
                "alpha care".to_string(),
                "Beta".to_string(),
                NEURO.to_string(),
                "Zeta Clinic".to_string(),
            ]
        );
    }

    #[test]
    fn neuro_label_sorts_with_unlisted_programs() {
        assert_eq!(
            order_programs([HAIR, NEURO, "Acne Clinic"]),
            vec![HAIR.to_string(), "Acne Clinic".to_string(), NEURO.to_string()]
        );
        assert_eq!(
            order_programs([NEURO_PRIORITY_ENTRY, HAIR]),
            vec![NEURO_PRIORITY_ENTRY.to_string(), HAIR.to_string()]
        );
    }
}
