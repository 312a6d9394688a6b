//! Transient catalog UI state and the group filter it drives.

use crate::group::Group;
use crate::program::ProgramFilter;

/// Category selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProgramSelection {
    #[default]
    All,
    Program(String),
}

impl ProgramSelection {
    /// Option value used for "All Categories".
    pub const ALL_VALUE: &'static str = "All";

    /// Parse a selector option value.
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            Self::All
        } else {
            Self::Program(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Program(p) => p,
        }
    }

    pub fn matches(&self, program: &str) -> bool {
        match self {
            Self::All => true,
            Self::Program(p) => p == program,
        }
    }
}

/// Search box text and selected category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    pub query: String,
    pub program: ProgramSelection,
}

impl CatalogState {
    /// Starting state for a page, pre-selecting a deep-linked real program.
    pub fn initial(filter: Option<&ProgramFilter>) -> Self {
        let program = match filter {
            Some(ProgramFilter::Program(label)) => ProgramSelection::Program(label.clone()),
            _ => ProgramSelection::All,
        };
        Self {
            query: String::new(),
            program,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_program(mut self, program: ProgramSelection) -> Self {
        self.program = program;
        self
    }

    /// Normalized search needle; empty matches everything.
    pub fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Whether a group passes the search and category filters.
    ///
    /// When the program is locked by a deep link the category selection is ignored;
    /// the item list is already restricted.
    pub fn matches(&self, group: &Group, program_locked: bool) -> bool {
        if !program_locked && !self.program.matches(&group.program) {
            return false;
        }
        let needle = self.needle();
        needle.is_empty() || group.search_text().contains(&needle)
    }
}

/// Groups visible for a state, in input order.
pub fn filter_groups<'a>(groups: &'a [Group], state: &CatalogState, program_locked: bool) -> Vec<&'a Group> {
    groups
        .iter()
        .filter(|g| state.matches(g, program_locked))
        .collect()
}
