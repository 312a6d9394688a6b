//! Mount configuration accepted by `renderCatalog` and the prerender CLI.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use shwcare_core::{DomainError, DomainResult};
use shwcare_products::ProductRecord;

/// Catalog presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Grouped cards with stage selectors and prices.
    #[default]
    Cards,
    /// Compact therapy tiles, one per record.
    Icons,
}

impl Layout {
    /// Case-insensitive; anything but `icons` is treated as `cards`.
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("icons") {
            Self::Icons
        } else {
            Self::Cards
        }
    }
}

impl FromStr for Layout {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" => Ok(Self::Cards),
            "icons" => Ok(Self::Icons),
            other => Err(DomainError::validation(format!(
                "layout must be \"cards\" or \"icons\", got {other:?}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().map(Self::parse_lenient).unwrap_or_default())
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MountOptions {
    /// Prefix each card's meta line with its program.
    pub show_program: bool,
    /// Render the search box (and category selector when not deep-linked).
    pub enable_search: bool,
    /// Split the grid into per-program sections.
    pub program_sections: bool,
    pub layout: Layout,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            show_program: false,
            enable_search: true,
            program_sections: true,
            layout: Layout::Cards,
        }
    }
}

/// Full `renderCatalog({...})` argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountConfig {
    #[serde(default)]
    pub items: Vec<ProductRecord>,
    #[serde(default)]
    pub mount_id: String,
    #[serde(flatten)]
    pub options: MountOptions,
}
