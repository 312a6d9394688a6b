//! Strongly-typed identifiers used across the catalog.

use serde::{Deserialize, Serialize};

/// Product identifier as published in the catalog data (the checkout `sku`).
///
/// The catalog file is authoritative, so any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Sku {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_is_transparent() {
        let sku: Sku = serde_json::from_str("\"sema-2\"").unwrap();
        assert_eq!(sku, Sku::new("sema-2"));
        assert_eq!(serde_json::to_string(&sku).unwrap(), "\"sema-2\"");
    }
}
