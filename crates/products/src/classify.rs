//! Name/category heuristics used for ordering and the peptide deep link.

use crate::product::ProductRecord;

const GLP1_NAMES: &[&str] = &["semaglutide", "tirzepatide", "retatrutide"];

const PEPTIDE_CATEGORIES: &[&str] = &["peptide", "performance", "longevity"];

const PEPTIDE_NAMES: &[&str] = &[
    "bpc",
    "tb-",
    "thymosin",
    "ipamorelin",
    "cjc",
    "tesamorelin",
    "sermorelin",
    "mots",
    "aod",
    "selank",
    "semax",
    "dsip",
    "kisspeptin",
    "epithalon",
    "glutathione",
    "nad",
];

/// Display class of a therapy, in icon-grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TherapyClass {
    Glp1,
    PeptideLike,
    Other,
}

impl TherapyClass {
    /// Sort rank (lower renders first).
    pub fn rank(self) -> u8 {
        match self {
            TherapyClass::Glp1 => 0,
            TherapyClass::PeptideLike => 1,
            TherapyClass::Other => 2,
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// GLP-1 receptor agonists, matched on the record name.
pub fn is_glp1(record: &ProductRecord) -> bool {
    contains_any(&record.name.to_lowercase(), GLP1_NAMES)
}

/// Peptides and adjacent compounds, matched on category or name fragments.
pub fn is_peptide_like(record: &ProductRecord) -> bool {
    let category = record.category.as_deref().unwrap_or_default().to_lowercase();
    contains_any(&category, PEPTIDE_CATEGORIES)
        || contains_any(&record.name.to_lowercase(), PEPTIDE_NAMES)
}

pub fn classify(record: &ProductRecord) -> TherapyClass {
    if is_glp1(record) {
        TherapyClass::Glp1
    } else if is_peptide_like(record) {
        TherapyClass::PeptideLike
    } else {
        TherapyClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: Option<&str>) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            category: category.map(str::to_string),
            ..serde_json::from_str::<ProductRecord>(r#"{"id":"t"}"#).unwrap()
        }
    }

    #[test]
    fn glp1_matches_any_case() {
        assert_eq!(classify(&item("Compounded SEMAGLUTIDE", None)), TherapyClass::Glp1);
        assert_eq!(classify(&item("Tirzepatide (Stage 2)", None)), TherapyClass::Glp1);
        assert_eq!(classify(&item("Retatrutide", Some("Research"))), TherapyClass::Glp1);
    }

    #[test]
    fn glp1_wins_over_peptide_category() {
        let r = item("Semaglutide", Some("Peptide"));
        assert!(is_peptide_like(&r));
        assert_eq!(classify(&r), TherapyClass::Glp1);
    }

    #[test]
    fn peptide_like_by_name_or_category() {
        assert_eq!(classify(&item("BPC-157", None)), TherapyClass::PeptideLike);
        assert_eq!(classify(&item("TB-500", None)), TherapyClass::PeptideLike);
        assert_eq!(classify(&item("NAD+ — Injection", None)), TherapyClass::PeptideLike);
        assert_eq!(classify(&item("Vitamin D", Some("Longevity"))), TherapyClass::PeptideLike);
        assert_eq!(classify(&item("Tadalafil", Some("Performance"))), TherapyClass::PeptideLike);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(classify(&item("Finasteride", Some("Hair"))), TherapyClass::Other);
        assert_eq!(classify(&item("Tretinoin", None)), TherapyClass::Other);
        assert!(TherapyClass::Glp1.rank() < TherapyClass::PeptideLike.rank());
        assert!(TherapyClass::PeptideLike.rank() < TherapyClass::Other.rank());
    }
}
