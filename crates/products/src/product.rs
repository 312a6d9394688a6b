use serde::{Deserialize, Serialize, Serializer};

use shwcare_core::{DomainError, DomainResult, Entity, Sku, ValueObject};

/// Package term offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    ThirtyDay,
    NinetyDay,
}

impl Term {
    /// Terms in the order they are offered on a card.
    pub const ALL: [Term; 2] = [Term::ThirtyDay, Term::NinetyDay];

    pub fn days(self) -> u32 {
        match self {
            Term::ThirtyDay => 30,
            Term::NinetyDay => 90,
        }
    }
}

impl TryFrom<u32> for Term {
    type Error = DomainError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(Term::ThirtyDay),
            90 => Ok(Term::NinetyDay),
            other => Err(DomainError::validation(format!(
                "package term must be 30 or 90 days, got {other}"
            ))),
        }
    }
}

/// US dollar amount, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Convert a catalog dollar amount (e.g. `299` or `149.5`) rounding to the cent.
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() {
            return None;
        }
        Some(Self {
            cents: (dollars * 100.0).round() as i64,
        })
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn as_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl ValueObject for Money {}

/// Formats as `$1,299.00`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let digits = (abs / 100).to_string();

        let mut whole = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                whole.push(',');
            }
            whole.push(ch);
        }

        write!(f, "{sign}${whole}.{:02}", abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_dollars())
    }
}

/// A purchasable supply of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msrp: Option<Money>,
}

impl ValueObject for Package {}

impl Package {
    /// Checkout term for this supply; only 30 and 90 days are sold.
    pub fn term(&self) -> DomainResult<Term> {
        Term::try_from(self.days)
    }

    /// Lenient conversion from a raw JSON package; `None` when `days` is unusable.
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        let days = value.get("days")?;
        let days = days.as_u64().or_else(|| {
            days.as_f64()
                .filter(|d| *d >= 0.0 && d.fract() == 0.0)
                .map(|d| d as u64)
        })?;
        let msrp = value
            .get("msrp")
            .and_then(serde_json::Value::as_f64)
            .and_then(Money::from_dollars);
        Some(Self {
            days: u32::try_from(days).ok()?,
            msrp,
        })
    }
}

/// One entry of the published product list (`data/products.json`).
///
/// Records are immutable once loaded. Optional fields that are missing, `null`
/// or of the wrong shape fall back to empty values instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "lenient::sku")]
    pub id: Sku,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub rx_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub program: String,
    /// Regimen step, `None` for non-staged items (absent, zero or negative in the data).
    #[serde(default, deserialize_with = "lenient::stage", skip_serializing_if = "Option::is_none")]
    pub stage: Option<u32>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub dosage_form: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub rx_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Short form description used by the icon layout.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, deserialize_with = "lenient::packages")]
    pub packages: Vec<Package>,
}

impl ProductRecord {
    /// Name shown to patients: `rxName` when present, else `name`.
    pub fn display_name(&self) -> &str {
        match self.rx_name.as_deref() {
            Some(rx) if !rx.is_empty() => rx,
            _ => &self.name,
        }
    }

    /// Stage used for ordering; non-staged items sort as stage 0.
    pub fn stage_number(&self) -> u32 {
        self.stage.unwrap_or(0)
    }

    pub fn is_staged(&self) -> bool {
        self.stage_number() > 0
    }

    /// First package matching the term's duration.
    pub fn package(&self, term: Term) -> Option<&Package> {
        self.packages.iter().find(|p| p.term() == Ok(term))
    }

    /// Package price for a term, when both the package and its msrp exist.
    pub fn price(&self, term: Term) -> Option<Money> {
        self.package(term).and_then(|p| p.msrp)
    }
}

impl Entity for ProductRecord {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Package;
    use shwcare_core::Sku;

    fn scalar_string(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn sku<'de, D: Deserializer<'de>>(d: D) -> Result<Sku, D::Error> {
        Ok(Sku::new(scalar_string(Value::deserialize(d)?).unwrap_or_default()))
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(scalar_string(Value::deserialize(d)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(scalar_string(Value::deserialize(d)?).filter(|s| !s.is_empty()))
    }

    pub fn stage<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        let stage = Value::deserialize(d)?
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 1.0)
            .map(|n| n.min(u32::MAX as f64) as u32);
        Ok(stage)
    }

    pub fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(values) => values.into_iter().filter_map(scalar_string).collect(),
            Value::String(s) if !s.is_empty() => vec![s],
            _ => Vec::new(),
        })
    }

    pub fn packages<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Package>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(values) => values.iter().filter_map(Package::from_json).collect(),
            _ => Vec::new(),
        })
    }
}
