//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two with the same attribute values are
/// equal. In the catalog, prices and packages are value objects while product
/// records are entities keyed by their [`Sku`](crate::Sku).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Package { days: u32, msrp: Option<Money> }
///
/// impl ValueObject for Package {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
