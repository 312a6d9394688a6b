//! Catalog records are identified by their SKU, not by their contents.

pub trait Entity {
    type Id: Clone + Eq + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
