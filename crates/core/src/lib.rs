//! `shwcare-core` — catalog foundation building blocks.
//!
//! This crate contains **pure** primitives shared by the catalog crates
//! (no IO, no DOM, no network).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::Sku;
pub use value_object::ValueObject;
