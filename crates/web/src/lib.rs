//! `shwcare-web`
//!
//! **Responsibility:** the catalog view of the marketing site.
//!
//! This crate provides:
//! - Mount options and data loading (`data/products.json`, no cache)
//! - Deep-link filtering, grouping and page layout ([`CatalogView`])
//! - Pure card rendering ([`card_view`]) shared by both presenters
//! - A Leptos frontend (`wasm32`) and a static HTML renderer (prerender CLI)

pub mod card;
pub mod catalog;
pub mod config;
pub mod html;
pub mod loader;
pub mod mounts;
pub mod site;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use card::{CardView, card_view};
pub use catalog::{CatalogView, PageLayout};
pub use config::{Layout, MountConfig, MountOptions};
pub use loader::{LoadError, parse_catalog};
