//! Product catalog domain.
//!
//! This crate contains the catalog's data transformations, implemented purely
//! as deterministic functions over loaded records (no IO, no DOM, no network):
//! classification, deep-link program filtering, stage grouping and search.

pub mod classify;
pub mod group;
pub mod product;
pub mod program;
pub mod search;

pub use classify::{TherapyClass, classify, is_glp1, is_peptide_like};
pub use group::{Group, GroupKey, base_name, group_items};
pub use product::{Money, Package, ProductRecord, Term};
pub use program::{FilteredItems, ProgramFilter, collate, filter_by_program, order_programs};
pub use search::{CatalogState, ProgramSelection, filter_groups};
