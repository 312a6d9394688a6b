//! Fixed site paths and copy.

/// Static catalog data, relative to the page.
pub const DATA_PATH: &str = "data/products.json";

/// Checkout page receiving `sku` and `term`.
pub const CHECKOUT_PAGE: &str = "start.html";

pub const PROGRAMS_PAGE: &str = "programs.html";
pub const PRODUCTS_PAGE: &str = "products.html";

pub const GENERIC_IMAGE: &str = "assets/products/generic.svg";

pub const CLINICIAN_NOTE: &str = "Dose and final therapy selection are determined by a licensed clinician after review. Payment does not guarantee a prescription.";

pub const PRICE_PLACEHOLDER: &str = "See at checkout";
pub const SEARCH_PLACEHOLDER: &str = "Search therapies, compounds, peptides…";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

pub const TRACK_NOTE: &str = "Showing therapies in this track.";
pub const BACK_TO_PROGRAMS: &str = "← Programs";
pub const BACK_TO_ALL_THERAPIES: &str = "← All Therapies";
