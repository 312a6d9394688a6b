//! Catalog data loading.
//!
//! The browser fetch lives in `frontend::api`; this module holds the shared
//! decoding step and the native (prerender) loader.

use shwcare_products::ProductRecord;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to load catalog (HTTP {0})")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("browser error: {0}")]
    Browser(String),
}

/// Decode the published product list (a JSON array of records).
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<ProductRecord>, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::Parse(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{CatalogSource, load_catalog};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use reqwest::header::CACHE_CONTROL;
    use shwcare_products::ProductRecord;

    use super::{LoadError, parse_catalog};

    /// Where the prerender CLI reads the catalog from.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum CatalogSource {
        Url(String),
        Path(PathBuf),
    }

    impl CatalogSource {
        /// `http(s)://…` is fetched, anything else is a file path.
        pub fn parse(raw: &str) -> Self {
            let lower = raw.to_ascii_lowercase();
            if lower.starts_with("http://") || lower.starts_with("https://") {
                Self::Url(raw.to_string())
            } else {
                Self::Path(PathBuf::from(raw))
            }
        }
    }

    impl core::fmt::Display for CatalogSource {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self {
                Self::Url(url) => f.write_str(url),
                Self::Path(path) => write!(f, "{}", path.display()),
            }
        }
    }

    /// Load the catalog once, bypassing HTTP caches. No retries.
    pub async fn load_catalog(source: &CatalogSource) -> Result<Vec<ProductRecord>, LoadError> {
        tracing::debug!(%source, "loading catalog");

        let bytes = match source {
            CatalogSource::Url(url) => {
                let resp = reqwest::Client::new()
                    .get(url)
                    .header(CACHE_CONTROL, "no-cache")
                    .send()
                    .await
                    .map_err(|e| LoadError::Network(e.to_string()))?;

                if !resp.status().is_success() {
                    return Err(LoadError::Status(resp.status().as_u16()));
                }

                resp.bytes()
                    .await
                    .map_err(|e| LoadError::Network(e.to_string()))?
                    .to_vec()
            }
            CatalogSource::Path(path) => tokio::fs::read(path)
                .await
                .map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))?,
        };

        let items = parse_catalog(&bytes)?;
        tracing::info!(%source, items = items.len(), "catalog loaded");
        Ok(items)
    }
}
