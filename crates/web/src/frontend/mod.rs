//! Leptos (CSR) frontend exposed to the static site as `loadCatalog` / `renderCatalog`.

pub mod api;
pub mod app;

use std::cell::RefCell;

use leptos::{RwSignal, SignalGet, SignalSet, create_rw_signal, mount_to, view};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use shwcare_products::ProgramFilter;

use crate::catalog::CatalogView;
use crate::config::MountConfig;
use crate::loader::{LoadError, parse_catalog};
use crate::mounts::{MountAction, MountRegistry};
use crate::site;

use app::Catalog;

thread_local! {
    static MOUNTS: RefCell<MountRegistry<RwSignal<CatalogView>>> = RefCell::new(MountRegistry::default());
}

/// WASM entry point, called automatically when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
}

fn to_js_error(err: LoadError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Fetch `data/products.json` (no cache) and resolve to the array as published.
///
/// The body must decode as a catalog, but the records are handed back
/// untouched, extra fields included.
#[wasm_bindgen(js_name = loadCatalog)]
pub async fn load_catalog() -> Result<JsValue, JsValue> {
    let body = api::fetch_text(site::DATA_PATH).await.map_err(to_js_error)?;
    let items = parse_catalog(body.as_bytes()).map_err(to_js_error)?;
    tracing::debug!(items = items.len(), "catalog fetched");
    js_sys::JSON::parse(&body)
}

/// Mount the catalog into `config.mountId`. A missing mount element is a no-op;
/// rendering into a live mount replaces its catalog in place.
#[wasm_bindgen(js_name = renderCatalog)]
pub fn render_catalog(config: JsValue) -> Result<(), JsValue> {
    let config: MountConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| js_sys::Error::new(&format!("invalid catalog config: {e}")))?;

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(mount) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(&config.mount_id))
    else {
        tracing::debug!(mount_id = %config.mount_id, "mount element not found; skipping render");
        return Ok(());
    };

    let search = window.location().search().unwrap_or_default();
    let filter = ProgramFilter::from_query(&search);
    let catalog = CatalogView::new(&config.items, filter, config.options);

    let mount: web_sys::HtmlElement = mount
        .dyn_into()
        .map_err(|_| js_sys::Error::new("catalog mount is not an HTML element"))?;

    let action = MOUNTS.with(|mounts| {
        mounts
            .borrow_mut()
            .plan(&config.mount_id, mount.child_element_count() > 0)
    });
    match action {
        MountAction::Update(current) => {
            tracing::debug!(mount_id = %config.mount_id, "updating live catalog mount");
            current.set(catalog);
        }
        MountAction::Mount => {
            mount.set_inner_html("");
            let mount_id = config.mount_id;
            mount_to(mount, move || {
                let current = create_rw_signal(catalog);
                MOUNTS.with(|mounts| mounts.borrow_mut().register(mount_id, current));
                move || view! { <Catalog catalog={current.get()}/> }
            });
        }
    }
    Ok(())
}
