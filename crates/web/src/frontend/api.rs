//! Browser data loading via `fetch`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use crate::loader::LoadError;

fn browser_error(value: JsValue) -> LoadError {
    LoadError::Browser(format!("{value:?}"))
}

/// GET `path` with `cache: no-store`; non-OK responses fail with [`LoadError::Status`].
pub async fn fetch_text(path: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Browser("no window object".into()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(path, &init).map_err(browser_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Network(format!("{e:?}")))?;
    let response: Response = response.dyn_into().map_err(browser_error)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(browser_error)?)
        .await
        .map_err(browser_error)?;
    body.as_string()
        .ok_or_else(|| LoadError::Parse("response body is not text".into()))
}

