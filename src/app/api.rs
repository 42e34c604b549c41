//! Client-side fetch helpers for legacy page markup.

use url::Url;

/// Page loaded for the site root
const HOME_PAGE: &str = "home";

/// Where the media server serves the markup for a legacy route
/// (`/movies` -> `<base>/web/movies.html`).
pub fn legacy_markup_url(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let page = match path.trim_matches('/') {
        "" => HOME_PAGE,
        page => page,
    };
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("web/{}.html", page))
}

/// Fetch text from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP {} for {}", resp.status(), url));
    }

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    text.as_string().ok_or_else(|| "Response body is not text".to_string())
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(_url: &str) -> Result<String, String> {
    Err("fetch_text is only available in browser".to_string())
}
