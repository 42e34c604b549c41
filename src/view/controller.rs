//! Page controller resolution.
//!
//! Legacy pages name their controller script in a `data-controller`
//! attribute. Resolving it is an optional enhancement: the view container
//! logs failures and activates the page anyway.

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use url::Url;

/// Attribute naming a page's controller script
pub const CONTROLLER_ATTRIBUTE: &str = "data-controller";

const PLUGIN_PREFIX: &str = "__plugin/";

/// A loaded controller module. The payload is whatever the resolver produced
/// (script source, JS module object, ...); the router layer downcasts it.
#[derive(Clone)]
pub struct Controller {
    pub url: String,
    pub factory: Rc<dyn Any>,
}

impl Controller {
    pub fn new(url: impl Into<String>, factory: impl Any) -> Self {
        Self {
            url: url.into(),
            factory: Rc::new(factory),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.factory.downcast_ref::<T>()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller").field("url", &self.url).finish()
    }
}

impl PartialEq for Controller {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && Rc::ptr_eq(&self.factory, &other.factory)
    }
}

#[async_trait(?Send)]
pub trait ControllerResolver {
    /// Load the controller named by a page's `data-controller` value
    async fn resolve(&self, controller: &str) -> Result<Controller>;
}

/// Map a `data-controller` value to the URL the server serves it from.
///
/// Plugin controllers (`__plugin/<name>`) go through the configuration page
/// endpoint; everything else is a static file under `web/`.
pub fn controller_url(controller: &str, base: &Url) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let url = match controller.strip_prefix(PLUGIN_PREFIX) {
        Some(name) => base.join(&format!(
            "web/configurationpage?name={}",
            urlencoding::encode(name)
        ))?,
        None => base.join("web/")?.join(controller.trim_start_matches('/'))?,
    };
    Ok(url)
}

/// Resolver for targets that cannot execute page scripts
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopControllerResolver;

#[async_trait(?Send)]
impl ControllerResolver for NoopControllerResolver {
    async fn resolve(&self, controller: &str) -> Result<Controller> {
        anyhow::bail!("controller scripts are not supported on this target: {}", controller)
    }
}

/// Fetches controller scripts over HTTP; the payload is the script source.
#[cfg(feature = "server")]
#[derive(Clone)]
pub struct HttpControllerResolver {
    client: reqwest::Client,
    base: Url,
}

#[cfg(feature = "server")]
impl HttpControllerResolver {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }
}

#[cfg(feature = "server")]
#[async_trait(?Send)]
impl ControllerResolver for HttpControllerResolver {
    async fn resolve(&self, controller: &str) -> Result<Controller> {
        let url = controller_url(controller, &self.base)?;
        tracing::debug!("Fetching controller {} from {}", controller, url);
        let resp = self.client.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("controller {} returned HTTP {}", url, resp.status());
        }
        let source = resp.text().await?;
        Ok(Controller::new(url.to_string(), source))
    }
}

/// Loads controllers with a dynamic `import()`; the payload is the module object.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct ModuleControllerResolver {
    base: Url,
}

#[cfg(target_arch = "wasm32")]
impl ModuleControllerResolver {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Resolve against the page origin
    pub fn from_location() -> Option<Self> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Url::parse(&origin).ok().map(Self::new)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ControllerResolver for ModuleControllerResolver {
    async fn resolve(&self, controller: &str) -> Result<Controller> {
        use wasm_bindgen::JsValue;
        use wasm_bindgen_futures::JsFuture;

        let url = controller_url(controller, &self.base)?;
        let import = js_sys::Function::new_with_args("u", "return import(u)");
        let promise = import
            .call1(&JsValue::NULL, &JsValue::from_str(url.as_str()))
            .map_err(|e| anyhow::anyhow!("import() failed for {}: {:?}", url, e))?;
        let module = JsFuture::from(js_sys::Promise::from(promise))
            .await
            .map_err(|e| anyhow::anyhow!("controller {} failed to load: {:?}", url, e))?;
        Ok(Controller::new(url.to_string(), module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_prefix_is_dropped() {
        let base = Url::parse("http://media.local:8096").unwrap();
        let url = controller_url("__plugin/Trakt Config.js", &base).unwrap();
        assert_eq!(
            url.as_str(),
            "http://media.local:8096/web/configurationpage?name=Trakt%20Config.js"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let base = Url::parse("https://example.org/media").unwrap();
        let url = controller_url("dashboard/library.js", &base).unwrap();
        assert_eq!(url.as_str(), "https://example.org/media/web/dashboard/library.js");
    }

    #[test]
    fn leading_slash_stays_under_web() {
        let base = Url::parse("http://media.local:8096/").unwrap();
        let url = controller_url("/home/home.js", &base).unwrap();
        assert_eq!(url.as_str(), "http://media.local:8096/web/home/home.js");
    }

    #[tokio::test]
    async fn noop_resolver_always_fails() {
        assert!(NoopControllerResolver.resolve("home.js").await.is_err());
    }

    #[test]
    fn payload_downcasts() {
        let controller = Controller::new("x", String::from("export default 1"));
        assert_eq!(
            controller.downcast_ref::<String>().map(String::as_str),
            Some("export default 1")
        );
        assert!(controller.downcast_ref::<u32>().is_none());
    }
}
