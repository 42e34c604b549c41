//! Legacy page hosting.
//!
//! One `ViewContainer` per app, shared through context. Navigations use the
//! phased container API so the `RefCell` is never borrowed across an await;
//! overlapping navigations resolve last-write-wins.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use url::Url;

use super::api;
use super::ui_context::{use_shell_config, use_ui, UiContext};
use crate::config::ShellConfig;
use crate::view::{settle, ControllerResolver, ViewContainer, ViewError, ViewOptions};

#[cfg(target_arch = "wasm32")]
type Host = crate::view::dom::DomPageHost;
#[cfg(not(target_arch = "wasm32"))]
type Host = crate::view::MemoryPageHost;

#[derive(Clone)]
pub struct LegacyViews {
    container: Rc<RefCell<ViewContainer<Host>>>,
    resolver: Rc<dyn ControllerResolver>,
    base: Option<Url>,
}

impl LegacyViews {
    fn new(config: &ShellConfig) -> Self {
        let mut container = ViewContainer::new(Host::default());
        container.set_on_before_change(|_page, restored, options| {
            tracing::debug!(
                "Showing {}{}",
                options.url,
                if restored { " from cache" } else { "" }
            );
            #[cfg(target_arch = "wasm32")]
            if !restored {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
        });

        Self {
            container: Rc::new(RefCell::new(container)),
            resolver: create_resolver(config),
            base: config.server_url(),
        }
    }

    /// Tear down all resident pages
    pub fn reset(&self) {
        self.container.borrow_mut().reset();
    }

    /// Restore `url` if resident, otherwise fetch and load it.
    pub async fn show(&self, url: String, ui: UiContext) -> Result<(), ViewError> {
        let restored = self
            .container
            .borrow_mut()
            .begin_restore(ViewOptions::restore(url.clone()));

        let pending = match restored {
            Ok(pending) => pending,
            Err(ViewError::NotResident { .. }) => {
                ui.set_is_loading(true);
                let markup = self.fetch_markup(&url).await;
                ui.set_is_loading(false);
                let Some(markup) = markup else {
                    return Ok(());
                };
                let loaded = self
                    .container
                    .borrow_mut()
                    .begin_load(ViewOptions::new(url, markup));
                loaded?
            }
            Err(e) => return Err(e),
        };

        let controller = pending.resolve_controller(self.resolver.as_ref()).await;
        if !pending.is_restored() {
            settle().await;
        }
        let finished = self.container.borrow_mut().finish(pending, controller);
        finished.map(|_| ())
    }

    async fn fetch_markup(&self, url: &str) -> Option<String> {
        let base = self.base.as_ref()?;
        let markup_url = match api::legacy_markup_url(base, url) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!("Cannot build markup URL for {}: {}", url, e);
                return None;
            }
        };
        match api::fetch_text(markup_url.as_str()).await {
            Ok(markup) => Some(markup),
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", markup_url, e);
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn create_resolver(_config: &ShellConfig) -> Rc<dyn ControllerResolver> {
    match crate::view::controller::ModuleControllerResolver::from_location() {
        Some(resolver) => Rc::new(resolver),
        None => Rc::new(crate::view::NoopControllerResolver),
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
fn create_resolver(config: &ShellConfig) -> Rc<dyn ControllerResolver> {
    match config.server_url() {
        Some(base) => Rc::new(crate::view::controller::HttpControllerResolver::new(base)),
        None => Rc::new(crate::view::NoopControllerResolver),
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
fn create_resolver(_config: &ShellConfig) -> Rc<dyn ControllerResolver> {
    Rc::new(crate::view::NoopControllerResolver)
}

/// Provide the shared container - call once in the main layout
pub fn use_legacy_views_provider() -> LegacyViews {
    let config = use_shell_config();
    use_context_provider(|| LegacyViews::new(&config))
}

pub fn use_legacy_views() -> LegacyViews {
    use_context::<LegacyViews>()
}

/// Shows the legacy page for `url` inside `.mainAnimatedPages`.
#[component]
pub fn LegacyView(url: String) -> Element {
    let views = use_legacy_views();
    let ui = use_ui();

    use_effect(use_reactive!(|url| {
        let views = views.clone();
        spawn(async move {
            match views.show(url.clone(), ui).await {
                Ok(()) => {}
                Err(ViewError::Superseded) => {
                    tracing::debug!("Navigation to {} was superseded", url)
                }
                Err(e) => tracing::warn!("Could not show {}: {}", url, e),
            }
        });
    }));

    rsx! {}
}
