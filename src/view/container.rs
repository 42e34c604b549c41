//! Legacy view container.
//!
//! Emulates a multi-page app inside one DOM subtree. The last three pages stay
//! resident in a ring so back/forward navigation can restore them without
//! re-fetching or re-parsing.
//!
//! A navigation is split in three phases so callers sharing the container
//! (e.g. behind `Rc<RefCell<..>>`) never hold it across an await:
//!
//! 1. `begin_load` / `begin_restore`: synchronous DOM work (eviction, insertion)
//! 2. `PendingView::resolve_controller` + `settle`: the suspension points
//! 3. `finish`: hook, visibility, selection
//!
//! `load_view` and `try_restore_view` chain the phases for exclusive owners.

use thiserror::Error;

use super::controller::{Controller, ControllerResolver, CONTROLLER_ATTRIBUTE};
use super::host::{PageEvent, PageHost, PAGES_CONTAINER_SELECTOR, PAGE_CLASS};
use super::html::parse_view;

/// Number of resident pages
pub const PAGE_CONTAINER_COUNT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewOptions {
    pub url: String,
    /// Server-rendered HTML for the page
    pub view: String,
    /// Checked once at entry; a cancelled navigation touches nothing
    pub cancel: bool,
    /// Already-loaded controller; skips resolution
    pub controller_factory: Option<Controller>,
    pub page_type: Option<String>,
    pub fullscreen: bool,
}

impl ViewOptions {
    pub fn new(url: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            view: view.into(),
            ..Self::default()
        }
    }

    /// Options for a restore attempt (no markup needed)
    pub fn restore(url: impl Into<String>) -> Self {
        Self::new(url, String::new())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("navigation cancelled")]
    Cancelled,
    #[error("pages container {} not found", PAGES_CONTAINER_SELECTOR)]
    MissingContainer,
    #[error("no resident page for {url}")]
    NotResident { url: String },
    #[error("could not create a page node for {url}")]
    PageCreation { url: String },
    #[error("navigation superseded by a newer one")]
    Superseded,
}

/// Called on every activation with `(page, is_restored, options)`
pub type BeforeChangeHook<N> = Box<dyn FnMut(&N, bool, &ViewOptions)>;

/// A navigation whose DOM work is done but which is not yet active
#[derive(Debug)]
pub struct PendingView<N> {
    node: N,
    slot: usize,
    restored: bool,
    generation: u64,
    controller: Option<String>,
    options: ViewOptions,
}

impl<N> PendingView<N> {
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn url(&self) -> &str {
        &self.options.url
    }

    /// `data-controller` value still needing resolution
    pub fn controller_name(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    /// Load the page controller. Failures are logged and tolerated so a broken
    /// script never blocks navigation.
    pub async fn resolve_controller<R>(&self, resolver: &R) -> Option<Controller>
    where
        R: ControllerResolver + ?Sized,
    {
        let name = self.controller.as_deref()?;
        match resolver.resolve(name).await {
            Ok(controller) => Some(controller),
            Err(e) => {
                tracing::warn!(
                    "Controller {} for {} failed to load, continuing without it: {}",
                    name,
                    self.options.url,
                    e
                );
                None
            }
        }
    }
}

pub struct ViewContainer<H: PageHost> {
    host: H,
    pages: [Option<H::Node>; PAGE_CONTAINER_COUNT],
    urls: [Option<String>; PAGE_CONTAINER_COUNT],
    selected: Option<usize>,
    generation: u64,
    on_before_change: Option<BeforeChangeHook<H::Node>>,
}

impl<H: PageHost> ViewContainer<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            pages: Default::default(),
            urls: Default::default(),
            selected: None,
            generation: 0,
            on_before_change: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_on_before_change(&mut self, hook: impl FnMut(&H::Node, bool, &ViewOptions) + 'static) {
        self.on_before_change = Some(Box::new(hook));
    }

    /// `None` until the first page activates
    pub fn selected_page_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn current_url(&self) -> Option<&str> {
        self.selected.and_then(|i| self.urls[i].as_deref())
    }

    pub fn current_page(&self) -> Option<&H::Node> {
        self.selected.and_then(|i| self.pages[i].as_ref())
    }

    /// URLs that `try_restore_view` can currently bring back
    pub fn resident_urls(&self) -> Vec<&str> {
        self.urls.iter().filter_map(|u| u.as_deref()).collect()
    }

    pub fn is_resident(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u.as_deref() == Some(url))
    }

    fn next_slot(&self) -> usize {
        match self.selected {
            Some(i) => (i + 1) % PAGE_CONTAINER_COUNT,
            None => 0,
        }
    }

    fn controller_for(&self, node: &H::Node, options: &ViewOptions) -> Option<String> {
        if options.controller_factory.is_some() {
            return None;
        }
        self.host
            .attribute(node, CONTROLLER_ATTRIBUTE)
            .filter(|c| !c.is_empty())
    }

    /// Insert a new page into the next ring slot, evicting its occupant.
    pub fn begin_load(&mut self, options: ViewOptions) -> Result<PendingView<H::Node>, ViewError> {
        if options.cancel {
            return Err(ViewError::Cancelled);
        }
        if !self.host.has_container() {
            tracing::warn!(
                "Cannot load {}: {} not found",
                options.url,
                PAGES_CONTAINER_SELECTOR
            );
            return Err(ViewError::MissingContainer);
        }

        let fragment = parse_view(&options.view);
        let Some(node) = self.host.create_page(&fragment) else {
            tracing::warn!("Cannot load {}: page node creation failed", options.url);
            return Err(ViewError::PageCreation { url: options.url });
        };

        let slot = self.next_slot();
        if let Some(evicted) = &self.pages[slot] {
            tracing::debug!(
                "Evicting page {} from slot {}",
                self.urls[slot].as_deref().unwrap_or("<pending>"),
                slot
            );
            self.host.dispatch(evicted, PageEvent::ViewDestroy);
        }

        match self.pages[slot].take() {
            Some(old) => self.host.replace(&old, &node),
            None => self.host.append(&node),
        }

        self.host.add_class(&node, PAGE_CLASS);
        if let Some(page_type) = &options.page_type {
            self.host.set_attribute(&node, "data-type", page_type);
        }
        if options.fullscreen {
            self.host.set_attribute(&node, "data-properties", "fullscreen");
        }

        self.pages[slot] = Some(node.clone());
        self.urls[slot] = None;
        self.generation += 1;

        Ok(PendingView {
            controller: self.controller_for(&node, &options),
            node,
            slot,
            restored: false,
            generation: self.generation,
            options,
        })
    }

    /// Find a resident page for `options.url`.
    pub fn begin_restore(&mut self, options: ViewOptions) -> Result<PendingView<H::Node>, ViewError> {
        let not_resident = || ViewError::NotResident {
            url: options.url.clone(),
        };
        let slot = self
            .urls
            .iter()
            .position(|u| u.as_deref() == Some(options.url.as_str()))
            .ok_or_else(not_resident)?;
        let node = self.pages[slot].clone().ok_or_else(not_resident)?;

        if options.cancel {
            return Err(ViewError::Cancelled);
        }
        if !self.host.is_attached(&node) {
            tracing::debug!("Page for {} left the document, dropping it", options.url);
            self.host.dispatch(&node, PageEvent::ViewDestroy);
            self.pages[slot] = None;
            self.urls[slot] = None;
            return Err(not_resident());
        }

        self.generation += 1;
        Ok(PendingView {
            controller: self.controller_for(&node, &options),
            node,
            slot,
            restored: true,
            generation: self.generation,
            options,
        })
    }

    /// Activate a pending navigation. Only the most recently begun navigation
    /// can finish; older ones report `Superseded` and leave selection alone.
    pub fn finish(
        &mut self,
        pending: PendingView<H::Node>,
        controller: Option<Controller>,
    ) -> Result<H::Node, ViewError> {
        if pending.generation != self.generation {
            tracing::debug!("Dropping superseded navigation to {}", pending.options.url);
            return Err(ViewError::Superseded);
        }

        let PendingView {
            node,
            slot,
            restored,
            mut options,
            ..
        } = pending;
        if controller.is_some() {
            options.controller_factory = controller;
        }

        if let Some(hook) = self.on_before_change.as_mut() {
            hook(&node, restored, &options);
        }

        for (i, page) in self.pages.iter().enumerate() {
            if let Some(page) = page {
                self.host.set_hidden(page, i != slot);
            }
        }

        self.selected = Some(slot);
        self.urls[slot] = Some(options.url.clone());
        tracing::info!(
            "Activated {} in slot {}{}",
            options.url,
            slot,
            if restored { " (restored)" } else { "" }
        );
        Ok(node)
    }

    pub async fn load_view<R>(&mut self, options: ViewOptions, resolver: &R) -> Result<H::Node, ViewError>
    where
        R: ControllerResolver + ?Sized,
    {
        let pending = self.begin_load(options)?;
        let controller = pending.resolve_controller(resolver).await;
        settle().await;
        self.finish(pending, controller)
    }

    /// Fast path for back/forward. `NotResident` means the caller should fall
    /// back to `load_view`.
    pub async fn try_restore_view<R>(
        &mut self,
        options: ViewOptions,
        resolver: &R,
    ) -> Result<H::Node, ViewError>
    where
        R: ControllerResolver + ?Sized,
    {
        let pending = self.begin_restore(options)?;
        let controller = pending.resolve_controller(resolver).await;
        self.finish(pending, controller)
    }

    /// Tear down every resident page and empty the container.
    pub fn reset(&mut self) {
        for page in self.pages.iter().flatten() {
            self.host.dispatch(page, PageEvent::ViewDestroy);
        }
        self.pages = Default::default();
        self.urls = Default::default();
        self.selected = None;
        self.generation += 1;
        self.host.clear();
        tracing::debug!("View container reset");
    }
}

/// Let freshly inserted DOM settle before activation work runs.
#[cfg(target_arch = "wasm32")]
pub async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().is_some_and(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .is_ok()
        });
        if !scheduled {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Yield once to the executor.
#[cfg(not(target_arch = "wasm32"))]
pub async fn settle() {
    tokio::task::yield_now().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::controller::NoopControllerResolver;
    use crate::view::memory::{HostOp, MemoryPageHost, PageId};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn page(url: &str) -> ViewOptions {
        ViewOptions::new(url, format!(r#"<div data-role="page" class="page">{}</div>"#, url))
    }

    #[derive(Default)]
    struct CountingResolver {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl ControllerResolver for CountingResolver {
        async fn resolve(&self, controller: &str) -> Result<Controller> {
            self.calls.set(self.calls.get() + 1);
            Ok(Controller::new(controller, ()))
        }
    }

    #[tokio::test]
    async fn cancelled_load_touches_nothing() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let mut options = page("/home");
        options.cancel = true;

        let err = container.load_view(options, &NoopControllerResolver).await.unwrap_err();

        assert_eq!(err, ViewError::Cancelled);
        assert!(container.host().ops().is_empty());
        assert_eq!(container.selected_page_index(), None);
    }

    #[tokio::test]
    async fn missing_container_aborts_load() {
        let mut container = ViewContainer::new(MemoryPageHost::without_container());
        let err = container
            .load_view(page("/home"), &NoopControllerResolver)
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::MissingContainer);
        assert_eq!(container.host().created_count(), 0);
    }

    #[tokio::test]
    async fn page_is_stamped_and_selected() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let mut options = page("/video");
        options.page_type = Some("video-osd".into());
        options.fullscreen = true;

        let node = container.load_view(options, &NoopControllerResolver).await.unwrap();

        let stamped = container.host().page(node);
        assert!(stamped.classes.contains(PAGE_CLASS));
        assert_eq!(stamped.attributes["data-type"], "video-osd");
        assert_eq!(stamped.attributes["data-properties"], "fullscreen");
        assert_eq!(container.selected_page_index(), Some(0));
        assert_eq!(container.current_url(), Some("/video"));
    }

    #[test]
    fn insertion_precedes_hook() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let calls = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        container.set_on_before_change(move |node: &PageId, restored, options| {
            log.borrow_mut().push((*node, restored, options.url.clone()));
        });

        let pending = container.begin_load(page("/home")).unwrap();
        assert_eq!(container.host().children(), &[*pending.node()]);
        assert!(calls.borrow().is_empty());
        assert_eq!(container.selected_page_index(), None);

        let node = container.finish(pending, None).unwrap();
        assert_eq!(*calls.borrow(), vec![(node, false, "/home".to_string())]);
        assert_eq!(container.selected_page_index(), Some(0));
    }

    #[test]
    fn superseded_navigation_loses() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let first = container.begin_load(page("/a")).unwrap();
        let first_node = *first.node();
        let second = container.begin_load(page("/b")).unwrap();

        // Both target the same slot; the newer page replaces the older one
        assert_eq!(first.slot(), second.slot());
        assert!(container
            .host()
            .position(&HostOp::Dispatched(first_node, PageEvent::ViewDestroy))
            .is_some());

        assert_eq!(container.finish(first, None), Err(ViewError::Superseded));
        assert_eq!(container.selected_page_index(), None);

        container.finish(second, None).unwrap();
        assert_eq!(container.current_url(), Some("/b"));
        assert!(!container.is_resident("/a"));
    }

    #[tokio::test]
    async fn failing_controller_still_activates() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let options = ViewOptions::new(
            "/movies",
            r#"<div data-role="page" data-controller="movies/movies.js"></div>"#,
        );
        container.load_view(options, &NoopControllerResolver).await.unwrap();
        assert_eq!(container.current_url(), Some("/movies"));
    }

    #[tokio::test]
    async fn controller_is_handed_to_hook() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        container.set_on_before_change(move |_: &PageId, _, options| {
            *sink.borrow_mut() = options.controller_factory.as_ref().map(|c| c.url.clone());
        });
        let resolver = CountingResolver::default();

        let options = ViewOptions::new(
            "/music",
            r#"<div data-role="page" data-controller="music/songs.js"></div>"#,
        );
        container.load_view(options, &resolver).await.unwrap();

        assert_eq!(resolver.calls.get(), 1);
        assert_eq!(seen.borrow().as_deref(), Some("music/songs.js"));
    }

    #[tokio::test]
    async fn preset_controller_skips_resolution() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let resolver = CountingResolver::default();
        let mut options = ViewOptions::new(
            "/music",
            r#"<div data-role="page" data-controller="music/songs.js"></div>"#,
        );
        options.controller_factory = Some(Controller::new("preloaded", ()));

        container.load_view(options, &resolver).await.unwrap();
        assert_eq!(resolver.calls.get(), 0);
    }

    #[tokio::test]
    async fn cancelled_restore_is_noop() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        container.load_view(page("/a"), &NoopControllerResolver).await.unwrap();
        container.load_view(page("/b"), &NoopControllerResolver).await.unwrap();

        let mut options = ViewOptions::restore("/a");
        options.cancel = true;
        let err = container
            .try_restore_view(options, &NoopControllerResolver)
            .await
            .unwrap_err();

        assert_eq!(err, ViewError::Cancelled);
        assert_eq!(container.current_url(), Some("/b"));
    }

    #[tokio::test]
    async fn reset_destroys_and_clears() {
        let mut container = ViewContainer::new(MemoryPageHost::new());
        let a = container.load_view(page("/a"), &NoopControllerResolver).await.unwrap();
        let b = container.load_view(page("/b"), &NoopControllerResolver).await.unwrap();

        container.reset();

        assert!(container.host().children().is_empty());
        assert_eq!(container.host().page(a).events, vec![PageEvent::ViewDestroy]);
        assert_eq!(container.host().page(b).events, vec![PageEvent::ViewDestroy]);
        assert_eq!(container.selected_page_index(), None);
        assert!(container.resident_urls().is_empty());

        let next = container.load_view(page("/c"), &NoopControllerResolver).await.unwrap();
        assert_eq!(container.selected_page_index(), Some(0));
        assert_eq!(container.host().children(), &[next]);
    }
}
