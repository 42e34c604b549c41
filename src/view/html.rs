//! Server-rendered page fragment handling.
//!
//! Legacy pages arrive as HTML strings. When the markup contains a
//! `data-role="page"` element, only that element becomes the page; anything
//! else is wrapped as-is.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const PAGE_MARKER: &str = r#"data-role="page""#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    /// Extracted `data-role="page"` element
    Page,
    /// Raw markup wrapped in a container element
    Raw,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageFragment {
    pub kind: FragmentKind,
    /// Page element outer HTML (`Page`) or the raw markup (`Raw`)
    pub html: String,
    pub has_script: bool,
}

impl PageFragment {
    /// Attributes on the page element's opening tag. Raw fragments have none.
    pub fn attributes(&self) -> BTreeMap<String, String> {
        match self.kind {
            FragmentKind::Page => opening_tag_attributes(&self.html),
            FragmentKind::Raw => BTreeMap::new(),
        }
    }
}

pub fn parse_view(view: &str) -> PageFragment {
    if !view.contains(PAGE_MARKER) {
        return PageFragment {
            kind: FragmentKind::Raw,
            html: view.to_string(),
            has_script: view.contains("<script"),
        };
    }

    let mut html = view.to_string();
    if html.contains("<script") {
        html = uncomment_scripts(&html);
    }

    match extract_page_element(&html) {
        Some(page) => PageFragment {
            kind: FragmentKind::Page,
            has_script: page.contains("<script"),
            html: page.to_string(),
        },
        None => PageFragment {
            kind: FragmentKind::Raw,
            has_script: html.contains("<script"),
            html,
        },
    }
}

/// Some upstream HTML pipelines strip live script tags, so pages ship them
/// commented out.
pub fn uncomment_scripts(html: &str) -> String {
    html.replace("<!--<script", "<script")
        .replace("</script>-->", "</script>")
}

/// Outer HTML of the first `<div data-role="page">` element.
fn extract_page_element(html: &str) -> Option<&str> {
    let marker = html.find(PAGE_MARKER)?;
    let start = html[..marker].rfind("<div")?;

    let mut depth = 0usize;
    for m in div_tag_regex().find_iter(&html[start..]) {
        if m.as_str().starts_with("</") {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(&html[start..start + m.end()]);
            }
        } else {
            depth += 1;
        }
    }
    None
}

fn div_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<div\b|</div\s*>").expect("valid div tag regex"))
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*"([^"]*)""#).expect("valid attribute regex")
    })
}

fn opening_tag_attributes(html: &str) -> BTreeMap<String, String> {
    let end = html.find('>').unwrap_or(html.len());
    attribute_regex()
        .captures_iter(&html[..end])
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect()
}
