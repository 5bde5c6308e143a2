//! Browser bindings (feature `web`)
//!
//! Lets a real `<html>` element be the theme root and uses the browser's
//! own CSS parser for color and shadow validation.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::apply::StyleTarget;
use crate::provider::ThemeRoot;
use crate::validate::CssSupports;

/// The document's root element, if running in a browser
pub fn document_root() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

impl StyleTarget for HtmlElement {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(err) = self.style().set_property(name, value) {
            tracing::warn!(property = name, "failed to set style property: {err:?}");
        }
    }
}

impl ThemeRoot for HtmlElement {
    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Err(err) = web_sys::Element::set_attribute(self, name, value) {
            tracing::warn!(attribute = name, "failed to set attribute: {err:?}");
        }
    }

    fn toggle_class(&mut self, class: &str, on: bool) {
        if let Err(err) = self.class_list().toggle_with_force(class, on) {
            tracing::warn!(class, "failed to toggle class: {err:?}");
        }
    }
}

/// `CSS.supports()` from the host browser
#[derive(Clone, Copy, Debug)]
pub struct BrowserCss {
    _private: (),
}

impl BrowserCss {
    /// Available only when a browser window exists
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|_| Self { _private: () })
    }
}

impl CssSupports for BrowserCss {
    fn supports(&self, property: &str, value: &str) -> bool {
        web_sys::css::supports_with_value(property, value).unwrap_or(false)
    }
}
