//! In-memory style targets
//!
//! [`InlineStyle`] and [`DocumentRoot`] stand in for a DOM element when
//! there is no browser: tests, server-side rendering of a theme block, and
//! the CLI all materialize overrides into them.

use std::fmt::Write as _;

use indexmap::{IndexMap, IndexSet};

use crate::apply::StyleTarget;
use crate::provider::ThemeRoot;

/// An ordered inline declaration block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    properties: IndexMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Render as a CSS rule, e.g. `:root { --kz-radius-md: 12px; }`
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleTarget for InlineStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}

/// A detached stand-in for the document's root element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: IndexMap<String, String>,
    classes: IndexSet<String>,
    style: InlineStyle,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut InlineStyle {
        &mut self.style
    }
}

impl StyleTarget for DocumentRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.style.set_property(name, value);
    }
}

impl ThemeRoot for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.classes.insert(class.to_string());
        } else {
            self.classes.shift_remove(class);
        }
    }
}
