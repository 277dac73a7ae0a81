//! Typed view bindings.
//!
//! The controller depends on a handful of page anchors owned by the layout.
//! They are resolved once at startup against a presence probe; a missing
//! anchor fails fast with its name instead of surfacing later as a silent
//! no-op query.

use thiserror::Error;

/// An expected anchor was absent at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BindError {
    #[error("Missing page anchor `{name}` (selector `{selector}`)")]
    MissingAnchor {
        name: &'static str,
        selector: String,
    },
}

/// Named selectors for the anchors the controller writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBindings {
    pub favorites_count: String,
    pub cart_count: String,
    pub content: String,
    pub back_button: String,
    pub subscribe_modal: String,
    pub success_modal: String,
}

impl Default for ViewBindings {
    fn default() -> Self {
        Self {
            favorites_count: "#favoritesCount".to_string(),
            cart_count: "#cartCount".to_string(),
            content: "#favoritesContent".to_string(),
            back_button: ".favorites__back-button".to_string(),
            subscribe_modal: "#subscribeModal".to_string(),
            success_modal: "#successModal".to_string(),
        }
    }
}

impl ViewBindings {
    /// Resolve the default selector set against a presence probe.
    ///
    /// The probe answers "does this selector match an element"; the first
    /// missing anchor aborts resolution.
    pub fn resolve<F>(probe: F) -> Result<Self, BindError>
    where
        F: Fn(&str) -> bool,
    {
        let bindings = Self::default();
        for (name, selector) in bindings.named_selectors() {
            if !probe(selector) {
                return Err(BindError::MissingAnchor {
                    name,
                    selector: selector.to_string(),
                });
            }
        }
        Ok(bindings)
    }

    fn named_selectors(&self) -> [(&'static str, &str); 6] {
        [
            ("favorites_count", &self.favorites_count),
            ("cart_count", &self.cart_count),
            ("content", &self.content),
            ("back_button", &self.back_button),
            ("subscribe_modal", &self.subscribe_modal),
            ("success_modal", &self.success_modal),
        ]
    }
}
