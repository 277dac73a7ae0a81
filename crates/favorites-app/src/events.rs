//! Delegated event routing.
//!
//! Handlers are bound once to a stable container; each DOM event is matched
//! against control-specific matchers and translated into a [`PageEvent`],
//! so re-rendered cards need no individual re-binding.

use crate::subscribe::SubscribeForm;

/// Kind of DOM event the router dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Change,
}

/// The origin element of a delegated event, as seen by the host glue.
#[derive(Debug, Clone, Default)]
pub struct EventTarget {
    /// `data-gtm` value on the matched control, if any.
    pub gtm: Option<String>,
    /// Class list of the matched control.
    pub classes: Vec<String>,
    /// `data-product-id` resolved from the control or its card ancestor.
    pub product_id: Option<u64>,
    /// Current value of the associated control (size selector reads).
    pub value: Option<String>,
}

impl EventTarget {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// How a route recognizes its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    DataGtm(&'static str),
    Class(&'static str),
}

impl Matcher {
    pub fn matches(&self, target: &EventTarget) -> bool {
        match self {
            Matcher::DataGtm(value) => target.gtm.as_deref() == Some(*value),
            Matcher::Class(class) => target.has_class(class),
        }
    }
}

/// A user interaction translated into controller vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    RemoveClicked { product_id: u64 },
    AddToCartClicked { product_id: u64, selected_size: Option<String> },
    SizeChanged { product_id: u64, value: Option<String> },
    SubscribeOpened { product_id: u64 },
    SubscribeSubmitted(SubscribeForm),
    BackClicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteAction {
    Remove,
    AddToCart,
    SizeChange,
    Subscribe,
    Back,
}

/// Dispatch table keyed by (event kind, matcher).
#[derive(Debug, Clone)]
pub struct EventRouter {
    routes: Vec<(EventKind, Matcher, RouteAction)>,
}

impl Default for EventRouter {
    /// The favorites page route set.
    fn default() -> Self {
        Self {
            routes: vec![
                (
                    EventKind::Click,
                    Matcher::DataGtm("remove-favorite"),
                    RouteAction::Remove,
                ),
                (
                    EventKind::Click,
                    Matcher::DataGtm("add-to-cart"),
                    RouteAction::AddToCart,
                ),
                (
                    EventKind::Click,
                    Matcher::DataGtm("subscribe"),
                    RouteAction::Subscribe,
                ),
                (
                    EventKind::Change,
                    Matcher::Class("size-select"),
                    RouteAction::SizeChange,
                ),
                (
                    EventKind::Click,
                    Matcher::Class("favorites__back-button"),
                    RouteAction::Back,
                ),
            ],
        }
    }
}

impl EventRouter {
    /// Translate a delegated event into a controller event.
    ///
    /// Returns `None` when no route matches or the matched route lacks the
    /// product id it needs (detached or malformed controls).
    pub fn route(&self, kind: EventKind, target: &EventTarget) -> Option<PageEvent> {
        let action = self
            .routes
            .iter()
            .find(|(route_kind, matcher, _)| *route_kind == kind && matcher.matches(target))
            .map(|(_, _, action)| *action)?;

        match action {
            RouteAction::Remove => Some(PageEvent::RemoveClicked {
                product_id: target.product_id?,
            }),
            RouteAction::AddToCart => Some(PageEvent::AddToCartClicked {
                product_id: target.product_id?,
                selected_size: target.value.clone(),
            }),
            RouteAction::SizeChange => Some(PageEvent::SizeChanged {
                product_id: target.product_id?,
                value: target.value.clone(),
            }),
            RouteAction::Subscribe => Some(PageEvent::SubscribeOpened {
                product_id: target.product_id?,
            }),
            RouteAction::Back => Some(PageEvent::BackClicked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(gtm: Option<&str>, product_id: Option<u64>) -> EventTarget {
        EventTarget {
            gtm: gtm.map(str::to_string),
            classes: vec![],
            product_id,
            value: None,
        }
    }

    #[test]
    fn test_remove_route() {
        let router = EventRouter::default();
        let event = router
            .route(EventKind::Click, &target(Some("remove-favorite"), Some(3)))
            .unwrap();
        assert_eq!(event, PageEvent::RemoveClicked { product_id: 3 });
    }

    #[test]
    fn test_add_to_cart_carries_selected_size() {
        let router = EventRouter::default();
        let mut t = target(Some("add-to-cart"), Some(3));
        t.value = Some("42".to_string());
        let event = router.route(EventKind::Click, &t).unwrap();
        assert_eq!(
            event,
            PageEvent::AddToCartClicked {
                product_id: 3,
                selected_size: Some("42".to_string()),
            }
        );
    }

    #[test]
    fn test_size_change_routes_on_class_and_kind() {
        let router = EventRouter::default();
        let t = EventTarget {
            gtm: None,
            classes: vec!["size-select".to_string()],
            product_id: Some(5),
            value: Some("M".to_string()),
        };
        assert!(router.route(EventKind::Change, &t).is_some());
        // A click on the same control is not a size change.
        assert!(router.route(EventKind::Click, &t).is_none());
    }

    #[test]
    fn test_back_route_needs_no_product() {
        let router = EventRouter::default();
        let t = EventTarget {
            classes: vec!["favorites__back-button".to_string()],
            ..EventTarget::default()
        };
        assert_eq!(
            router.route(EventKind::Click, &t),
            Some(PageEvent::BackClicked)
        );
    }

    #[test]
    fn test_unmatched_target_routes_nowhere() {
        let router = EventRouter::default();
        assert!(router
            .route(EventKind::Click, &target(Some("unknown"), Some(1)))
            .is_none());
    }

    #[test]
    fn test_matched_route_without_product_id_is_dropped() {
        let router = EventRouter::default();
        assert!(router
            .route(EventKind::Click, &target(Some("remove-favorite"), None))
            .is_none());
    }
}
