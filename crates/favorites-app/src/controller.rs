//! Favorites view controller.
//!
//! A state machine over one mutable product list and the page's DOM
//! subtree. The list is the single source of truth; every mutation emits
//! the DOM effects that keep the projection consistent in the same call.

use favorites_domain::{validate_size_selection, FavoritesData, Product};
use favorites_markup::{
    render_empty_state, render_error_alert, render_grid, render_subscribe_modal,
    LOAD_ERROR_MESSAGE,
};

use crate::bindings::ViewBindings;
use crate::effect::{
    Anchor, Effect, ModalKind, ResetToken, BUTTON_RESET_DELAY_MS, FADE_OUT_DURATION_MS,
    SIZE_INVALID_DURATION_MS, SUCCESS_MODAL_DELAY_MS,
};
use crate::events::PageEvent;
use crate::service::{FavoritesClient, FeedError};
use crate::subscribe::SubscribeForm;

/// Resting label of the add-to-cart button.
const ADD_TO_CART_LABEL: &str = "В корзину";

/// Temporary acknowledgment label after a successful add.
const ADDED_LABEL: &str = "Добавлено ✓";

/// Lifecycle of the favorites view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Feed fetch in flight; list-mutating controls do not exist yet.
    Loading,
    /// Grid rendered with at least one card.
    Loaded,
    /// Empty-state view shown.
    Empty,
    /// Inline error shown; no further list interactivity.
    Failed,
}

/// The favorites page controller.
pub struct FavoritesController {
    products: Vec<Product>,
    cart_count: u64,
    view: ViewState,
    bindings: ViewBindings,
    history_depth: usize,
}

impl FavoritesController {
    /// Create a controller in the `Loading` state.
    ///
    /// `history_depth` is the browser history length at startup, injected
    /// so back-navigation stays testable.
    pub fn new(bindings: ViewBindings, history_depth: usize) -> Self {
        Self {
            products: Vec::new(),
            cart_count: 0,
            view: ViewState::Loading,
            bindings,
            history_depth,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn cart_count(&self) -> u64 {
        self.cart_count
    }

    pub fn bindings(&self) -> &ViewBindings {
        &self.bindings
    }

    /// Fetch the feed and transition out of `Loading`.
    pub async fn load(&mut self, client: &FavoritesClient, url: &str) -> Vec<Effect> {
        match client.fetch(url).await {
            Ok(data) => self.ingest(data),
            Err(error) => self.fail(&error),
        }
    }

    /// Store fetched items and render the grid or the empty state.
    pub fn ingest(&mut self, data: FavoritesData) -> Vec<Effect> {
        self.products = data.items;
        tracing::info!(count = self.products.len(), "favorites loaded");

        let mut effects = vec![Effect::SetText {
            anchor: Anchor::FavoritesCount,
            text: self.products.len().to_string(),
        }];

        if self.products.is_empty() {
            self.view = ViewState::Empty;
            effects.push(Effect::SetHtml {
                anchor: Anchor::Content,
                html: render_empty_state(),
            });
            return effects;
        }

        self.view = ViewState::Loaded;
        effects.push(Effect::SetHtml {
            anchor: Anchor::Content,
            html: render_grid(&self.products),
        });
        // Initialize each rendered selector's visual state from its value.
        for product in self.products.iter().filter(|p| !p.sizes.is_empty()) {
            effects.push(Effect::RefreshSizeSelect {
                card: product.id,
                selected: None,
            });
        }
        effects
    }

    /// Render the inline error view. No automatic retry.
    pub fn fail(&mut self, error: &FeedError) -> Vec<Effect> {
        tracing::error!(error = %error, "favorites feed failed to load");
        self.view = ViewState::Failed;
        vec![Effect::SetHtml {
            anchor: Anchor::Content,
            html: render_error_alert(LOAD_ERROR_MESSAGE),
        }]
    }

    /// Dispatch a routed user event.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::RemoveClicked { product_id } => self.handle_remove(product_id),
            PageEvent::AddToCartClicked {
                product_id,
                selected_size,
            } => self.handle_add_to_cart(product_id, selected_size.as_deref()),
            PageEvent::SizeChanged { product_id, value } => {
                self.handle_size_changed(product_id, value)
            }
            PageEvent::SubscribeOpened { product_id } => self.handle_subscribe_opened(product_id),
            PageEvent::SubscribeSubmitted(form) => self.handle_subscribe_submitted(&form),
            PageEvent::BackClicked => self.handle_back(),
        }
    }

    fn handle_remove(&mut self, product_id: u64) -> Vec<Effect> {
        let title = self
            .find_product(product_id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "Товар".to_string());

        self.products.retain(|p| p.id != product_id);
        tracing::info!(product_id, title, "removed from favorites");

        let mut effects = vec![
            Effect::SetText {
                anchor: Anchor::FavoritesCount,
                text: self.products.len().to_string(),
            },
            Effect::FadeOutRemove {
                card: product_id,
                duration_ms: FADE_OUT_DURATION_MS,
            },
        ];

        // The empty state swaps in only after the fade-out finishes.
        if self.products.is_empty() {
            self.view = ViewState::Empty;
            effects.push(Effect::schedule(
                ResetToken::Content,
                FADE_OUT_DURATION_MS,
                Effect::SetHtml {
                    anchor: Anchor::Content,
                    html: render_empty_state(),
                },
            ));
        }
        effects
    }

    fn handle_add_to_cart(&mut self, product_id: u64, selected_size: Option<&str>) -> Vec<Effect> {
        let product = match self.find_product(product_id) {
            Some(product) => product,
            None => return Vec::new(),
        };

        let result = validate_size_selection(product, selected_size);
        if !result.is_valid {
            tracing::info!(
                product_id,
                message = result.message.as_deref().unwrap_or_default(),
                "add to cart rejected"
            );
            return vec![
                Effect::MarkSizeInvalid { card: product_id },
                Effect::schedule(
                    ResetToken::SizeSelect { card: product_id },
                    SIZE_INVALID_DURATION_MS,
                    Effect::ClearSizeInvalid { card: product_id },
                ),
            ];
        }

        let title = product.title.clone();
        self.cart_count += 1;
        tracing::info!(product_id, title, size = selected_size, "added to cart");

        vec![
            Effect::RefreshSizeSelect {
                card: product_id,
                selected: selected_size.map(str::to_string),
            },
            Effect::SetButtonState {
                card: product_id,
                label: ADDED_LABEL.to_string(),
                disabled: true,
            },
            Effect::schedule(
                ResetToken::ActionButton { card: product_id },
                BUTTON_RESET_DELAY_MS,
                Effect::RestoreButton {
                    card: product_id,
                    label: ADD_TO_CART_LABEL.to_string(),
                },
            ),
            Effect::SetText {
                anchor: Anchor::CartCount,
                text: self.cart_count.to_string(),
            },
        ]
    }

    fn handle_size_changed(&mut self, product_id: u64, value: Option<String>) -> Vec<Effect> {
        vec![
            Effect::RefreshSizeSelect {
                card: product_id,
                selected: value,
            },
            Effect::ClearSizeInvalid { card: product_id },
        ]
    }

    fn handle_subscribe_opened(&mut self, product_id: u64) -> Vec<Effect> {
        let product = match self.find_product(product_id) {
            // The subscribe affordance only exists on out-of-stock cards.
            Some(product) if !product.in_stock => product,
            _ => return Vec::new(),
        };

        vec![
            Effect::PopulateSubscribeModal {
                html: render_subscribe_modal(product),
            },
            Effect::ShowModal(ModalKind::Subscribe),
        ]
    }

    fn handle_subscribe_submitted(&mut self, form: &SubscribeForm) -> Vec<Effect> {
        match form.validate() {
            Err(errors) => vec![Effect::MarkSubscribeFormInvalid { errors }],
            Ok(()) => {
                tracing::info!(
                    product_id = form.product_id,
                    size = form.size.as_deref(),
                    "restock subscription accepted"
                );
                vec![
                    Effect::HideModal(ModalKind::Subscribe),
                    Effect::schedule(
                        ResetToken::Modal,
                        SUCCESS_MODAL_DELAY_MS,
                        Effect::ShowModal(ModalKind::Success),
                    ),
                ]
            }
        }
    }

    fn handle_back(&self) -> Vec<Effect> {
        if self.history_depth > 1 {
            vec![Effect::NavigateBack]
        } else {
            vec![Effect::NavigateHome]
        }
    }

    fn find_product(&self, product_id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}
