//! DOM effect vocabulary.
//!
//! Effects are applied by the host in order. Timed reversions are modeled
//! as `Schedule` entries: fire-and-forget, non-cancelable, and a later
//! schedule for the same token supersedes the earlier one's effect (last
//! write wins). The scheduled effects are idempotent presentation resets,
//! so overlapping timers are harmless.

/// Card fade-out duration before the node is detached.
pub const FADE_OUT_DURATION_MS: u64 = 300;

/// How long the temporary "added" button state lasts.
pub const BUTTON_RESET_DELAY_MS: u64 = 2000;

/// How long the invalid-size flag stays on the selector.
pub const SIZE_INVALID_DURATION_MS: u64 = 2000;

/// Delay between closing the subscribe modal and opening the confirmation.
pub const SUCCESS_MODAL_DELAY_MS: u64 = 500;

/// Named page anchors the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    FavoritesCount,
    CartCount,
    Content,
}

/// Which modal an effect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Subscribe,
    Success,
}

/// Control whose pending timed reversion a new schedule supersedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetToken {
    SizeSelect { card: u64 },
    ActionButton { card: u64 },
    Content,
    Modal,
}

/// A single instruction for the host to apply to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the text of a named anchor.
    SetText { anchor: Anchor, text: String },
    /// Replace the inner markup of a named anchor.
    SetHtml { anchor: Anchor, html: String },
    /// Fade a card out over `duration_ms`, then detach its node.
    FadeOutRemove { card: u64, duration_ms: u64 },
    /// Flag a card's size selector as invalid.
    MarkSizeInvalid { card: u64 },
    /// Clear the invalid flag from a card's size selector.
    ClearSizeInvalid { card: u64 },
    /// Refresh the selector's placeholder/filled state from its value.
    RefreshSizeSelect { card: u64, selected: Option<String> },
    /// Temporarily replace a card's action button label/disabled state.
    SetButtonState {
        card: u64,
        label: String,
        disabled: bool,
    },
    /// Restore a card's action button to its resting label, enabled.
    RestoreButton { card: u64, label: String },
    /// Fill the subscribe modal body with product markup.
    PopulateSubscribeModal { html: String },
    /// Show a modal via the page's widget library.
    ShowModal(ModalKind),
    /// Hide a modal via the page's widget library.
    HideModal(ModalKind),
    /// Mark the subscribe form validated-invalid with field errors.
    MarkSubscribeFormInvalid {
        errors: Vec<crate::subscribe::FieldError>,
    },
    /// Go back in browser history.
    NavigateBack,
    /// Navigate to the site root.
    NavigateHome,
    /// Apply `effect` after `delay_ms`; supersedes any pending schedule
    /// for the same token.
    Schedule {
        token: ResetToken,
        delay_ms: u64,
        effect: Box<Effect>,
    },
}

impl Effect {
    /// Convenience constructor for timed reversions.
    pub fn schedule(token: ResetToken, delay_ms: u64, effect: Effect) -> Self {
        Effect::Schedule {
            token,
            delay_ms,
            effect: Box::new(effect),
        }
    }
}
