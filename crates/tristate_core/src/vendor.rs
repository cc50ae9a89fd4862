//! Vendor-normalized event names
//!
//! Older engines only fire the prefixed `webkitAnimationEnd`. The name is a
//! property of the platform, so it is resolved once per process and shared
//! by every widget instance.
//!
//! ```rust
//! use tristate_core::vendor::{animation_end_event, init_animation_end_event, StyleSupport};
//!
//! // At startup
//! init_animation_end_event(StyleSupport::webkit_only());
//!
//! // Anywhere afterwards
//! assert_eq!(animation_end_event(), "webkitAnimationEnd");
//! ```

use std::sync::OnceLock;

use crate::events::event_types;

/// Global animation-end event name
static ANIMATION_END_EVENT: OnceLock<&'static str> = OnceLock::new();

/// Animation capabilities of the host style engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSupport {
    /// Unprefixed `animation` properties and events
    pub unprefixed_animation: bool,
    /// `-webkit-` prefixed animation properties and events
    pub webkit_animation: bool,
}

impl Default for StyleSupport {
    fn default() -> Self {
        Self {
            unprefixed_animation: true,
            webkit_animation: false,
        }
    }
}

impl StyleSupport {
    /// A legacy engine that only knows the prefixed names
    pub fn webkit_only() -> Self {
        Self {
            unprefixed_animation: false,
            webkit_animation: true,
        }
    }
}

/// Pick the animation-end event name for the given capabilities
pub fn animation_end_event_name(support: StyleSupport) -> &'static str {
    if !support.unprefixed_animation && support.webkit_animation {
        event_types::WEBKIT_ANIMATION_END
    } else {
        event_types::ANIMATION_END
    }
}

/// Resolve the process-wide animation-end event name
///
/// Only the first call resolves; later calls return the stored name.
pub fn init_animation_end_event(support: StyleSupport) -> &'static str {
    let resolved = animation_end_event_name(support);
    let stored = *ANIMATION_END_EVENT.get_or_init(|| resolved);
    if stored != resolved {
        tracing::debug!(stored, resolved, "animation end event already resolved");
    }
    stored
}

/// The resolved animation-end event name, or the unprefixed one if the
/// process never resolved it
pub fn animation_end_event() -> &'static str {
    ANIMATION_END_EVENT
        .get()
        .copied()
        .unwrap_or(event_types::ANIMATION_END)
}

/// Check if the animation-end event name has been resolved
pub fn is_animation_end_event_initialized() -> bool {
    ANIMATION_END_EVENT.get().is_some()
}
