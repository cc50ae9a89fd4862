//! Checkbox configuration
//!
//! Class names and selectors default to the standard checkbox stylesheet.
//! Every field can be overridden from TOML:
//!
//! ```toml
//! animation_end_event = "webkitAnimationEnd"
//!
//! [classes]
//! upgraded = "my-checkbox--ready"
//!
//! [strings]
//! native_control_selector = ".my-checkbox__input"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ripple::RippleConfig;

/// Root class names toggled by the foundation
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckboxClasses {
    /// Added once the foundation has synced with the native control
    pub upgraded: String,
    /// Present while the native control is disabled
    pub disabled: String,
    pub anim_unchecked_checked: String,
    pub anim_unchecked_indeterminate: String,
    pub anim_checked_unchecked: String,
    pub anim_checked_indeterminate: String,
    pub anim_indeterminate_checked: String,
    pub anim_indeterminate_unchecked: String,
}

impl Default for CheckboxClasses {
    fn default() -> Self {
        Self {
            upgraded: "mdc-checkbox--upgraded".to_string(),
            disabled: "mdc-checkbox--disabled".to_string(),
            anim_unchecked_checked: "mdc-checkbox--anim-unchecked-checked".to_string(),
            anim_unchecked_indeterminate: "mdc-checkbox--anim-unchecked-indeterminate"
                .to_string(),
            anim_checked_unchecked: "mdc-checkbox--anim-checked-unchecked".to_string(),
            anim_checked_indeterminate: "mdc-checkbox--anim-checked-indeterminate".to_string(),
            anim_indeterminate_checked: "mdc-checkbox--anim-indeterminate-checked".to_string(),
            anim_indeterminate_unchecked: "mdc-checkbox--anim-indeterminate-unchecked"
                .to_string(),
        }
    }
}

/// Selectors and attribute names
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckboxStrings {
    /// Selector locating the native control under the root
    pub native_control_selector: String,
    pub aria_checked_attr: String,
    /// `aria-checked` value while indeterminate
    pub aria_checked_indeterminate_value: String,
}

impl Default for CheckboxStrings {
    fn default() -> Self {
        Self {
            native_control_selector: ".mdc-checkbox__native-control".to_string(),
            aria_checked_attr: "aria-checked".to_string(),
            aria_checked_indeterminate_value: "mixed".to_string(),
        }
    }
}

/// Checkbox configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckboxConfig {
    /// Overrides the process-wide animation-end event name
    pub animation_end_event: Option<String>,
    pub classes: CheckboxClasses,
    pub strings: CheckboxStrings,
    pub ripple: RippleConfig,
}

impl CheckboxConfig {
    /// Create a config with the standard class names
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing fields keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set the native control selector
    pub fn native_control_selector(mut self, selector: impl Into<String>) -> Self {
        self.strings.native_control_selector = selector.into();
        self
    }

    /// Set the animation-end event name
    pub fn animation_end_event(mut self, event: impl Into<String>) -> Self {
        self.animation_end_event = Some(event.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckboxError;

    #[test]
    fn test_default_names() {
        let config = CheckboxConfig::default();
        assert_eq!(
            config.strings.native_control_selector,
            ".mdc-checkbox__native-control"
        );
        assert_eq!(config.classes.upgraded, "mdc-checkbox--upgraded");
        assert!(config.animation_end_event.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CheckboxConfig::from_toml_str(
            r#"
            animation_end_event = "webkitAnimationEnd"

            [classes]
            upgraded = "ready"

            [ripple]
            unbounded = "ripple--free"
            "#,
        )
        .unwrap();

        assert_eq!(config.classes.upgraded, "ready");
        assert_eq!(
            config.classes.anim_checked_unchecked,
            "mdc-checkbox--anim-checked-unchecked"
        );
        assert_eq!(config.ripple.unbounded, "ripple--free");
        assert_eq!(
            config.animation_end_event.as_deref(),
            Some("webkitAnimationEnd")
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = CheckboxConfig::from_toml_str("classes = 3").unwrap_err();
        assert!(matches!(err, CheckboxError::Config(_)));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = CheckboxConfig::new()
            .native_control_selector(".input")
            .animation_end_event("animationend");
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CheckboxConfig::from_toml_str(&text).unwrap(), config);
    }
}
