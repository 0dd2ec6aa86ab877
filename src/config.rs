//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Default key the preference record is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "_dusk_dark_mode_toggle_enabled";

/// Default class toggled on the document root in dark mode.
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";

/// Default id of the global style sheet.
pub const DEFAULT_STYLE_ID: &str = "dusk-dark-mode-styles";

/// Element selectors that switch to a dark `color-scheme` in dark mode.
pub const DEFAULT_FORM_CONTROLS: &[&str] = &["input", "textarea", "select"];

/// Names and selectors the controller works with.
///
/// Every field has a default, so an empty YAML document is a valid config.
///
/// # Example
///
/// ```rust
/// use dusk::ThemeConfig;
///
/// let config = ThemeConfig::from_yaml("dark_class: night").unwrap();
/// assert_eq!(config.dark_class, "night");
/// assert_eq!(config.storage_key, dusk::DEFAULT_STORAGE_KEY);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub form_controls: Vec<String>,
    pub style_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            form_controls: DEFAULT_FORM_CONTROLS.iter().map(|s| s.to_string()).collect(),
            style_id: DEFAULT_STYLE_ID.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses and validates a YAML config.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = if source.trim().is_empty() {
            ThemeConfig::default()
        } else {
            serde_yaml::from_str(source)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_dark_class(mut self, class: impl Into<String>) -> Self {
        self.dark_class = class.into();
        self
    }

    /// Checks that names are usable as storage keys, CSS classes and ids.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.is_empty() {
            return Err(ThemeError::InvalidConfig(
                "storage_key must not be empty".into(),
            ));
        }
        if !is_css_identifier(&self.dark_class) {
            return Err(ThemeError::InvalidConfig(format!(
                "dark_class '{}' is not a valid CSS class name",
                self.dark_class
            )));
        }
        if !is_css_identifier(&self.style_id) {
            return Err(ThemeError::InvalidConfig(format!(
                "style_id '{}' is not a valid CSS identifier",
                self.style_id
            )));
        }
        if self.form_controls.is_empty() {
            return Err(ThemeError::InvalidConfig(
                "form_controls must list at least one selector".into(),
            ));
        }
        if let Some(bad) = self
            .form_controls
            .iter()
            .find(|s| s.trim().is_empty() || s.contains(['{', '}', ',', ';']))
        {
            return Err(ThemeError::InvalidConfig(format!(
                "form control selector '{}' is not a simple selector",
                bad
            )));
        }
        Ok(())
    }
}

/// Accepts `-?[A-Za-z_][A-Za-z0-9_-]*`, the unescaped CSS identifier subset.
fn is_css_identifier(name: &str) -> bool {
    let body = name.strip_prefix('-').unwrap_or(name);
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
