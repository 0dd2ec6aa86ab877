//! Global dark mode style sheet.
//!
//! [`DarkModeStyles`] is the styling unit returned next to the controller.
//! Mounted once at the application root, it installs a rule that switches
//! native form controls to a dark `color-scheme` whenever the document root
//! carries the dark marker class.

use minijinja::{context, Environment};

use crate::config::ThemeConfig;
use crate::document::Document;
use crate::error::ThemeError;

const TEMPLATE_NAME: &str = "dark_mode.css";

const TEMPLATE: &str = "{% for control in controls %}.{{ dark_class }} {{ control }}\
{% if not loop.last %},\n{% endif %}{% endfor %} {\n  color-scheme: dark;\n}";

/// Renderable global style rule for dark mode.
///
/// # Example
///
/// ```rust
/// use dusk::{DarkModeStyles, ThemeConfig};
///
/// let styles = DarkModeStyles::new(&ThemeConfig::default()).unwrap();
/// let css = styles.render().unwrap();
/// assert!(css.starts_with(".dark-mode input,"));
/// assert!(css.contains("color-scheme: dark;"));
/// ```
#[derive(Debug, Clone)]
pub struct DarkModeStyles {
    env: Environment<'static>,
    dark_class: String,
    controls: Vec<String>,
    style_id: String,
}

impl DarkModeStyles {
    /// Builds the styling unit for the classes and selectors in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config does not validate.
    pub fn new(config: &ThemeConfig) -> Result<Self, ThemeError> {
        config.validate()?;

        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self {
            env,
            dark_class: config.dark_class.clone(),
            controls: config.form_controls.clone(),
            style_id: config.style_id.clone(),
        })
    }

    /// Id the style sheet is installed under.
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Renders the CSS rule.
    pub fn render(&self) -> Result<String, ThemeError> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let css = template.render(context! {
            dark_class => &self.dark_class,
            controls => &self.controls,
        })?;
        Ok(css)
    }

    /// Installs the rule into `document`. Mounting again replaces the sheet.
    pub fn mount<D: Document + ?Sized>(&self, document: &mut D) -> Result<(), ThemeError> {
        let css = self.render()?;
        document.install_style(&self.style_id, &css)?;
        tracing::debug!(style_id = %self.style_id, "mounted dark mode styles");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn test_render_default() {
        let styles = DarkModeStyles::new(&ThemeConfig::default()).unwrap();
        assert_eq!(
            styles.render().unwrap(),
            ".dark-mode input,\n.dark-mode textarea,\n.dark-mode select {\n  color-scheme: dark;\n}"
        );
    }

    #[test]
    fn test_render_custom_class_and_controls() {
        let config = ThemeConfig {
            form_controls: vec!["button".into()],
            ..ThemeConfig::default().with_dark_class("night")
        };
        let styles = DarkModeStyles::new(&config).unwrap();
        assert_eq!(
            styles.render().unwrap(),
            ".night button {\n  color-scheme: dark;\n}"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ThemeConfig::default().with_dark_class("");
        assert!(DarkModeStyles::new(&config).is_err());
    }

    #[test]
    fn test_mount_installs_once() {
        let styles = DarkModeStyles::new(&ThemeConfig::default()).unwrap();
        let mut doc = MemoryDocument::new();

        styles.mount(&mut doc).unwrap();
        styles.mount(&mut doc).unwrap();

        let css = doc.style(styles.style_id()).unwrap();
        assert_eq!(css, styles.render().unwrap());
    }
}
