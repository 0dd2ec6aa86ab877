//! Document port: the root element's class list and global style sheets.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::error::ThemeError;

/// The visual side of the host document.
///
/// Implementations toggle classes on the document root and hold global
/// style sheets keyed by id. Installing a sheet under an existing id
/// replaces it.
pub trait Document {
    /// Adds (`on = true`) or removes (`on = false`) a class on the root element.
    fn set_root_class(&mut self, class: &str, on: bool) -> Result<(), ThemeError>;

    /// Returns true if the root element carries `class`.
    fn has_root_class(&self, class: &str) -> bool;

    /// Installs or replaces the global style sheet `id`.
    fn install_style(&mut self, id: &str, css: &str) -> Result<(), ThemeError>;

    /// Returns the installed style sheet `id`, if any.
    fn style(&self, id: &str) -> Option<String>;
}

#[derive(Debug, Default)]
struct DocumentState {
    root_classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

/// A headless document kept in memory.
///
/// Clones share state, so a caller can hand one clone to the controller and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root classes in sorted order.
    pub fn root_classes(&self) -> Vec<String> {
        self.state.borrow().root_classes.iter().cloned().collect()
    }

    /// Renders the root class list the way a `class` attribute would read.
    pub fn class_attribute(&self) -> String {
        self.root_classes().join(" ")
    }
}

impl Document for MemoryDocument {
    fn set_root_class(&mut self, class: &str, on: bool) -> Result<(), ThemeError> {
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(ThemeError::Document(format!(
                "invalid class name '{}'",
                class
            )));
        }
        let mut state = self.state.borrow_mut();
        if on {
            state.root_classes.insert(class.to_string());
        } else {
            state.root_classes.remove(class);
        }
        Ok(())
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.state.borrow().root_classes.contains(class)
    }

    fn install_style(&mut self, id: &str, css: &str) -> Result<(), ThemeError> {
        self.state
            .borrow_mut()
            .styles
            .insert(id.to_string(), css.to_string());
        Ok(())
    }

    fn style(&self, id: &str) -> Option<String> {
        self.state.borrow().styles.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_root_class() {
        let mut doc = MemoryDocument::new();
        doc.set_root_class("dark-mode", true).unwrap();
        assert!(doc.has_root_class("dark-mode"));

        doc.set_root_class("dark-mode", false).unwrap();
        assert!(!doc.has_root_class("dark-mode"));
    }

    #[test]
    fn test_removing_absent_class_is_noop() {
        let mut doc = MemoryDocument::new();
        doc.set_root_class("dark-mode", false).unwrap();
        assert!(doc.root_classes().is_empty());
    }

    #[test]
    fn test_other_classes_untouched() {
        let mut doc = MemoryDocument::new();
        doc.set_root_class("app", true).unwrap();
        doc.set_root_class("dark-mode", true).unwrap();
        doc.set_root_class("dark-mode", false).unwrap();
        assert_eq!(doc.class_attribute(), "app");
    }

    #[test]
    fn test_invalid_class_rejected() {
        let mut doc = MemoryDocument::new();
        assert!(doc.set_root_class("two words", true).is_err());
        assert!(doc.set_root_class("", true).is_err());
    }

    #[test]
    fn test_install_style_replaces() {
        let mut doc = MemoryDocument::new();
        doc.install_style("s", "a {}").unwrap();
        doc.install_style("s", "b {}").unwrap();
        assert_eq!(doc.style("s").as_deref(), Some("b {}"));
        assert_eq!(doc.style("missing"), None);
    }

    #[test]
    fn test_clones_share_state() {
        let doc = MemoryDocument::new();
        let mut handle = doc.clone();
        handle.set_root_class("x", true).unwrap();
        assert!(doc.has_root_class("x"));
    }
}
