//! # Dusk - Dark Mode Preference Controller
//!
//! `dusk` keeps a single dark/light preference, persists it, and mirrors it
//! onto a document root as a marker class. When the user never chose dark
//! explicitly, the host's color-scheme preference decides.
//!
//! ## Core Concepts
//!
//! - [`DarkMode`]: The controller handle: read, set, update, toggle
//! - [`Host`]: The injected ports: [`PreferenceStore`], [`Document`], [`SystemSignal`]
//! - [`DarkModeStyles`]: Global rule giving form controls a dark `color-scheme`
//! - [`ThemeConfig`]: Storage key, marker class and selectors
//! - [`use_dark_mode`]: Builds the `(value, controller, styles)` triple
//!
//! ## Quick Start
//!
//! ```rust
//! use dusk::{use_dark_mode, FixedSignal, Host, MemoryDocument, MemoryStore, ThemeConfig};
//! use dusk::Document;
//!
//! let document = MemoryDocument::new();
//! let host = Host::new(MemoryStore::new(), document.clone(), FixedSignal(true));
//!
//! let (is_dark, dark_mode, styles) = use_dark_mode(host, ThemeConfig::default()).unwrap();
//! assert!(is_dark);
//! assert!(document.has_root_class("dark-mode"));
//!
//! let mut root = document.clone();
//! styles.mount(&mut root).unwrap();
//!
//! dark_mode.toggle().unwrap();
//! assert!(!document.has_root_class("dark-mode"));
//! ```
//!
//! ## Stored Preference
//!
//! The record is the string `"true"` or `"false"`. Only `"true"` is treated
//! as an explicit choice on startup; `"false"` falls back to the system
//! signal just like a missing record.

mod config;
mod controller;
mod document;
mod error;
mod mode;
mod signal;
mod store;
mod style;

pub use config::{
    ThemeConfig, DEFAULT_DARK_CLASS, DEFAULT_FORM_CONTROLS, DEFAULT_STORAGE_KEY, DEFAULT_STYLE_ID,
};
pub use controller::{use_dark_mode, DarkMode, Host, PreferenceSource, SetPreference};
pub use document::{Document, MemoryDocument};
pub use error::ThemeError;
pub use mode::{decode_preference, encode_preference, ColorMode};
pub use signal::{
    detect_color_mode, reset_color_mode_detector, set_color_mode_detector, FixedSignal, OsSignal,
    SystemSignal,
};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use style::DarkModeStyles;
