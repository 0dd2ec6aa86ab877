//! The theme preference controller.
//!
//! [`DarkMode`] owns the in-memory dark/light preference and keeps the host
//! in step with it. It is built from a [`Host`] bundling three ports:
//!
//! - a [`PreferenceStore`] holding the persisted `"true"`/`"false"` record,
//! - a [`Document`] whose root carries the dark marker class,
//! - a [`SystemSignal`] consulted once when there is no explicit dark choice.
//!
//! # Initialization
//!
//! 1. If the stored record is exactly `"true"`, start dark.
//! 2. Otherwise (absent, `"false"`, or anything else) use the system signal.
//!
//! A stored `"false"` therefore does not pin light mode on a dark-preferring
//! host. The resolved value is then synchronized, exactly as after a change.
//!
//! # Synchronization
//!
//! Every change of value (and the initial mount) adds or removes the dark
//! class on the document root, then overwrites the storage key. Setting the
//! value it already has does nothing, unless the previous synchronization
//! failed, in which case it is retried.
//!
//! The handle is reference counted and single threaded: clones share one
//! preference, and changes are applied in the order they are made.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::document::Document;
use crate::error::ThemeError;
use crate::mode::{decode_preference, encode_preference, ColorMode};
use crate::signal::SystemSignal;
use crate::store::PreferenceStore;
use crate::style::DarkModeStyles;

/// The capabilities the controller needs from its host.
#[derive(Debug, Clone)]
pub struct Host<S, D, Y> {
    pub store: S,
    pub document: D,
    pub signal: Y,
}

impl<S, D, Y> Host<S, D, Y> {
    pub fn new(store: S, document: D, signal: Y) -> Self {
        Self {
            store,
            document,
            signal,
        }
    }
}

/// Where the initial preference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    /// The stored record said `"true"`.
    Stored,
    /// No explicit dark choice was stored; the system signal decided.
    System,
}

/// A requested change of preference.
///
/// Either a new value, or a function computing it from the current one.
pub enum SetPreference {
    Direct(bool),
    Updater(Box<dyn FnOnce(bool) -> bool>),
}

impl SetPreference {
    /// Wraps an updater function.
    pub fn updater(f: impl FnOnce(bool) -> bool + 'static) -> Self {
        SetPreference::Updater(Box::new(f))
    }

    fn resolve(self, current: bool) -> bool {
        match self {
            SetPreference::Direct(value) => value,
            SetPreference::Updater(f) => f(current),
        }
    }
}

impl From<bool> for SetPreference {
    fn from(value: bool) -> Self {
        SetPreference::Direct(value)
    }
}

impl From<ColorMode> for SetPreference {
    fn from(mode: ColorMode) -> Self {
        SetPreference::Direct(mode.is_dark())
    }
}

impl fmt::Debug for SetPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetPreference::Direct(value) => f.debug_tuple("Direct").field(value).finish(),
            SetPreference::Updater(_) => f.write_str("Updater(..)"),
        }
    }
}

struct State {
    config: ThemeConfig,
    is_dark: bool,
    source: PreferenceSource,
    // False until the host has accepted the current value.
    synced: bool,
}

struct Ports<S, D> {
    store: S,
    document: D,
}

impl<S: PreferenceStore, D: Document> Ports<S, D> {
    fn sync(&mut self, config: &ThemeConfig, dark: bool) -> Result<(), ThemeError> {
        self.document.set_root_class(&config.dark_class, dark)?;
        self.store.set(&config.storage_key, encode_preference(dark))?;
        tracing::debug!(
            dark,
            key = %config.storage_key,
            class = %config.dark_class,
            "synchronized theme preference"
        );
        Ok(())
    }
}

struct Shared<S, D> {
    state: RefCell<State>,
    ports: RefCell<Ports<S, D>>,
}

/// Handle to a mounted theme preference controller.
///
/// # Example
///
/// ```rust
/// use dusk::{DarkMode, FixedSignal, Host, MemoryDocument, MemoryStore, ThemeConfig};
/// use dusk::{Document, PreferenceStore};
///
/// let store = MemoryStore::new();
/// let document = MemoryDocument::new();
/// let host = Host::new(store.clone(), document.clone(), FixedSignal(false));
///
/// let dark_mode = DarkMode::new(host, ThemeConfig::default()).unwrap();
/// assert!(!dark_mode.is_dark());
///
/// dark_mode.set(true).unwrap();
/// assert!(document.has_root_class("dark-mode"));
/// assert_eq!(
///     store.get(dusk::DEFAULT_STORAGE_KEY).unwrap().as_deref(),
///     Some("true")
/// );
/// ```
pub struct DarkMode<S, D> {
    inner: Rc<Shared<S, D>>,
}

impl<S, D> Clone for DarkMode<S, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, D> fmt::Debug for DarkMode<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("DarkMode")
            .field("is_dark", &state.is_dark)
            .field("source", &state.source)
            .field("synced", &state.synced)
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore, D: Document> DarkMode<S, D> {
    /// Resolves the initial preference and runs the first synchronization.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, the store cannot be read,
    /// or the initial synchronization fails.
    pub fn new<Y: SystemSignal>(
        host: Host<S, D, Y>,
        config: ThemeConfig,
    ) -> Result<Self, ThemeError> {
        config.validate()?;
        let Host {
            store,
            document,
            signal,
        } = host;

        let stored = store.get(&config.storage_key)?;
        let (is_dark, source) = resolve_initial(stored.as_deref(), &signal);
        tracing::debug!(dark = is_dark, ?source, "resolved initial theme preference");

        let mut ports = Ports { store, document };
        ports.sync(&config, is_dark)?;

        let state = State {
            config,
            is_dark,
            source,
            synced: true,
        };
        Ok(Self {
            inner: Rc::new(Shared {
                state: RefCell::new(state),
                ports: RefCell::new(ports),
            }),
        })
    }

    /// Current preference; `true` means dark.
    pub fn is_dark(&self) -> bool {
        self.inner.state.borrow().is_dark
    }

    /// Current preference as a [`ColorMode`].
    pub fn mode(&self) -> ColorMode {
        ColorMode::from(self.is_dark())
    }

    /// Where the initial value came from.
    pub fn initial_source(&self) -> PreferenceSource {
        self.inner.state.borrow().source
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> ThemeConfig {
        self.inner.state.borrow().config.clone()
    }

    /// Sets the preference directly.
    pub fn set(&self, dark: bool) -> Result<(), ThemeError> {
        self.apply(SetPreference::Direct(dark))
    }

    /// Sets the preference from a function of the current value.
    pub fn update(&self, f: impl FnOnce(bool) -> bool + 'static) -> Result<(), ThemeError> {
        self.apply(SetPreference::updater(f))
    }

    /// Flips the preference.
    pub fn toggle(&self) -> Result<(), ThemeError> {
        self.update(|dark| !dark)
    }

    /// Returns false while the last synchronization has not succeeded.
    pub fn is_synced(&self) -> bool {
        self.inner.state.borrow().synced
    }

    /// Applies a requested change and synchronizes if the value moved.
    ///
    /// On error the in-memory value keeps the new preference and the host
    /// may be partially updated. The next `apply` synchronizes again, even
    /// with an unchanged value.
    ///
    /// The ports run with the preference state released, so a port may read
    /// this handle. Changing the preference from inside a port panics.
    pub fn apply(&self, change: impl Into<SetPreference>) -> Result<(), ThemeError> {
        // The updater runs without a borrow held so it may read this handle.
        let change: SetPreference = change.into();
        let current = self.is_dark();
        let next = change.resolve(current);

        let config = {
            let mut state = self.inner.state.borrow_mut();
            if state.is_dark == next && state.synced {
                tracing::trace!(dark = next, "theme preference unchanged");
                return Ok(());
            }
            state.is_dark = next;
            state.synced = false;
            state.config.clone()
        };

        self.inner.ports.borrow_mut().sync(&config, next)?;

        self.inner.state.borrow_mut().synced = true;
        Ok(())
    }
}

/// Builds a controller and its styling unit.
///
/// Returns the current preference, the controller handle (the setter), and
/// the [`DarkModeStyles`] to mount once at the application root.
pub fn use_dark_mode<S, D, Y>(
    host: Host<S, D, Y>,
    config: ThemeConfig,
) -> Result<(bool, DarkMode<S, D>, DarkModeStyles), ThemeError>
where
    S: PreferenceStore,
    D: Document,
    Y: SystemSignal,
{
    let styles = DarkModeStyles::new(&config)?;
    let dark_mode = DarkMode::new(host, config)?;
    Ok((dark_mode.is_dark(), dark_mode, styles))
}

fn resolve_initial<Y: SystemSignal + ?Sized>(
    stored: Option<&str>,
    signal: &Y,
) -> (bool, PreferenceSource) {
    if let Some(raw) = stored {
        if decode_preference(raw) == Some(true) {
            return (true, PreferenceSource::Stored);
        }
        if raw != "false" {
            tracing::warn!(value = raw, "ignoring unrecognized stored theme preference");
        }
    }
    (signal.prefers_dark(), PreferenceSource::System)
}
