//! System color-scheme signal.
//!
//! The controller reads the host's dark-mode hint exactly once, at
//! initialization. [`SystemSignal`] is the seam: [`OsSignal`] asks the
//! operating system, [`FixedSignal`] returns a constant, and any
//! `Fn() -> bool` closure works too.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use crate::mode::ColorMode;

/// Source of the host's "prefers dark" display setting.
pub trait SystemSignal {
    /// Returns `true` when the host environment prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

impl<F> SystemSignal for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// A signal that always reports the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSignal(pub bool);

impl SystemSignal for FixedSignal {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Signal backed by the process-wide color mode detector.
///
/// By default the detector queries the OS through `dark-light`; it can be
/// replaced with [`set_color_mode_detector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignal;

impl SystemSignal for OsSignal {
    fn prefers_dark(&self) -> bool {
        detect_color_mode().is_dark()
    }
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used by [`OsSignal`].
///
/// Hosts that already know the display mode (a settings file, a toolkit
/// callback) install it here so every controller built with [`OsSignal`]
/// picks it up without touching the OS. Tests use it to pin the mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_color_mode_detector() {
    set_color_mode_detector(os_color_mode_detector);
}

/// Runs the current detector. [`OsSignal`] calls this once per controller.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_color_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
