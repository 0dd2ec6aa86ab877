//! Light/dark color mode and its stored encoding.

/// The user's preferred color mode.
///
/// The controller works in terms of a plain `bool` (`true` = dark); this enum
/// is the typed view of the same value and converts losslessly both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Lowercase name, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl From<bool> for ColorMode {
    fn from(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

impl From<ColorMode> for bool {
    fn from(mode: ColorMode) -> Self {
        mode.is_dark()
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{}', expected 'light' or 'dark'", other)),
        }
    }
}

/// Encodes a preference the way it is persisted: `"true"` or `"false"`.
pub fn encode_preference(dark: bool) -> &'static str {
    if dark {
        "true"
    } else {
        "false"
    }
}

/// Decodes a stored record.
///
/// Only the literal string `"true"` means dark. Anything else, including
/// `"false"`, yields `None` so the caller falls back to the system signal.
pub fn decode_preference(raw: &str) -> Option<bool> {
    (raw == "true").then_some(true)
}
