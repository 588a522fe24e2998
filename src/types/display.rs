use serde::{Deserialize, Serialize};

/// Key of the theme preference in the shell's persistent storage
pub const THEME_STORAGE_KEY: &str = "theme";

/// UI theme, also persisted device-side via `POST /api/theme`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a value read back from the storage cache.
    /// Unknown values are discarded rather than treated as an error.
    pub fn from_cache(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Where the currently applied theme came from.
///
/// The storage cache only applies while the theme is still at its default;
/// a device-reported or user-chosen theme wins regardless of arrival order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ThemeOrigin {
    #[default]
    Default,
    Cached,
    Device,
    User,
}

/// Request body for `POST /api/theme`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeRequest {
    pub theme: Theme,
}

/// Request body for `POST /api/backlight`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BacklightRequest {
    pub brightness: u8,
}

/// Coalescing state for backlight requests.
///
/// A slider drag fires one event per intermediate value. At most one request
/// is in flight; the latest value seen during flight is kept in `pending` and
/// sent once the outstanding request resolves (trailing edge). Intermediate
/// values are dropped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BacklightSync {
    pub in_flight: Option<u8>,
    pub pending: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
    }

    #[test]
    fn from_cache_discards_unknown_values() {
        assert_eq!(Theme::from_cache("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_cache("light"), Some(Theme::Light));
        assert_eq!(Theme::from_cache("solarized"), None);
        assert_eq!(Theme::from_cache(""), None);
    }
}
