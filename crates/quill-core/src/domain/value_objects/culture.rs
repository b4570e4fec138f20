//! Culture value object.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// A culture (locale) identifier such as `"en-US"` or `"da-DK"`.
///
/// Comparison is case-insensitive, matching how cultures are matched when
/// resolving variant names and translations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Culture(String);

impl Culture {
    /// Creates a culture from an identifier.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the culture identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the bare language part (`"da"` for `"da-DK"`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl PartialEq for Culture {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Culture {}

impl Hash for Culture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl PartialOrd for Culture {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Culture {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .to_ascii_lowercase()
            .cmp(&other.0.to_ascii_lowercase())
    }
}

impl From<&str> for Culture {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_eq() {
        assert_eq!(Culture::new("da-DK"), Culture::new("da-dk"));
        assert_ne!(Culture::new("da-DK"), Culture::new("en-US"));
    }

    #[test]
    fn test_language_part() {
        assert_eq!(Culture::new("da-DK").language(), "da");
        assert_eq!(Culture::new("en").language(), "en");
    }

    #[test]
    fn test_display_preserves_casing() {
        assert_eq!(Culture::new("en-US").to_string(), "en-US");
    }
}
