//! URL-safe shoe identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input starts or ends with a hyphen, or contains `--`.
    #[error("slug has a misplaced hyphen")]
    MisplacedHyphen,
}

/// A shoe slug, used to build the `/shoe/{slug}` navigation target.
///
/// ## Constraints
///
/// - Length: 1-128 characters
/// - Only ASCII lowercase letters, digits and `-`
/// - No leading, trailing or doubled `-`
///
/// Deserialization validates, so a catalog file with a bad slug fails to load.
///
/// ## Examples
///
/// ```
/// use sole_core::Slug;
///
/// assert!(Slug::parse("tail-twister").is_ok());
/// assert!(Slug::parse("").is_err());
/// assert!(Slug::parse("Tail Twister").is_err());
/// assert!(Slug::parse("-leading").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains characters
    /// outside `[a-z0-9-]`, or has a leading, trailing or doubled hyphen.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(c));
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::MisplacedHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Navigation target for the shoe's detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slugs() {
        assert!(Slug::parse("tail-twister").is_ok());
        assert!(Slug::parse("hi-tops").is_ok());
        assert!(Slug::parse("react-infinity-3").is_ok());
        assert!(Slug::parse("a").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(129);
        assert!(matches!(Slug::parse(&long), Err(SlugError::TooLong { .. })));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert_eq!(
            Slug::parse("Tail-Twister"),
            Err(SlugError::InvalidCharacter('T'))
        );
        assert_eq!(
            Slug::parse("tail twister"),
            Err(SlugError::InvalidCharacter(' '))
        );
        assert_eq!(
            Slug::parse("shoe/../admin"),
            Err(SlugError::InvalidCharacter('/'))
        );
    }

    #[test]
    fn test_parse_misplaced_hyphen() {
        assert_eq!(Slug::parse("-tail"), Err(SlugError::MisplacedHyphen));
        assert_eq!(Slug::parse("tail-"), Err(SlugError::MisplacedHyphen));
        assert_eq!(Slug::parse("tail--twister"), Err(SlugError::MisplacedHyphen));
    }

    #[test]
    fn test_href() {
        let slug = Slug::parse("tail-twister").unwrap();
        assert_eq!(slug.href(), "/shoe/tail-twister");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Slug = serde_json::from_str("\"hi-tops\"").unwrap();
        assert_eq!(ok.as_str(), "hi-tops");

        assert!(serde_json::from_str::<Slug>("\"Hi Tops\"").is_err());
    }

    #[test]
    fn test_serialize_as_string() {
        let slug = Slug::parse("hi-tops").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"hi-tops\"");
    }
}
