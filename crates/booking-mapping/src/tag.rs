//! Schema tags
//!
//! Tags are free-form identifiers agreed on by callers and transcoders.
//! Comparison is case-insensitive and otherwise exact.

use std::borrow::Cow;
use std::fmt;

/// Identifier naming a schema/record type for dispatch
#[derive(Debug, Clone)]
pub struct SchemaTag(Cow<'static, str>);

impl SchemaTag {
    /// Tag of the internal booking model reservation
    pub const INTERNAL_RESERVATION: SchemaTag = SchemaTag::from_static("Model.Reservation");

    /// Tag of the partner schema reservation
    pub const PARTNER_RESERVATION: SchemaTag = SchemaTag::from_static("Google.Reservation");

    /// Create a tag from a static string
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Create a tag from owned text
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// The tag text as given at construction
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive exact comparison against caller supplied text
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_uppercase)
        .eq(right.chars().flat_map(char::to_uppercase))
}

impl PartialEq for SchemaTag {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.as_str())
    }
}

impl Eq for SchemaTag {}

impl PartialEq<str> for SchemaTag {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for SchemaTag {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for SchemaTag {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for SchemaTag {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

/// The source and target tag a transcoder is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    pub source: SchemaTag,
    pub target: SchemaTag,
}

impl TagPair {
    /// Create a pair
    pub fn new(source: impl Into<SchemaTag>, target: impl Into<SchemaTag>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// True iff both tags match case-insensitively
    pub fn matches(&self, source_tag: &str, target_tag: &str) -> bool {
        self.source.matches(source_tag) && self.target.matches(target_tag)
    }
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.source, self.target)
    }
}
