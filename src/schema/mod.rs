//! Typed models of OpenLibrary's JSON responses.
//!
//! One module per entity; this module holds the decode entry point and
//! the shape normalizers the entities share. Every contract ignores
//! fields it does not know about, so decoding keeps working as
//! OpenLibrary adds to its schema, while a missing required field or a
//! type mismatch fails the whole decode.

mod author;
mod book;
mod isbn;
mod search;
mod subject;

pub use author::{Author, AuthorTimestamp, Link, RemoteIds};
pub use book::{Book, BookAuthor, BookKind, BookType, DatetimeTag, Timestamp, WorkRef};
pub use isbn::IsbnResult;
pub use search::{Doc, Search};
pub use subject::{Availability, SubjectAuthor, SubjectResult, SubjectWork};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{Error, ErrorKind};

/// Decodes a raw JSON payload into one of the entity types.
///
/// The first field that violates the entity's contract fails the decode
/// with an [`ErrorKind::Validation`] error naming the field's path and
/// what was expected of it.
pub(crate) fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, Error> {
    serde_path_to_error::deserialize(payload)
        .map_err(|e| Error::new(ErrorKind::Validation, e.to_string()))
}

/// Reduces an OpenLibrary identifier path to its final segment.
///
/// Identifiers appear both bare and as full paths; the bare form is
/// returned unchanged.
///
/// ```
/// assert_eq!("OL1M", openlib::schema::normalize_key("/books/OL1M"));
/// assert_eq!("OL1M", openlib::schema::normalize_key("OL1M"));
/// ```
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    match raw.rfind('/') {
        Some(split) => raw[split + 1..].to_owned(),
        None => raw.to_owned(),
    }
}

/// `deserialize_with` adapter for fields declared as normalized keys.
pub(crate) fn key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|raw| normalize_key(&raw))
}

/// The two shapes OpenLibrary uses for prose fields such as a book's
/// description: a bare string, or a `{type, value}` object tagged with
/// `/type/text`. Anything else fails to match either variant.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrString {
    Plain(String),
    Tagged {
        #[serde(rename = "type")]
        _tag: TextTag,
        value: String,
    },
}

#[derive(Deserialize)]
enum TextTag {
    #[serde(rename = "/type/text")]
    Text,
}

impl TextOrString {
    fn into_string(self) -> String {
        match self {
            Self::Plain(text) => text,
            Self::Tagged { value, .. } => value,
        }
    }
}

/// `deserialize_with` adapter flattening an optional [`TextOrString`]
/// field to a plain string.
pub(crate) fn text_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrString>::deserialize(deserializer)
        .map(|text| text.map(TextOrString::into_string))
}

/// A bare `{key}` reference to another OpenLibrary record.
///
/// The key is kept exactly as the server sent it, which may be a full
/// path; use [`normalize_key`] where the bare identifier is needed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyRef {
    /// Key of the referenced record.
    pub key: String,
}
