use std::collections::HashMap;

use serde::Deserialize;

use super::{key, text_or_string, KeyRef};

/// A book record: a work, one of its editions, or a redirect to either.
///
/// Work and edition records share this shape; fields that only make
/// sense on one of them are optional on the other. Redirect records
/// carry the key of the canonical record in [`location`] and little
/// else.
///
/// [`location`]: Self::location
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Book {
    /// External platform identifiers, platform name to id list.
    ///
    /// E.g. `{ "goodreads": ["1507552"], "librarything": ["6446"] }`.
    pub identifiers: Option<HashMap<String, Vec<String>>>,
    /// Title of the book.
    pub title: Option<String>,
    /// Normalized record key.
    #[serde(deserialize_with = "key")]
    pub key: String,
    /// Author credits; absent on most redirect records.
    pub authors: Option<Vec<BookAuthor>>,
    /// The record's type tag.
    #[serde(rename = "type")]
    pub kind: BookType,
    /// Prose description, flattened to a plain string whichever shape
    /// the server chose to send it in.
    #[serde(default, deserialize_with = "text_or_string")]
    pub description: Option<String>,
    /// Cover image ids.
    #[serde(default)]
    pub covers: Vec<i64>,
    /// Places this book is about.
    #[serde(default)]
    pub subject_places: Vec<String>,
    /// Subject headings.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// People this book is about.
    #[serde(default)]
    pub subject_people: Vec<String>,
    /// Time periods this book is about.
    #[serde(default)]
    pub subject_times: Vec<String>,
    /// Key of the canonical record when [`kind`] marks a redirect.
    ///
    /// [`kind`]: Self::kind
    pub location: Option<String>,
    /// Contributors beyond the credited authors.
    pub contributions: Option<Vec<String>>,
    /// Colon-separated source identifiers, e.g.
    /// `ia:fantasticmrfox00dahl_834` for
    /// `archive.org/details/fantasticmrfox00dahl_834`.
    #[serde(default)]
    pub source_records: Vec<String>,
    /// Library-local record ids.
    #[serde(default)]
    pub local_id: Vec<String>,
    /// Opening sentence; served in the same two shapes as
    /// [`description`](Self::description).
    #[serde(default, deserialize_with = "text_or_string")]
    pub first_sentence: Option<String>,
    /// Page count of an edition.
    pub number_of_pages: Option<u32>,
    /// Works an edition belongs to, keys normalized.
    pub works: Option<Vec<WorkRef>>,
    /// Internet Archive id of an edition's scan.
    pub ocaid: Option<String>,
    /// ISBN-10s of an edition.
    pub isbn_10: Option<Vec<String>>,
    /// ISBN-13s of an edition.
    pub isbn_13: Option<Vec<String>>,
    /// Newest revision number of the record.
    pub latest_revision: u32,
    /// Revision this response was rendered from.
    pub revision: u32,
    /// When the record was created.
    pub created: Timestamp,
    /// When the record was last edited.
    pub last_modified: Timestamp,
}

/// The type tag carried by every book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookType {
    /// One of the three accepted record kinds.
    pub key: BookKind,
}

/// The closed set of record kinds a book lookup may return.
///
/// Any other `type.key` value fails validation rather than passing
/// through as a fourth kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BookKind {
    /// An abstract work, the umbrella over its editions.
    #[serde(rename = "/type/work")]
    Work,
    /// A pointer to the canonical record, named by [`Book::location`].
    #[serde(rename = "/type/redirect")]
    Redirect,
    /// A concrete published edition of a work.
    #[serde(rename = "/type/edition")]
    Edition,
}

/// An author credit on a book.
///
/// The endpoint serves two shapes: the full `{author, type}` object, or
/// a bare `{key}` reference. The bare shape decodes as if the full one
/// had been sent with the ordinary author role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BookAuthorShape")]
pub struct BookAuthor {
    /// Reference to the author record.
    pub author: KeyRef,
    /// The author's role on this book, e.g. `/type/author_role`.
    pub role: KeyRef,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BookAuthorShape {
    Full {
        author: KeyRef,
        #[serde(rename = "type")]
        role: KeyRef,
    },
    Bare(KeyRef),
}

impl From<BookAuthorShape> for BookAuthor {
    fn from(shape: BookAuthorShape) -> Self {
        match shape {
            BookAuthorShape::Full { author, role } => Self { author, role },
            BookAuthorShape::Bare(author) => Self {
                author,
                role: KeyRef {
                    key: "/type/author_role".to_owned(),
                },
            },
        }
    }
}

/// A `{key}` reference to a work, with the key normalized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkRef {
    /// Normalized work key.
    #[serde(deserialize_with = "key")]
    pub key: String,
}

/// A record timestamp, tagged with the `/type/datetime` literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timestamp {
    /// The tag; only `/type/datetime` is accepted.
    #[serde(rename = "type")]
    pub tag: DatetimeTag,
    /// The instant as an ISO 8601 string.
    pub value: String,
}

/// The `/type/datetime` literal on a [`Timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DatetimeTag {
    /// The only accepted tag value.
    #[serde(rename = "/type/datetime")]
    Datetime,
}
