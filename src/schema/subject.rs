use serde::Deserialize;

use super::key;

/// A subject listing: the heading itself plus the works filed under it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectResult {
    /// Normalized subject key.
    #[serde(deserialize_with = "key")]
    pub key: String,
    /// Subject heading.
    pub name: String,
    /// Kind of heading, e.g. `subject`, `place`, `person` or `time`.
    pub subject_type: String,
    /// Number of works filed under the heading.
    pub work_count: u32,
    /// The works on this page of the listing.
    pub works: Vec<SubjectWork>,
}

/// A work as it appears in a subject listing, with lending metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectWork {
    /// Work key.
    pub key: String,
    /// Title of the work.
    pub title: String,
    /// Number of editions grouped under the work.
    pub edition_count: u32,
    /// Cover image id.
    pub cover_id: i64,
    /// Key of the edition the cover belongs to.
    pub cover_edition_key: Option<String>,
    /// Subject headings of the work.
    pub subject: Vec<String>,
    /// Internet Archive collections holding a scan.
    pub ia_collection: Vec<String>,
    /// Whether the work is in the lending library program.
    pub lendinglibrary: bool,
    /// Whether a print-disabled scan exists.
    pub printdisabled: bool,
    /// Key of the lendable edition.
    pub lending_edition: String,
    /// Internet Archive id of the lendable scan.
    pub lending_identifier: String,
    /// Credited authors.
    pub authors: Vec<SubjectAuthor>,
    /// Year of the earliest known edition.
    pub first_publish_year: i32,
    /// Internet Archive id of the primary scan.
    pub ia: String,
    /// Whether a public scan exists.
    pub public_scan: bool,
    /// Whether a full text scan is available.
    pub has_fulltext: bool,
    /// Live lending availability, when the endpoint includes it.
    pub availability: Option<Availability>,
}

/// An author as listed on a [`SubjectWork`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubjectAuthor {
    /// Author key.
    pub key: String,
    /// Display name.
    pub name: String,
}

/// Live lending availability of a work.
///
/// Every nullable field reads as "unknown or not applicable" when null;
/// a null never fails the decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Availability {
    /// Overall lending status, e.g. `borrow_available`.
    pub status: String,
    /// Whether the scan can be browsed in place.
    pub available_to_browse: Option<bool>,
    /// Whether the scan can be borrowed.
    pub available_to_borrow: Option<bool>,
    /// Whether a waitlist can be joined.
    pub available_to_waitlist: Option<bool>,
    /// Whether the scan is restricted to print-disabled readers.
    pub is_printdisabled: Option<bool>,
    /// Whether the scan can be read online.
    pub is_readable: Option<bool>,
    /// Whether the scan is lendable at all.
    pub is_lendable: Option<bool>,
    /// Whether a preview is available.
    pub is_previewable: bool,
    /// Internet Archive id the availability applies to.
    pub identifier: String,
    /// ISBN of the lendable edition.
    pub isbn: Option<String>,
    /// OCLC number of the lendable edition.
    pub oclc: Option<String>,
    /// OpenLibrary work key.
    pub openlibrary_work: Option<String>,
    /// OpenLibrary edition key.
    pub openlibrary_edition: Option<String>,
    /// When the work was last loaned out.
    pub last_loan_date: Option<String>,
    /// Length of the waitlist, served as a string.
    pub num_waitlist: Option<String>,
    /// When the waitlist last changed.
    pub last_waitlist_date: Option<String>,
    /// Whether access is restricted.
    pub is_restricted: bool,
    /// Whether the scan can be browsed.
    pub is_browseable: Option<bool>,
    /// Upstream source of the availability data.
    #[serde(rename = "__src__")]
    pub src: String,
}
