use serde::Deserialize;

use super::{key, KeyRef};

/// An author record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    /// Normalized record key.
    #[serde(deserialize_with = "key")]
    pub key: String,
    /// Display name.
    pub name: String,
    /// The author's own name, where it differs from the display name.
    pub personal_name: Option<String>,
    /// Identifiers in external authority databases.
    pub remote_ids: Option<RemoteIds>,
    /// Colon-separated source identifiers.
    #[serde(default)]
    pub source_records: Vec<String>,
    /// Other names the author has published under.
    #[serde(default)]
    pub alternate_names: Vec<String>,
    /// Curated external links.
    #[serde(default)]
    pub links: Vec<Link>,
    /// Photo image ids.
    #[serde(default)]
    pub photos: Vec<i64>,
    /// Birth date as free-form text, e.g. `13 September 1916`.
    pub birth_date: Option<String>,
    /// The record's type tag.
    #[serde(rename = "type")]
    pub kind: KeyRef,
    /// Newest revision number of the record.
    pub latest_revision: Option<u32>,
    /// Revision this response was rendered from.
    pub revision: u32,
    /// When the record was created.
    pub created: Option<AuthorTimestamp>,
    /// When the record was last edited.
    pub last_modified: AuthorTimestamp,
}

/// Identifiers for an author in external authority databases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteIds {
    /// International Standard Name Identifier.
    pub isni: Option<String>,
    /// Virtual International Authority File id.
    pub viaf: Option<String>,
    /// Wikidata item id.
    pub wikidata: Option<String>,
}

/// A curated external link on an author record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Link target.
    pub url: String,
    /// Human-readable label.
    pub title: String,
    /// The link's type tag.
    #[serde(rename = "type")]
    pub kind: KeyRef,
}

/// A `{type, value}` timestamp pair on an author record.
///
/// Unlike a book's [`Timestamp`](super::Timestamp) the tag here is
/// free-form, matching what the endpoint actually serves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorTimestamp {
    /// Tag of the pair, usually `/type/datetime`.
    #[serde(rename = "type")]
    pub tag: String,
    /// The instant as an ISO 8601 string.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::Author;
    use crate::schema::decode;

    const AUTHOR_JSON: &str = include_str!("../../tests/data/author.json");

    #[test]
    fn author_record_can_be_decoded_from_json() {
        let author: Author = decode(serde_json::from_str(AUTHOR_JSON).unwrap()).unwrap();

        assert_eq!("OL34184A", author.key);
        assert_eq!("Roald Dahl", author.name);
        assert_eq!(Some("Roald Dahl".to_owned()), author.personal_name);
        assert_eq!("/type/author", author.kind.key);
        assert_eq!("13 September 1916", author.birth_date.unwrap());

        let remote_ids = author.remote_ids.unwrap();
        assert_eq!(Some("Q25161".to_owned()), remote_ids.wikidata);

        let link = &author.links[0];
        assert_eq!("http://www.roalddahl.com/", link.url);
        assert_eq!("/type/link", link.kind.key);
    }

    #[test]
    fn sparse_author_record_falls_back_to_defaults() {
        let author: Author = decode(json!({
            "key": "/authors/OL1A",
            "name": "Unknown Author",
            "type": {"key": "/type/author"},
            "revision": 1,
            "last_modified": {"type": "/type/datetime", "value": "2008-04-01T03:28:50.625462"}
        }))
        .unwrap();

        assert_eq!("OL1A", author.key);
        assert_eq!(None, author.personal_name);
        assert_eq!(None, author.remote_ids);
        assert_eq!(None, author.latest_revision);
        assert_eq!(None, author.created);
        assert!(author.source_records.is_empty());
        assert!(author.alternate_names.is_empty());
        assert!(author.links.is_empty());
        assert!(author.photos.is_empty());
    }

    #[test]
    fn author_timestamp_tag_is_free_form() {
        let author: Author = decode(json!({
            "key": "/authors/OL1A",
            "name": "Unknown Author",
            "type": {"key": "/type/author"},
            "revision": 1,
            "last_modified": {"type": "datetime", "value": "2008-04-01T03:28:50.625462"}
        }))
        .unwrap();

        assert_eq!("datetime", author.last_modified.tag);
    }
}
