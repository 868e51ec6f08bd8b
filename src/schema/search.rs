use serde::Deserialize;

use super::key;

/// One page of results from the free-text search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Search {
    /// Offset of the first returned document.
    pub start: u64,
    /// Total number of matches across all pages.
    pub num_found: u64,
    /// The documents on this page; empty when the response carries none.
    #[serde(default)]
    pub docs: Vec<Doc>,
}

/// A single search hit.
///
/// Search documents are denormalized summaries, so most of the list
/// fields here may be served empty or not at all; an absent list decodes
/// as an empty one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Doc {
    /// Title of the work.
    pub title: String,
    /// Cover image id, when the work has one.
    pub cover_i: Option<i64>,
    /// Whether a full text scan is available.
    pub has_fulltext: bool,
    /// Number of editions grouped under this work.
    pub edition_count: u32,
    /// Author display names.
    #[serde(default)]
    pub author_name: Vec<String>,
    /// Year of the earliest known edition.
    pub first_publish_year: Option<i32>,
    /// Normalized work key.
    #[serde(deserialize_with = "key")]
    pub key: String,
    /// Internet Archive scan identifiers.
    #[serde(default)]
    pub ia: Vec<String>,
    /// Author keys, parallel to `author_name`.
    #[serde(default)]
    pub author_key: Vec<String>,
    /// Whether a public scan exists.
    pub public_scan_b: bool,
    /// ISBNs of the grouped editions.
    #[serde(default)]
    pub isbn: Vec<String>,
    /// Languages of the grouped editions.
    #[serde(default)]
    pub language: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::Search;
    use crate::schema::decode;

    const SEARCH_JSON: &str = include_str!("../../tests/data/search.json");

    #[test]
    fn search_page_can_be_decoded_from_json() {
        let search: Search = decode(serde_json::from_str(SEARCH_JSON).unwrap()).unwrap();

        assert_eq!(0, search.start);
        assert_eq!(2, search.num_found);
        assert_eq!(2, search.docs.len());

        let doc = &search.docs[0];
        assert_eq!("Fantastic Mr. Fox", doc.title);
        assert_eq!(Some(1970), doc.first_publish_year);
        assert_eq!(vec!["Roald Dahl".to_owned()], doc.author_name);
    }

    #[test]
    fn doc_keys_are_normalized() {
        let search: Search = decode(serde_json::from_str(SEARCH_JSON).unwrap()).unwrap();

        assert_eq!("OL45804W", search.docs[0].key);
        assert_eq!("OL45883W", search.docs[1].key);
    }

    #[test]
    fn absent_docs_decode_as_an_empty_page() {
        let search: Search = decode(json!({"start": 0, "num_found": 0})).unwrap();

        assert_eq!(Vec::<crate::schema::Doc>::new(), search.docs);
    }

    #[test]
    fn absent_doc_lists_decode_as_empty() {
        // The second fixture doc omits every optional list.
        let search: Search = decode(serde_json::from_str(SEARCH_JSON).unwrap()).unwrap();
        let doc = &search.docs[1];

        assert!(doc.author_name.is_empty());
        assert!(doc.ia.is_empty());
        assert!(doc.author_key.is_empty());
        assert!(doc.isbn.is_empty());
        assert!(doc.language.is_empty());
        assert_eq!(None, doc.cover_i);
        assert_eq!(None, doc.first_publish_year);
    }
}
