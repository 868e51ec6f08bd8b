use serde::Deserialize;

use super::KeyRef;

/// The slice of an ISBN lookup response this crate consumes: the work
/// references of the matched edition.
///
/// The keys are kept raw here; the ISBN operation normalizes the one it
/// follows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IsbnResult {
    /// Works the matched edition belongs to; empty when the response
    /// carries none.
    #[serde(default)]
    pub works: Vec<KeyRef>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::IsbnResult;
    use crate::schema::{decode, KeyRef};

    #[test]
    fn work_references_are_kept_raw() {
        let result: IsbnResult =
            decode(json!({"works": [{"key": "/works/OL45804W"}]})).unwrap();

        assert_eq!(
            vec![KeyRef {
                key: "/works/OL45804W".to_owned()
            }],
            result.works
        );
    }

    #[test]
    fn absent_works_decode_as_empty() {
        let result: IsbnResult = decode(json!({})).unwrap();

        assert_eq!(Vec::<KeyRef>::new(), result.works);
    }
}
