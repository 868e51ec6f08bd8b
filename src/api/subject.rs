use log::info;

use crate::{schema, schema::SubjectResult, Error};

use super::Client;

const SUBJECTS_URL: &str = "https://openlibrary.org/subjects/";

pub(crate) fn get_subject<C: Client>(name: &str) -> Result<SubjectResult, Error> {
    info!("Fetching subject listing '{name}'");
    let url = format!("{SUBJECTS_URL}{name}.json");

    schema::decode(C::default().get_json(&url)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::api::{assert_url, impl_json_responder, MockClient};

    const SUBJECT_JSON: &str = include_str!("../../tests/data/subject.json");

    impl_json_responder! {
        ValidJsonResponder => |_url| Ok(SUBJECT_JSON.to_owned()),
    }

    #[test]
    fn subject_url_format_is_correct() {
        assert!(super::get_subject::<MockClient<ValidJsonResponder>>("juvenile_fiction").is_ok());
        assert_url!("https://openlibrary.org/subjects/juvenile_fiction.json");
    }

    #[test]
    fn valid_json_produces_a_subject_listing() {
        let subject = super::get_subject::<MockClient<ValidJsonResponder>>("juvenile_fiction")
            .expect("ValidJsonResponder always produces a valid json String to be deserialized");

        assert_eq!("juvenile fiction", subject.name);
        assert_eq!(2, subject.works.len());
    }
}
