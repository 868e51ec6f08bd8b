use log::info;

use crate::{schema, schema::Author, Error};

use super::Client;

const AUTHORS_URL: &str = "https://openlibrary.org/authors/";

pub(crate) fn get_author<C: Client>(key: &str) -> Result<Author, Error> {
    info!("Fetching author record '{key}'");
    let url = format!("{AUTHORS_URL}{key}.json");

    schema::decode(C::default().get_json(&url)?)
}
