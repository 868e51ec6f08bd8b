use log::{info, trace};

use crate::{schema, schema::Search, Error};

use super::Client;

const SEARCH_URL: &str = "https://openlibrary.org/search.json?q=";

pub(crate) fn search_book<C: Client>(query: &str) -> Result<Search, Error> {
    info!("Searching OpenLibrary for '{query}'");
    let url = format!("{SEARCH_URL}{query}");

    let client = C::default();
    let search = schema::decode(client.get_json(&url)?)?;

    trace!("Request was successful");
    Ok(search)
}
