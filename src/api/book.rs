use log::{info, trace};

use crate::{
    schema::{self, Book, BookKind},
    Error, ErrorKind,
};

use super::Client;

const BOOKS_URL: &str = "https://openlibrary.org/books/";

/// Redirect chains longer than this fail with [`ErrorKind::RedirectLimit`].
const MAX_REDIRECT_HOPS: usize = 5;

pub(crate) fn get_book<C: Client>(key: &str) -> Result<Book, Error> {
    info!("Fetching book record '{key}'");
    let client = C::default();
    let mut key = key.to_owned();

    for _ in 0..=MAX_REDIRECT_HOPS {
        let url = format!("{BOOKS_URL}{key}.json");
        let book: Book = schema::decode(client.get_json(&url)?)?;

        if book.kind.key != BookKind::Redirect {
            return Ok(book);
        }

        let location = book.location.ok_or_else(|| {
            Error::new(
                ErrorKind::Validation,
                format!("location: redirect record '{}' has no target", book.key),
            )
        })?;
        trace!("'{key}' redirects to '{location}'");
        key = schema::normalize_key(&location);
    }

    Err(Error::new(
        ErrorKind::RedirectLimit,
        format!("record still redirecting after {MAX_REDIRECT_HOPS} hops"),
    ))
}
