use log::info;

use crate::{
    schema::{self, Book, IsbnResult},
    Error, ErrorKind,
};

use super::{book, Client};

const ISBN_URL: &str = "https://openlibrary.org/isbn/";

pub(crate) fn get_book_by_isbn<C: Client>(isbn: &str) -> Result<Book, Error> {
    // remove hyphens from ISBN-13 (if applicable)
    let isbn = isbn.replace('-', "");
    info!("Looking up ISBN '{isbn}'");
    let url = format!("{ISBN_URL}{isbn}.json");

    let result: IsbnResult = schema::decode(C::default().get_json(&url)?)?;
    let work = result.works.into_iter().next().ok_or_else(|| {
        Error::new(ErrorKind::NoValue, format!("no works found for ISBN '{isbn}'"))
    })?;

    book::get_book::<C>(&schema::normalize_key(&work.key))
}
