#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod error;
pub mod schema;

pub use error::{Error, ErrorKind};

use log::trace;
use schema::{Author, Book, Search, SubjectResult};

type Client = reqwest::blocking::Client;

/// Search OpenLibrary for books matching the free-text `query`.
///
/// The result is one page of hits along with the total match count; see
/// [`Search`]. A query matching nothing is not an error, it returns a
/// [`Search`] with an empty `docs` list.
///
/// # Errors
///
/// An `Err` is returned when the request fails or when the response body
/// does not match the [`Search`] contract.
#[inline]
pub fn search_book(query: &str) -> Result<Search, Error> {
    trace!("Search books matching '{query}'");
    api::search::search_book::<Client>(query)
}

/// Fetch the book record identified by `key`.
///
/// `key` is the final segment of an OpenLibrary identifier path, e.g.
/// `OL45804W` for the work `/works/OL45804W`. When the fetched record is
/// a redirect its target is fetched instead, repeatedly if needed, so
/// the returned [`Book`] is never a redirect record. A chain of more
/// than a handful of redirects fails with
/// [`ErrorKind::RedirectLimit`].
///
/// # Errors
///
/// An `Err` is returned when a request fails, when a response body does
/// not match the [`Book`] contract, or when the redirect cap is hit.
#[inline]
pub fn get_book(key: &str) -> Result<Book, Error> {
    trace!("Get book with key '{key}'");
    api::book::get_book::<Client>(key)
}

/// Fetch the book record for an ISBN.
///
/// Hyphens in `isbn` are ignored. The ISBN is first resolved to a work
/// key, then the lookup delegates to [`get_book`].
///
/// # Errors
///
/// An `Err` is returned when a request fails, when a response body does
/// not match its contract, or with [`ErrorKind::NoValue`] when
/// OpenLibrary knows no work for the ISBN.
#[inline]
pub fn get_book_by_isbn(isbn: &str) -> Result<Book, Error> {
    trace!("Get book with ISBN '{isbn}'");
    api::isbn::get_book_by_isbn::<Client>(isbn)
}

/// Fetch the author record identified by `key`, e.g. `OL34184A`.
///
/// # Errors
///
/// An `Err` is returned when the request fails or when the response body
/// does not match the [`Author`] contract.
#[inline]
pub fn get_author(key: &str) -> Result<Author, Error> {
    trace!("Get author with key '{key}'");
    api::author::get_author::<Client>(key)
}

/// Fetch a subject listing by its name, e.g. `juvenile_fiction`.
///
/// # Errors
///
/// An `Err` is returned when the request fails or when the response body
/// does not match the [`SubjectResult`] contract.
#[inline]
pub fn get_subject(name: &str) -> Result<SubjectResult, Error> {
    trace!("Get subject named '{name}'");
    api::subject::get_subject::<Client>(name)
}
