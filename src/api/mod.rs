use serde_json::Value;

pub(crate) mod author;
pub(crate) mod book;
pub(crate) mod isbn;
pub(crate) mod search;
pub(crate) mod subject;

pub trait Client
where
    Self: Default,
{
    fn get_json(&self, url: &str) -> Result<Value, Error>;
}

impl Client for reqwest::blocking::Client {
    fn get_json(&self, url: &str) -> Result<Value, Error> {
        let resp = self
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::Http, e))?;

        // A body that is not JSON at all is a transport-level failure;
        // shape mismatches are caught later by the schema layer.
        resp.json().map_err(|e| Error::wrap(ErrorKind::Http, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_json_responder, request_count, MockClient, NetworkErrorResponder, Responder,
    REQUEST_LOG,
};

use crate::{Error, ErrorKind};
