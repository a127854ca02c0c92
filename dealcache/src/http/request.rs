// standard library
use std::fmt;

// internal crates
use crate::http::query::QueryParams;

// external crates
use tokio::time::Duration;

/// A GET against the upstream API. Every upstream call is a GET so the method is
/// implied.
#[derive(Clone, Debug)]
pub struct Params<'a> {
    pub url: &'a str,
    pub query: QueryParams,
    pub timeout: Duration,
}

impl<'a> Params<'a> {
    pub fn get(url: &'a str, timeout: Duration) -> Self {
        Self {
            url,
            query: QueryParams::new(),
            timeout,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        let mut url = self.url.to_string();
        for (i, (key, value)) in self.query.pairs().iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        Endpoint {
            url,
            timeout: self.timeout,
        }
    }
}

/// Owned description of a request, carried by errors and log lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub timeout: Duration,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {} (timeout {}ms)", self.url, self.timeout.as_millis())
    }
}
