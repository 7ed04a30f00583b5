//! Endpoint paths under `/api/{version}`.

use crate::config::Config;
use std::fmt;

/// Path below the API base, built one segment at a time.
///
/// Addresses are rendered in their checksummed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    /// Endpoint for a top-level resource such as `payments`
    pub fn new(resource: &str) -> Self {
        Self {
            segments: vec![resource.to_string()],
        }
    }

    /// Append a path segment
    pub fn segment(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append `segment` when present
    pub fn optional_segment<T: fmt::Display>(self, segment: Option<T>) -> Self {
        match segment {
            Some(segment) => self.segment(segment),
            None => self,
        }
    }

    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Full URL for this endpoint against `config`
    pub fn url(&self, config: &Config) -> String {
        format!("{}/{}", config.api_base(), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
