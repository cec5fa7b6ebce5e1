//! # Data Sources
//!
//! The roster is read once, at startup, from a static JSON resource: an array
//! of student objects. [`DataSource`] abstracts where that resource lives so
//! the controller can be driven by a file, a URL or canned records in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: a JSON file on disk
//! - [`http::HttpSource`]: a JSON document served over HTTP(S); non-2xx
//!   responses are fetch failures
//! - [`memory::InMemorySource`]: fixed records, used by tests
//!
//! Failures are reported as [`RosterError::Fetch`] (unreachable resource) or
//! [`RosterError::Parse`] (malformed content). Nothing is retried.

use crate::error::{RosterError, Result};
use crate::model::StudentRecord;

pub mod fs;
pub mod http;
pub mod memory;

/// Loads the full ordered roster.
pub trait DataSource {
    fn fetch_all(&self) -> Result<Vec<StudentRecord>>;

    /// Where the data comes from, for messages and logs.
    fn location(&self) -> String;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn fetch_all(&self) -> Result<Vec<StudentRecord>> {
        (**self).fetch_all()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Picks a source from a user-supplied location: URLs go over HTTP, anything
/// else is treated as a file path.
pub fn open(location: &str) -> Box<dyn DataSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(http::HttpSource::new(location))
    } else {
        Box::new(fs::FileSource::new(location))
    }
}

/// Parses a JSON roster document.
pub fn parse_records(content: &str) -> Result<Vec<StudentRecord>> {
    serde_json::from_str(content).map_err(RosterError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_routes_urls_to_http() {
        assert_eq!(
            open("https://example.com/students.json").location(),
            "https://example.com/students.json"
        );
        assert_eq!(open("students.json").location(), "students.json");
    }

    #[test]
    fn parse_records_rejects_non_array() {
        let err = parse_records(r#"{"students": []}"#).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn parse_records_keeps_document_order() {
        let json = r#"[
            {"id":2,"first_name":"B","last_name":"B","gender":"male","class":1,"marks":1,"passing":false,"email":"b"},
            {"id":1,"first_name":"A","last_name":"A","gender":"female","class":1,"marks":2,"passing":true,"email":"a"}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }
}
