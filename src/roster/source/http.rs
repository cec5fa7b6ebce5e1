use super::{parse_records, DataSource};
use crate::error::{RosterError, Result};
use crate::model::StudentRecord;

/// Fetches the roster document from a URL with a blocking client.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DataSource for HttpSource {
    fn fetch_all(&self) -> Result<Vec<StudentRecord>> {
        let response =
            reqwest::blocking::get(&self.url).map_err(|e| RosterError::fetch(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::fetch(
                &self.url,
                format!("HTTP error! Status: {}", status.as_u16()),
            ));
        }

        let body = response
            .text()
            .map_err(|e| RosterError::fetch(&self.url, e))?;
        parse_records(&body)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answers one request on a local port with a canned response and returns its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/students.json", addr)
    }

    #[test]
    fn non_success_status_is_a_fetch_error() {
        let url = serve_once("404 Not Found", "");
        let err = HttpSource::new(&url).fetch_all().unwrap_err();
        match err {
            RosterError::Fetch { location, reason } => {
                assert_eq!(location, url);
                assert!(reason.contains("Status: 404"), "{reason}");
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[test]
    fn fetches_records_over_http() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"first_name":"Amy","last_name":"Ng","gender":"Female","class":5,"marks":90,"passing":true,"email":"a@x.com"}]"#,
        );
        let records = HttpSource::new(&url).fetch_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name(), "Amy Ng");
    }

    #[test]
    fn unreachable_host_is_a_fetch_error() {
        // Nothing listens on the local discard port.
        let err = HttpSource::new("http://127.0.0.1:9/students.json")
            .fetch_all()
            .unwrap_err();
        assert!(matches!(err, RosterError::Fetch { .. }));
    }
}
