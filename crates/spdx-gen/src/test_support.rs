//! In-memory and loopback registries for unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::anyhow;
use serde_json::json;

use crate::fetch::{Document, Transport};

/// Serves canned documents and records every requested name.
#[derive(Debug, Default)]
pub struct FakeTransport {
    docs: BTreeMap<String, Document>,
    requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file_name: &str, body: String, last_modified: Option<&str>) -> Self {
        self.docs.insert(
            file_name.to_string(),
            Document {
                body,
                last_modified: last_modified.map(str::to_string),
            },
        );
        self
    }

    /// Registry serving `licenses.json` and `exceptions.json` without timestamps.
    pub fn registry(licenses: &[&str], exceptions: &[&str]) -> Self {
        Self::new()
            .with("licenses.json", licenses_json(licenses), None)
            .with("exceptions.json", exceptions_json(exceptions), None)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, file_name: &str) -> anyhow::Result<Document> {
        self.requests.borrow_mut().push(file_name.to_string());
        self.docs
            .get(file_name)
            .cloned()
            .ok_or_else(|| anyhow!("404 Not Found: {file_name}"))
    }
}

/// A document served by [`RegistryServer`]: path, `last-modified`, body.
pub type Route = (&'static str, Option<&'static str>, String);

/// Minimal HTTP/1.1 server on a loopback port. Every request gets one
/// response and the connection is closed; unknown paths are a 404.
pub struct RegistryServer {
    addr: SocketAddr,
    paths: Arc<Mutex<Vec<String>>>,
}

impl RegistryServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let paths = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&paths);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                serve(stream, &routes, &seen);
            }
        });
        Self { addr, paths }
    }

    /// `http://127.0.0.1:<port>` followed by `path`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Request paths in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().expect("paths lock").clone()
    }
}

fn serve(mut stream: TcpStream, routes: &[Route], seen: &Mutex<Vec<String>>) {
    let Ok(reader) = stream.try_clone() else { return };
    let mut reader = BufReader::new(reader);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => {}
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or_default();
    seen.lock().expect("paths lock").push(path.to_string());

    let response = match routes.iter().find(|(route, _, _)| *route == path) {
        Some((_, last_modified, body)) => {
            let mut head = format!(
                "HTTP/1.1 200 OK\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n",
                body.len()
            );
            if let Some(value) = last_modified {
                head.push_str(&format!("Last-Modified: {value}\r\n"));
            }
            format!("{head}\r\n{body}")
        }
        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_string(),
    };
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

pub fn licenses_json(ids: &[&str]) -> String {
    let entries: Vec<_> = ids
        .iter()
        .map(|id| json!({ "licenseId": id, "isOsiApproved": true }))
        .collect();
    json!({ "licenseListVersion": "3.25", "licenses": entries }).to_string()
}

pub fn exceptions_json(ids: &[&str]) -> String {
    let entries: Vec<_> = ids
        .iter()
        .map(|id| json!({ "licenseExceptionId": id, "isDeprecatedLicenseId": false }))
        .collect();
    json!({ "licenseListVersion": "3.25", "exceptions": entries }).to_string()
}

/// Owned copies for APIs taking `&[String]`.
pub fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
