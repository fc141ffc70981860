//! Minimal HTTP/1.1 server for integration tests.
//!
//! Routes:
//! - `/ok`: 200 with a small body.
//! - `/missing`: 404.
//! - `/redirect/N`: 302 to `/redirect/N-1`; `/redirect/0` answers 200.
//! - `/loop`: 302 to itself forever.
//! - `/slow`: sleeps before answering 200 (for timeout tests).
//!
//! The query string is ignored for routing. Every response closes the connection.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// How long `/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

/// Starts the server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Returns a base URL on which nothing is listening.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = route(path);
    let _ = stream.write_all(response.as_bytes());
}

fn route(target: &str) -> String {
    let path = target.split('?').next().unwrap_or(target);
    if path == "/ok" {
        return respond("200 OK", None, "hello");
    }
    if path == "/loop" {
        return respond("302 Found", Some("/loop"), "");
    }
    if path == "/slow" {
        thread::sleep(SLOW_DELAY);
        return respond("200 OK", None, "late");
    }
    if let Some(n) = path.strip_prefix("/redirect/") {
        return match n.parse::<u32>() {
            Ok(0) => respond("200 OK", None, "arrived"),
            Ok(n) => respond("302 Found", Some(&format!("/redirect/{}", n - 1)), ""),
            Err(_) => respond("400 Bad Request", None, ""),
        };
    }
    respond("404 Not Found", None, "not found")
}

fn respond(status: &str, location: Option<&str>, body: &str) -> String {
    let location = location
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
        status,
        body.len(),
        location,
        body
    )
}
