#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// A throwaway HTTP/1.1 server on an ephemeral local port. The accept loop runs on a detached
/// thread for the rest of the test process.
pub struct FixtureServer {
    pub addr: SocketAddr,
    connections: Arc<AtomicUsize>,
}

impl FixtureServer {
    /// Answers every request with the given status and body, then closes the connection.
    pub fn respond_with(status: u16, reason: &str, body: &str) -> Self {
        Self::respond_with_bytes(status, reason, "text/plain", body.as_bytes())
    }

    /// Like `respond_with`, but with an explicit `Content-Type` and raw body bytes.
    pub fn respond_with_bytes(status: u16, reason: &str, content_type: &str, body: &[u8]) -> Self {
        let mut response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\nX-Fixture: login\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);
        Self::spawn(move |mut stream| {
            read_request_head(&stream);
            let _ = stream.write_all(&response);
            let _ = stream.flush();
        })
    }

    /// Accepts connections, reads the request and never answers.
    pub fn silent() -> Self {
        Self::spawn(|stream| {
            read_request_head(&stream);
            // Hold the socket open until the client gives up.
            thread::sleep(std::time::Duration::from_secs(30));
            drop(stream);
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}/login", self.addr)
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    fn spawn<F>(handler: F) -> Self
    where
        F: Fn(TcpStream) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind fixture listener");
        let addr = listener.local_addr().expect("fixture address");
        let connections = Arc::new(AtomicUsize::new(0));

        let counter = connections.clone();
        let handler = Arc::new(handler);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                counter.fetch_add(1, Ordering::SeqCst);
                let handler = handler.clone();
                thread::spawn(move || handler(stream));
            }
        });

        FixtureServer { addr, connections }
    }
}

/// An address nothing listens on: bind an ephemeral port and release it again.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/login")
}

fn read_request_head(stream: &TcpStream) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) if line == "\r\n" => return,
            Ok(_) => {}
        }
    }
}
