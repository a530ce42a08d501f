#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

/// One-shot HTTP/1.1 server on loopback.
///
/// Accepts a single connection, reads the request head, writes `response`
/// verbatim and closes the socket.
pub struct Loopback {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Loopback {
    pub fn serve(response: &'static [u8]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response).unwrap();
            stream.flush().unwrap();
        });
        Self { addr, handle }
    }

    pub fn url(&self) -> String { format!("http://{}/get", self.addr) }

    pub fn join(self) { self.handle.join().unwrap(); }
}

/// URL of a loopback port nobody listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/get")
}

pub const JSON_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Type: application/json\r\n\
Content-Length: 2\r\n\
Connection: close\r\n\
\r\n\
{}";

pub const BARE_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Length: 2\r\n\
Connection: close\r\n\
\r\n\
{}";
