//! One-shot TCP server answering with raw response bytes.
//!
//! Used where a well-behaved HTTP server cannot produce the reply under test,
//! such as a body cut short before its declared length.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use reqwest::Url;

/// Serve `response` verbatim to the first connection, then close it.
pub fn serve_once(response: &'static [u8]) -> (Url, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind raw server");
    let addr = listener.local_addr().expect("raw server address");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        read_request(&mut stream);
        stream.write_all(response).expect("write raw response");
        stream.flush().expect("flush raw response");
        drop(stream.shutdown(Shutdown::Both));
    });
    let url = Url::parse(&format!("http://{addr}")).expect("raw server URL");
    (url, handle)
}

fn read_request(stream: &mut TcpStream) {
    let mut received = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let read = stream.read(&mut chunk).expect("read request");
        if read == 0 {
            return;
        }
        received.extend_from_slice(&chunk[..read]);
        if request_complete(&received) {
            return;
        }
    }
}

fn request_complete(received: &[u8]) -> bool {
    let Some(header_end) = received.windows(4).position(|window| window == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&received[..header_end]).to_ascii_lowercase();
    let body_len = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    received.len() >= header_end + 4 + body_len
}
