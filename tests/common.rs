#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

/// Canonical key of 2024-03-10 (UTC midnight).
pub const MARCH_10: i64 = 1_710_028_800;
/// Canonical bounds of the March/April 2024 window.
pub const MARCH_1: i64 = 1_709_251_200;
pub const APRIL_30: i64 = 1_714_435_200;

/// Binary with an isolated HOME (no config file) and no colors.
pub fn rmi(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("rmileage_home_{}", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rmileage");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env("NO_COLOR", "1")
        .env_remove("RMILEAGE_LOG");
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rmileage_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Address nothing listens on.
pub const DEAD_API: &str = "http://127.0.0.1:9/";

/// Loopback HTTP server answering the queued responses in order, one per
/// connection, and recording each raw request (head + body).
pub struct StubApi {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    pub fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub api");
        let url = format!("http://{}/", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        let queued: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(s, b)| (s, b.to_string()))
            .collect();
        thread::spawn(move || {
            for (status, body) in queued {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let req = read_request(&stream);
                log.lock().expect("request log").push(req);
                let reply = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                stream.write_all(reply.as_bytes()).ok();
                stream.flush().ok();
            }
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn read_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    let mut content_length = 0usize;

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if line == "\r\n" {
            break;
        }
        if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = v.trim().parse().unwrap_or(0);
        }
        head.push_str(&line);
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok();
    head + &String::from_utf8_lossy(&body)
}
