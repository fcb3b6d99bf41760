#![allow(dead_code)]

use std::{
    env,
    io::{BufRead as _, BufReader, Read as _, Write as _},
    net::TcpListener,
    sync::atomic::{AtomicUsize, Ordering},
    thread::{self, JoinHandle},
    time::{SystemTime, UNIX_EPOCH},
};

use ds3::{Client, Credentials, Error, FixedClock};
use time::macros::datetime;

static BUCKET_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// One request as it arrived on the socket.
#[derive(Debug)]
pub(crate) struct Captured {
    pub(crate) method: String,
    pub(crate) target: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
}

impl Captured {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Serves exactly one request with a canned reply and hands back what it saw.
pub(crate) struct OneShotServer {
    pub(crate) endpoint: String,
    handle: JoinHandle<Captured>,
}

impl OneShotServer {
    pub(crate) fn start(status_line: &'static str, reply: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let endpoint = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut line = String::new();
            reader.read_line(&mut line).expect("request line");
            let mut parts = line.trim_end().splitn(3, ' ');
            let method = parts.next().unwrap_or_default().to_string();
            let target = parts.next().unwrap_or_default().to_string();

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("header line");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((k, v)) = line.split_once(':') {
                    headers.push((k.trim().to_string(), v.trim().to_string()));
                }
            }

            let len = headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.parse::<usize>().ok())
                .unwrap_or(0);
            let mut body = vec![0; len];
            reader.read_exact(&mut body).expect("request body");

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
                reply.len(),
            )
            .ok();
            let _ = stream.flush();

            Captured {
                method,
                target,
                headers,
                body,
            }
        });

        Self { endpoint, handle }
    }

    pub(crate) fn captured(self) -> Captured {
        self.handle.join().expect("mock server panicked")
    }
}

/// Client signing at Tue, 15 Nov 1994 08:12:31 GMT with `client` / `secret`.
pub(crate) fn fixed_client(endpoint: &str) -> Client {
    Client::builder(endpoint)
        .expect("endpoint must be valid")
        .credentials(Credentials::new("client", "secret").expect("static credentials"))
        .clock(FixedClock(datetime!(1994-11-15 08:12:31 UTC)))
        .build()
        .expect("client must build")
}

pub(crate) fn live_client() -> Result<Option<Client>, Error> {
    if env::var(ds3::ENDPOINT_ENV).is_err() {
        return Ok(None);
    }
    if Credentials::from_env().is_err() {
        return Ok(None);
    }
    Client::from_env().map(Some)
}

pub(crate) fn unique_bucket(prefix: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let n = BUCKET_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}{now}-{n}")
}

/// Deletes the bucket on drop, so a failed assertion still cleans up.
pub(crate) struct BucketGuard<'a> {
    client: &'a Client,
    bucket: String,
}

impl<'a> BucketGuard<'a> {
    pub(crate) fn new(client: &'a Client, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
        }
    }
}

impl Drop for BucketGuard<'_> {
    fn drop(&mut self) {
        let _ = self.client.delete_bucket(&self.bucket);
    }
}
