use crate::status::HostStatus;
use curl::Error as CurlError;
use curl::easy::{Easy2, Handler, List, WriteError};
use std::time::Duration;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Default)]
struct BodyBuffer {
    data: Vec<u8>,
}

impl BodyBuffer {
    fn reset(&mut self) {
        self.data.clear();
    }
}

impl Handler for BodyBuffer {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        self.data.extend_from_slice(data);
        Ok(data.len())
    }
}

pub struct StatusClient {
    easy: Easy2<BodyBuffer>,
}

impl StatusClient {
    pub fn new() -> Result<Self, CurlError> {
        let mut easy = Easy2::new(BodyBuffer::default());
        easy.follow_location(false)?;
        easy.accept_encoding("")?;
        Ok(Self { easy })
    }

    /// Fetches the status document with caches disabled. Transport errors,
    /// non-2xx answers and malformed bodies all collapse into `None`; the
    /// caller renders the same placeholder state for every one of them.
    pub fn fetch(&mut self, status_url: &Url) -> Option<HostStatus> {
        self.easy.reset();
        self.easy.get_mut().reset();
        let _ = self.easy.follow_location(false);
        let _ = self.easy.accept_encoding("");
        let _ = self.easy.get(true);
        let _ = self.easy.timeout(FETCH_TIMEOUT);
        self.easy.url(status_url.as_str()).ok()?;

        let mut headers = List::new();
        let _ = headers.append("Cache-Control: no-cache");
        let _ = headers.append("Pragma: no-cache");
        let _ = self.easy.http_headers(headers);

        self.easy.perform().ok()?;

        let code = self.easy.response_code().ok()?;
        if !(200..300).contains(&code) {
            return None;
        }

        parse_status_body(&self.easy.get_ref().data)
    }
}

pub fn parse_status_body(body: &[u8]) -> Option<HostStatus> {
    serde_json::from_slice(body).ok()
}
