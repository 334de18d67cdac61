use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::ProbeResult;

/// A single-use GET request against one URL.
#[derive(Debug)]
pub struct Probe {
    url: Url,
    timeout: Duration,
    client: Client,
}

/// Everything the report needs from a received response, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ProbeResponse {
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// The `charset` parameter of the `Content-Type` header, if the server declared one.
    pub fn charset(&self) -> Option<&str> {
        let (_, content_type) = self
            .headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))?;
        content_type.split(';').skip(1).find_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches('"'))
        })
    }

    /// The body decoded with the declared charset. Unknown or missing charsets fall back to
    /// UTF-8; undecodable bytes become U+FFFD.
    pub fn text(&self) -> String {
        let encoding = self
            .charset()
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);
        let (text, _, _) = encoding.decode(&self.body);
        text.into_owned()
    }

    /// The first `chars` characters of the decoded body.
    pub fn preview(&self, chars: usize) -> String {
        self.text().chars().take(chars).collect()
    }
}

impl Probe {
    pub fn new(config: &Config) -> ProbeResult<Self> {
        let url = config.validate()?;
        let timeout = config.timeout();
        // The target is a local endpoint; ambient proxy settings must not reroute it.
        let client = Client::builder().timeout(timeout).no_proxy().build()?;
        Ok(Probe {
            url,
            timeout,
            client,
        })
    }

    pub(crate) fn url(&self) -> &Url {
        &self.url
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends the GET request and reads the full body. Any received response is `Ok`, including
    /// 4xx and 5xx; only transport faults (refused, timed out, unresolvable) are errors.
    #[instrument(skip(self), fields(url = %self.url(), timeout = ?self.timeout()))]
    pub fn fetch(&self) -> ProbeResult<ProbeResponse> {
        debug!("Sending request");
        let response = self.client.get(self.url.clone()).send()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes()?.to_vec();
        debug!(status, body_len = body.len(), "Received response");

        Ok(ProbeResponse {
            status,
            headers,
            body,
        })
    }
}
