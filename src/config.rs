use std::time::Duration;

use clap_serde_derive::ClapSerde;
use url::Url;

use crate::bail_probe;
use crate::error::ProbeResult;

pub const DEFAULT_URL: &str = "http://localhost:3000/login";
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

#[derive(ClapSerde, Debug, Clone)]
pub struct Config {
    /// The URL the probe sends its GET request to
    #[default(DEFAULT_URL.to_string())]
    #[arg(short, long, env = "LOGIN_PROBE_URL")]
    pub url: String,

    /// Seconds to wait for the whole request before giving up
    #[default(DEFAULT_TIMEOUT_SECS)]
    #[arg(short, long, env = "LOGIN_PROBE_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Number of body characters shown in the preview line
    #[default(DEFAULT_PREVIEW_CHARS)]
    #[arg(short, long, env = "LOGIN_PROBE_PREVIEW_CHARS")]
    pub preview_chars: usize,
}

impl Config {
    pub fn from_toml(path: &str) -> ProbeResult<Self> {
        let str = std::fs::read_to_string(path)?;
        Self::from_toml_str(&str)
    }

    pub fn from_toml_str(str: &str) -> ProbeResult<Self> {
        let opt: <Config as ClapSerde>::Opt = toml::from_str(str)?;
        Ok(Config::from(opt))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Rejects settings the probe cannot run with. Called before any network I/O.
    pub fn validate(&self) -> ProbeResult<Url> {
        if self.timeout_secs == 0 {
            bail_probe!("timeout must be positive");
        }
        if self.preview_chars == 0 {
            bail_probe!("preview length must be positive");
        }

        let url = Url::parse(&self.url)?;
        if !matches!(url.scheme(), "http" | "https") {
            bail_probe!("unsupported URL scheme {} in {}", url.scheme(), self.url);
        }
        Ok(url)
    }
}
