use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire format spoken to the DNS-over-HTTPS resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamFormat {
    /// JSON API (`application/dns-json`), as served by Cloudflare and Google
    #[default]
    Json,
    /// RFC 8484 binary messages (`application/dns-message`)
    Wire,
}

impl UpstreamFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamFormat::Json => "json",
            UpstreamFormat::Wire => "wire",
        }
    }
}

impl fmt::Display for UpstreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UpstreamFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(UpstreamFormat::Json),
            "wire" => Ok(UpstreamFormat::Wire),
            _ => Err(format!("Invalid upstream format: {} (expected json or wire)", s)),
        }
    }
}

/// DNS-over-HTTPS resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Resolver endpoint (default: "https://cloudflare-dns.com/dns-query")
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub format: UpstreamFormat,

    /// Per-query timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Report NOERROR responses without answers as `ENODATA` failures
    /// instead of empty successes (default: false)
    #[serde(default)]
    pub empty_answer_as_nodata: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            format: UpstreamFormat::default(),
            timeout_ms: default_timeout_ms(),
            empty_answer_as_nodata: false,
        }
    }
}

fn default_url() -> String {
    "https://cloudflare-dns.com/dns-query".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}
