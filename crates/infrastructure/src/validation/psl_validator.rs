use dnsdig_application::ports::DomainValidator;
use dnsdig_domain::{Domain, DomainRejection};
use std::net::IpAddr;
use url::{Host, Url};

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Domain validator backed by the Public Suffix List.
///
/// Accepts a bare host name or a URL. The host is extracted, IDNA-encoded
/// and lowercased by the `url` parser, then checked for label syntax and
/// for a registrable domain under a known public suffix. The full host is
/// kept: `www.example.com` stays `www.example.com`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PslDomainValidator;

impl PslDomainValidator {
    pub fn new() -> Self {
        Self
    }

    fn extract_host(input: &str) -> Result<String, DomainRejection> {
        // bare IPv6 does not survive the URL parser unbracketed
        if let Ok(ip) = input.parse::<IpAddr>() {
            return Err(DomainRejection::IsIpLiteral(ip.to_string()));
        }

        let candidate = if input.contains("://") {
            input.to_string()
        } else {
            format!("http://{}", input)
        };

        let url =
            Url::parse(&candidate).map_err(|_| DomainRejection::Malformed(input.to_string()))?;

        match url.host() {
            Some(Host::Domain(host)) => Ok(host.to_string()),
            Some(Host::Ipv4(ip)) => Err(DomainRejection::IsIpLiteral(ip.to_string())),
            Some(Host::Ipv6(ip)) => Err(DomainRejection::IsIpLiteral(ip.to_string())),
            None => Err(DomainRejection::Malformed(input.to_string())),
        }
    }

    fn check_syntax(host: &str) -> bool {
        if host.is_empty() || host.len() > MAX_DOMAIN_LEN {
            return false;
        }

        host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_LABEL_LEN
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
        })
    }

    fn has_registrable_domain(host: &str) -> bool {
        psl::domain(host.as_bytes())
            .map(|domain| domain.suffix().is_known())
            .unwrap_or(false)
    }
}

impl DomainValidator for PslDomainValidator {
    fn validate(&self, raw: &str) -> Result<Domain, DomainRejection> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(DomainRejection::Empty);
        }

        let host = Self::extract_host(input)?;
        let host = host.strip_suffix('.').unwrap_or(&host).to_ascii_lowercase();

        if !Self::check_syntax(&host) || !Self::has_registrable_domain(&host) {
            return Err(DomainRejection::Malformed(input.to_string()));
        }

        Ok(Domain::from_normalized(host))
    }
}
