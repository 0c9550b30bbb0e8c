use dnsdig_domain::QueryError;

const UNKNOWN_CODE: &str = "UNKNOWN";

/// Maps resolver failure codes to the messages shown to callers.
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Message for a failure code. Total: absent or blank codes become
    /// `UNKNOWN`, unrecognized codes are echoed back literally.
    pub fn classify(code: Option<&str>) -> String {
        let code = match code {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNKNOWN_CODE,
        };

        match Self::known_message(code) {
            Some(message) => message.to_string(),
            None => format!("DNS lookup error: {}", code),
        }
    }

    pub fn classify_error(error: &QueryError) -> String {
        Self::classify(error.code())
    }

    pub fn known_message(code: &str) -> Option<&'static str> {
        match code {
            "ENODATA" => Some("No DNS records found for this type."),
            "ENOTFOUND" => Some("Domain not found."),
            "ETIMEOUT" => Some("DNS query timed out."),
            "SERVFAIL" => Some("DNS server failed to complete the request."),
            "REFUSED" => Some("DNS query was refused by the server."),
            _ => None,
        }
    }
}
