//! Response code mapping shared by both DoH clients.
//!
//! The JSON `Status` field and the wire header RCODE carry the same value,
//! so both clients report failures with the same code strings.

pub const NOERROR: u16 = 0;

/// Failure code for a non-zero RCODE. `None` means NOERROR.
pub fn failure_code(rcode: u16) -> Option<String> {
    let code = match rcode {
        NOERROR => return None,
        1 => "EFORMERR",
        2 => "SERVFAIL",
        3 => "ENOTFOUND",
        4 => "ENOTIMP",
        5 => "REFUSED",
        other => return Some(format!("RCODE{}", other)),
    };
    Some(code.to_string())
}

/// Query rejected as malformed, either locally or with HTTP 400
pub const BAD_QUERY: &str = "EBADQUERY";

/// Query did not complete within the configured deadline
pub const TIMEOUT: &str = "ETIMEOUT";

/// NOERROR with an empty answer section, when configured to report it
pub const NO_DATA: &str = "ENODATA";
