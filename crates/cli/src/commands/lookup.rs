use dnsdig_api::dto::ErrorResponse;
use dnsdig_api::ApiError;
use dnsdig_application::use_cases::LookupDomainUseCase;
use dnsdig_domain::DomainError;
use serde::Serialize;
use std::process::ExitCode;

/// Exit status for a lookup that produced a result body
const EXIT_PROCESSED: u8 = 0;
/// Upstream unavailable or internal failure
const EXIT_FAILED: u8 = 1;
/// Missing or invalid domain
const EXIT_REJECTED: u8 = 2;

/// One-shot lookup printing the same JSON body the HTTP API returns.
pub async fn run_lookup(
    lookup: &LookupDomainUseCase,
    domain: &str,
    record_type: Option<&str>,
    pretty: bool,
) -> anyhow::Result<ExitCode> {
    match lookup.execute(Some(domain), record_type).await {
        Ok(result) => {
            print_json(&result, pretty)?;
            Ok(ExitCode::from(EXIT_PROCESSED))
        }
        Err(error) => {
            let code = exit_code_for(&error);
            print_json(
                &ErrorResponse {
                    error: ApiError(error).message(),
                },
                pretty,
            )?;
            Ok(ExitCode::from(code))
        }
    }
}

fn exit_code_for(error: &DomainError) -> u8 {
    match error {
        DomainError::MissingDomain | DomainError::InvalidDomainFormat(_) => EXIT_REJECTED,
        DomainError::UpstreamUnavailable(_) | DomainError::Internal(_) => EXIT_FAILED,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", body);
    Ok(())
}
