use super::error::FetchError;
use crate::log;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Maps a raw status code onto the error taxonomy.
///
/// 2xx proceeds to decoding; every other range is final. Anything outside
/// the recognized ranges is treated as a server-side fault.
pub(crate) fn classify_status(status: u16) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        100..=199 => Err(FetchError::Informational(status)),
        300..=399 => Err(FetchError::Redirection(status)),
        400..=499 => Err(FetchError::Client(status)),
        other => Err(FetchError::Server(other)),
    }
}

/// Decodes a 2xx body into the caller's type.
///
/// An empty body never reaches the JSON parser. The optional pretty-print is
/// best effort and never influences the returned value.
pub(crate) fn decode_body<T: DeserializeOwned>(
    bytes: &[u8],
    print_response: bool,
) -> Result<T, FetchError> {
    if bytes.is_empty() {
        return Err(FetchError::NoData);
    }
    if print_response {
        print_payload(bytes);
    }
    Ok(serde_json::from_slice(bytes)?)
}

fn print_payload(bytes: &[u8]) {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        if let Ok(pretty) = serde_json::to_string_pretty(&value) {
            log!("response payload:\n{pretty}");
        }
    }
}
