//! Exit code utilities and mappings

use crate::github::ApiError;

/// The request completed and returned decoded JSON
pub const SUCCESS: u8 = 0;
/// The API returned a status other than 200
pub const STATUS_ERROR: u8 = 1;
/// The transport failed before a response was received
pub const TRANSPORT_ERROR: u8 = 2;
/// A 200 response carried a body that is not JSON
pub const DECODE_ERROR: u8 = 3;
/// Invalid arguments or configuration
pub const USAGE_ERROR: u8 = 64;

/// Exit code for a failed request
pub fn exit_code_for(error: &ApiError) -> u8 {
    match error {
        ApiError::Status(_) => STATUS_ERROR,
        ApiError::Transport(_) => TRANSPORT_ERROR,
        ApiError::Decode { .. } => DECODE_ERROR,
    }
}

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: u8) -> &'static str {
    match exit_code {
        SUCCESS => "success",
        STATUS_ERROR => "API returned an error status",
        TRANSPORT_ERROR => "transport failure",
        DECODE_ERROR => "invalid JSON in response",
        USAGE_ERROR => "invalid arguments or configuration",
        _ => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ResponseMeta;
    use github_transport::{TransportError, codes};
    use std::collections::BTreeMap;

    fn meta(status: u16) -> ResponseMeta {
        ResponseMeta {
            status,
            reason: None,
            headers: BTreeMap::new(),
        }
    }

    #[test]
    fn test_exit_code_for() {
        assert_eq!(exit_code_for(&ApiError::Status(meta(404))), STATUS_ERROR);
        assert_eq!(
            exit_code_for(&ApiError::Transport(TransportError::new(codes::TIMEOUT, "t"))),
            TRANSPORT_ERROR
        );
        assert_eq!(
            exit_code_for(&ApiError::Decode {
                meta: meta(200),
                message: "bad".to_string()
            }),
            DECODE_ERROR
        );
    }

    #[test]
    fn test_get_exit_code_description() {
        assert_eq!(get_exit_code_description(0), "success");
        assert_eq!(get_exit_code_description(1), "API returned an error status");
        assert_eq!(get_exit_code_description(2), "transport failure");
        assert_eq!(get_exit_code_description(3), "invalid JSON in response");
        assert_eq!(get_exit_code_description(64), "invalid arguments or configuration");
        assert_eq!(get_exit_code_description(42), "error");
    }
}
