// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::clarity::WireError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Request to {endpoint} ({function}) failed: {source}")]
    Network {
        endpoint: String,
        function: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error calling {function} at {endpoint}: {status} - {body}")]
    Status {
        endpoint: String,
        function: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response from {function}: {reason}")]
    MalformedBody { function: String, reason: String },

    #[error("Unknown Clarity value type '{0}'")]
    UnknownValueVariant(String),

    #[error("No BNS name found for address {0}")]
    NameNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ServiceError {
    /// Convert a wire parsing failure raised while reading `function`'s result.
    pub(crate) fn from_wire(function: &str, err: WireError) -> Self {
        match err {
            WireError::UnknownVariant(tag) => ServiceError::UnknownValueVariant(tag),
            WireError::Malformed(reason) => ServiceError::MalformedBody {
                function: function.to_string(),
                reason,
            },
        }
    }

    /// Transport-level failure (network or HTTP status), as opposed to a
    /// problem with the content of a response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ServiceError::Network { .. } | ServiceError::Status { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_maps_variants() {
        let err = ServiceError::from_wire("get-admin", WireError::UnknownVariant("map".into()));
        assert!(matches!(err, ServiceError::UnknownValueVariant(tag) if tag == "map"));

        let err = ServiceError::from_wire("get-admin", WireError::Malformed("bad".into()));
        assert!(
            matches!(err, ServiceError::MalformedBody { ref function, .. } if function == "get-admin")
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn test_status_error_message() {
        let err = ServiceError::Status {
            endpoint: "https://api.hiro.so/v2/contracts/call-read/SP1/ticketing/get-admin"
                .to_string(),
            function: "get-admin".to_string(),
            status: reqwest::StatusCode::BAD_REQUEST,
            body: "invalid argument".to_string(),
        };
        assert!(err.is_transport());
        assert!(err.to_string().contains("400 Bad Request - invalid argument"));
    }
}
