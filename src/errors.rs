use serde_json::json;
use thiserror::Error;

/// Main error type.
///
/// The first group is what the workflow components report to the operator; the
/// second group is raised by the HTTP and signing layers and converted at the
/// component boundary.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Key text is not 32 bytes of hex or not a valid secp256k1 scalar.
    #[error("Invalid private key: {0}")]
    InvalidKeyMaterial(String),

    /// Account-state query failed in transport or protocol; `detail` holds the
    /// structured error body when the exchange sent one.
    #[error("Error fetching account state: {message}")]
    QueryFailed {
        message: String,
        detail: Option<serde_json::Value>,
    },

    /// Order submission failed; `detail` holds the raw exchange response when there was one.
    #[error("Order placement failed: {message}")]
    OrderRejected {
        message: String,
        detail: Option<serde_json::Value>,
    },

    /// Order parameters rejected before anything was sent.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// No identity has been resolved in this session yet.
    #[error("No private key entered")]
    NoIdentity,

    // === Transport and signing ===
    /// Client HTTP error (4xx)
    #[error("Client error: status code: {status_code}, error code: {error_code:?}, error message: {error_message}, error data: {error_data:?}")]
    ClientRequest {
        status_code: u16,
        error_code: Option<u16>,
        error_message: String,
        error_data: Option<String>,
    },

    /// Server HTTP error (5xx)
    #[error("Server error: status code: {status_code}, error message: {error_message}")]
    ServerRequest {
        status_code: u16,
        error_message: String,
    },

    /// Request could not be built or sent, or the body could not be read
    #[error("Generic request error: {0}")]
    GenericRequest(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Json parse error: {0}")]
    JsonParse(String),

    #[error("Rmp parse error: {0}")]
    RmpParse(String),

    #[error("ECDSA signature failed: {0}")]
    SignatureFailure(String),
}

impl Error {
    pub fn query_failed(msg: impl Into<String>, detail: Option<serde_json::Value>) -> Self {
        Error::QueryFailed {
            message: msg.into(),
            detail,
        }
    }

    pub fn order_rejected(msg: impl Into<String>, detail: Option<serde_json::Value>) -> Self {
        Error::OrderRejected {
            message: msg.into(),
            detail,
        }
    }

    pub fn json_parse(msg: impl Into<String>) -> Self {
        Error::JsonParse(msg.into())
    }

    /// Diagnostic payload attached to the error, if any.
    pub fn detail(&self) -> Option<&serde_json::Value> {
        match self {
            Error::QueryFailed { detail, .. } | Error::OrderRejected { detail, .. } => {
                detail.as_ref()
            }
            _ => None,
        }
    }

    /// HTTP status and body of a non-2xx response, as JSON.
    pub(crate) fn response_detail(&self) -> Option<serde_json::Value> {
        match self {
            Error::ClientRequest {
                status_code,
                error_code,
                error_message,
                error_data,
            } => Some(json!({
                "statusCode": status_code,
                "errorCode": error_code,
                "errorMessage": error_message,
                "errorData": error_data,
            })),
            Error::ServerRequest {
                status_code,
                error_message,
            } => Some(json!({
                "statusCode": status_code,
                "errorMessage": error_message,
            })),
            _ => None,
        }
    }
}
