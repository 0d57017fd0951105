use serde::Serialize;

pub(crate) mod config;
pub(crate) mod item;
pub(crate) mod order;

/// Acknowledgement body shared by the success and error responses.
#[derive(Debug, Serialize)]
pub(crate) struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
