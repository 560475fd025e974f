use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn healthy() -> Self { Self { status: "healthy" } }
}

/// Acknowledgement body returned by mutating endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i32>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), id: None }
    }

    pub fn with_id(message: impl Into<String>, id: i32) -> Self {
        Self { message: message.into(), id: Some(id) }
    }
}

/// Error body shape shared by every non-2xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
