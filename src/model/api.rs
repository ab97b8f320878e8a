use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Outcome banners shown at the top of a rendered page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashDto {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl FlashDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
        }
    }

    /// Records an error unless one is already shown, the first failure wins.
    pub fn push_error(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(message.into());
        }
    }
}
