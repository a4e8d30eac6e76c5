use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod health;
pub mod ml;
pub mod pump;
pub mod sensors;
pub mod settings;
pub mod system;

/// Success envelope shared by the dashboard-facing routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
