use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use smart_irrigation_ml::PredictionError;
use smart_irrigation_types::create_id;

use crate::irrigation::PumpControlError;

/// Response header carrying the id of a reported error.
pub const ERROR_ID_HEADER: &str = "x-error-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportPolicy {
    Ignore,
    Report,
}

/// Attached to the response extensions of reported errors so a tracing or
/// alerting layer can pick it up.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub id: String,
    pub status_code: u16,
    pub public_code: &'static str,
    pub summary: String,
    pub details: Option<String>,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    message: String,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    public_code: &'static str,
    public_message: Option<String>,
    report_policy: ReportPolicy,
    report_summary: Option<String>,
    report_details: Option<String>,
}

impl ApiError {
    pub const NOT_FOUND: ApiError = ApiError {
        status: StatusCode::NOT_FOUND,
        public_code: "NOT_FOUND",
        public_message: None,
        report_policy: ReportPolicy::Ignore,
        report_summary: None,
        report_details: None,
    };

    fn new(
        status: StatusCode,
        public_code: &'static str,
        public_message: Option<String>,
        report_policy: ReportPolicy,
    ) -> Self {
        Self {
            status,
            public_code,
            public_message,
            report_policy,
            report_summary: None,
            report_details: None,
        }
    }

    fn reported(
        status: StatusCode,
        public_code: &'static str,
        summary: String,
        details: String,
    ) -> Self {
        let mut err = Self::new(status, public_code, None, ReportPolicy::Report);
        err.report_summary = Some(summary);
        err.report_details = Some(details);
        err
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Internal error: {}", msg);
        let mut err = Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            None,
            ReportPolicy::Report,
        );
        err.report_summary = Some(msg);
        err
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Bad request: {}", msg);
        Self::new(
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            Some(msg),
            ReportPolicy::Ignore,
        )
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Unprocessable entity: {}", msg);
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "UNPROCESSABLE_ENTITY",
            Some(msg),
            ReportPolicy::Ignore,
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Service unavailable: {}", msg);
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            Some(msg),
            ReportPolicy::Ignore,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        let message = self
            .public_message
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Error").to_string());

        let report = (self.report_policy == ReportPolicy::Report).then(|| ErrorReport {
            id: create_id(),
            status_code: status.as_u16(),
            public_code: self.public_code,
            summary: self.report_summary.unwrap_or_else(|| message.clone()),
            details: self.report_details,
        });

        let body = ErrorEnvelope {
            success: false,
            error: ErrorBody {
                code: self.public_code,
                id: report.as_ref().map(|r| r.id.clone()),
                message,
            },
        };
        let mut response = (status, Json(body)).into_response();

        if let Some(report) = report {
            if let Ok(id) = HeaderValue::from_str(&report.id) {
                response.headers_mut().insert(ERROR_ID_HEADER, id);
            }
            response.extensions_mut().insert(report);
        }
        response
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::ModelNotReady => Self::service_unavailable(err.to_string()),
            PredictionError::InsufficientData(_)
            | PredictionError::InvalidFeature { .. }
            | PredictionError::UnknownLabel(_)
            | PredictionError::Dataset(_) => Self::bad_request(err.to_string()),
            PredictionError::CorruptArtifact { .. }
            | PredictionError::ClassOutOfRange { .. }
            | PredictionError::Training(_) => {
                tracing::error!("Model error: {:?}", err);
                Self::reported(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_ERROR",
                    err.to_string(),
                    format!("{:?}", err),
                )
            }
            PredictionError::Storage(_) => {
                tracing::error!("Storage error: {:?}", err);
                Self::reported(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    err.to_string(),
                    format!("{:?}", err),
                )
            }
        }
    }
}

impl From<PumpControlError> for ApiError {
    fn from(err: PumpControlError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<smart_irrigation_types::Error> for ApiError {
    fn from(err: smart_irrigation_types::Error) -> Self {
        tracing::error!("Internal error: {:?}", err);
        Self::reported(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            err.to_string(),
            format!("{:?}", err),
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        // parsing errors are user-caused, keep the message and do not report
        Self::bad_request(format!("JSON error: {}", err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::UNPROCESSABLE_ENTITY {
            Self::unprocessable(rejection.body_text())
        } else {
            Self::bad_request(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl std::error::Error for ApiError {}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.public_code)
    }
}

#[macro_export]
macro_rules! internal {
    ($($arg:tt)*) => { $crate::error::ApiError::internal(format!($($arg)*)) };
}

#[macro_export]
macro_rules! bad_request {
    ($($arg:tt)*) => { $crate::error::ApiError::bad_request(format!($($arg)*)) };
}

#[macro_export]
macro_rules! unprocessable {
    ($($arg:tt)*) => { $crate::error::ApiError::unprocessable(format!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use smart_irrigation_types::anyhow;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_reported_error_carries_id() {
        let err: ApiError = PredictionError::Storage(anyhow!("disk full")).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let id = response
            .headers()
            .get(ERROR_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let report = response.extensions().get::<ErrorReport>().unwrap().clone();
        assert_eq!(report.id, id);
        assert_eq!(report.status_code, 500);
        assert_eq!(report.public_code, "STORAGE_ERROR");
        assert!(report.summary.contains("disk full"));

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
        assert_eq!(body["error"]["id"], id.as_str());
        // internals stay out of the public message
        assert_eq!(body["error"]["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_client_error_is_not_reported() {
        let response = ApiError::bad_request("ph out of range").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(ERROR_ID_HEADER).is_none());
        assert!(response.extensions().get::<ErrorReport>().is_none());

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "ph out of range");
        assert!(body["error"].get("id").is_none());
    }
}
