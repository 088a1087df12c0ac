use serde::{Deserialize, Serialize};

/// Response wrapper shared by every JSON route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    /// Successful response carrying a payload
    pub fn with_data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Attach a message to an existing response
    pub fn and_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Failed response
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

/// Status code and message pair describing a failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let response: ApiResponse = ApiResponse::message("Welcome to the API");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "message": "Welcome to the API" })
        );
    }

    #[test]
    fn test_failure_shape() {
        let response: ApiResponse = ApiResponse::failure("Route not found");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "Route not found" }));
    }

    #[test]
    fn test_api_error_uses_camel_case() {
        let err = ApiError {
            status_code: 404,
            message: "Route not found".to_string(),
            details: None,
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, json!({ "statusCode": 404, "message": "Route not found" }));
    }
}
