//! HTTP DTOs for the analysis endpoint.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::application::AnalyzeRoomCommand;
use crate::domain::chi::{Direction, RoomAnalysis};
use crate::domain::foundation::Percentage;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to analyze a room.
///
/// Fields are kept loosely typed so that shape errors can be reported with
/// the endpoint's own messages rather than a generic deserializer error.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRoomRequest {
    pub colors: Option<Value>,
    pub direction: Option<Value>,
}

/// Reasons a request body is rejected before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Missing colors array or direction")]
    MissingFields,

    #[error("Invalid direction")]
    InvalidDirection,

    #[error("Colors array must not be empty")]
    EmptyColors,
}

/// Only a JSON object is a request; arrays are never read by position.
impl TryFrom<Value> for AnalyzeRoomRequest {
    type Error = RequestError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                colors: fields.remove("colors"),
                direction: fields.remove("direction"),
            }),
            _ => Err(RequestError::MissingFields),
        }
    }
}

impl AnalyzeRoomRequest {
    /// Validates the request shape and builds the command.
    ///
    /// Array entries that are not strings are passed through as empty
    /// strings, which the classifier treats as black.
    pub fn into_command(self) -> Result<AnalyzeRoomCommand, RequestError> {
        let colors = match self.colors {
            Some(Value::Array(items)) => items,
            _ => return Err(RequestError::MissingFields),
        };

        let direction = match self.direction {
            None => return Err(RequestError::MissingFields),
            Some(value) if is_falsy(&value) => return Err(RequestError::MissingFields),
            Some(Value::String(s)) => s
                .parse::<Direction>()
                .map_err(|_| RequestError::InvalidDirection)?,
            Some(_) => return Err(RequestError::InvalidDirection),
        };

        if colors.is_empty() {
            return Err(RequestError::EmptyColors);
        }

        let colors = colors
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                _ => String::new(),
            })
            .collect();

        Ok(AnalyzeRoomCommand { colors, direction })
    }
}

/// `null`, `false`, `0` and `""` count as an absent field.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Element shares, serialized in canonical element order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementPercentagesResponse {
    #[serde(rename = "Wood")]
    pub wood: Percentage,
    #[serde(rename = "Fire")]
    pub fire: Percentage,
    #[serde(rename = "Earth")]
    pub earth: Percentage,
    #[serde(rename = "Metal")]
    pub metal: Percentage,
    #[serde(rename = "Water")]
    pub water: Percentage,
}

/// Successful analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRoomResponse {
    pub score: u8,
    pub elements: ElementPercentagesResponse,
    pub recommendations: Vec<String>,
    pub analysis: String,
}

impl From<RoomAnalysis> for AnalyzeRoomResponse {
    fn from(result: RoomAnalysis) -> Self {
        let [wood, fire, earth, metal, water] =
            result.histogram.percentages().map(|(_, share)| share);
        let elements = ElementPercentagesResponse {
            wood,
            fire,
            earth,
            metal,
            water,
        };
        Self {
            score: result.score(),
            elements,
            recommendations: result.recommendations,
            analysis: result.analysis,
        }
    }
}

/// Standard error response.
///
/// `error` repeats `message` for clients that read the bare `{error}` shape.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            code: code.to_string(),
            error: message.clone(),
            message,
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn payload_too_large() -> Self {
        Self::new("PAYLOAD_TOO_LARGE", "Request body too large")
    }

    pub fn method_not_allowed() -> Self {
        Self::new("METHOD_NOT_ALLOWED", "Method not allowed")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> AnalyzeRoomRequest {
        AnalyzeRoomRequest::try_from(body).unwrap()
    }

    #[test]
    fn valid_request_builds_command() {
        let cmd = request(json!({"colors": ["#FF0000", "#00C000"], "direction": "SE"}))
            .into_command()
            .unwrap();
        assert_eq!(cmd.colors, vec!["#FF0000", "#00C000"]);
        assert_eq!(cmd.direction, Direction::SE);
    }

    #[test]
    fn missing_fields_are_rejected() {
        for body in [
            json!({}),
            json!({"direction": "N"}),
            json!({"colors": "#FF0000", "direction": "N"}),
            json!({"colors": ["#FF0000"]}),
            json!({"colors": ["#FF0000"], "direction": null}),
            json!({"colors": ["#FF0000"], "direction": ""}),
            json!({"colors": ["#FF0000"], "direction": false}),
            json!({"colors": ["#FF0000"], "direction": 0}),
            json!({"colors": ["#FF0000"], "direction": 0.0}),
        ] {
            assert_eq!(
                request(body.clone()).into_command().unwrap_err(),
                RequestError::MissingFields,
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn unknown_direction_is_rejected() {
        for direction in [
            json!("north"),
            json!("n"),
            json!(7),
            json!(true),
            json!(["N"]),
            json!({}),
        ] {
            let err = request(json!({"colors": ["#FF0000"], "direction": direction}))
                .into_command()
                .unwrap_err();
            assert_eq!(err, RequestError::InvalidDirection);
        }
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [
            json!([["#FF0000"], "S"]),
            json!("#FF0000"),
            json!(42),
            json!(null),
        ] {
            assert_eq!(
                AnalyzeRoomRequest::try_from(body.clone()).unwrap_err(),
                RequestError::MissingFields,
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn empty_colors_are_rejected() {
        let err = request(json!({"colors": [], "direction": "N"}))
            .into_command()
            .unwrap_err();
        assert_eq!(err, RequestError::EmptyColors);
        assert_eq!(err.to_string(), "Colors array must not be empty");
    }

    #[test]
    fn non_string_colors_become_blank() {
        let cmd = request(json!({"colors": [42, null, "#FFFFFF"], "direction": "W"}))
            .into_command()
            .unwrap();
        assert_eq!(cmd.colors, vec!["", "", "#FFFFFF"]);
    }

    #[test]
    fn response_serializes_elements_in_canonical_order() {
        let result = RoomAnalysis::compute(&["#FF0000"], Direction::S).unwrap();
        let response = AnalyzeRoomResponse::from(result);
        let json = serde_json::to_string(&response.elements).unwrap();
        assert_eq!(
            json,
            r#"{"Wood":0,"Fire":100,"Earth":0,"Metal":0,"Water":0}"#
        );
        assert_eq!(response.score, 65);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("Invalid direction")).unwrap();
        assert_eq!(
            json,
            json!({
                "code": "BAD_REQUEST",
                "message": "Invalid direction",
                "error": "Invalid direction"
            })
        );
    }
}
