use serde::{Deserialize, Serialize};

use crate::model::NewTask;
use crate::rule::FieldValue;
use crate::validation::{FieldSpec, Record};

/// Body could not be decoded, or a path parameter is malformed.
pub const FIELD_BAD_FORMAT: &str = "FIELD_BADFORMAT";
/// Body decoded but failed validation.
pub const FIELD_INCORRECT: &str = "FIELD_INCORRECT";
/// Requested task does not exist.
pub const TASK_NOT_FOUND: &str = "TASK_NOT_FOUND";
/// Missing or wrong bearer token.
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
/// Store or other internal failure.
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
/// Client-facing description for [`SERVICE_UNAVAILABLE`].
pub const INTERNAL_ERROR_DESC: &str = "Service is currently unavailable. Please try again later.";

/// Uniform response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T = serde_json::Value> {
    /// `success` or `error`.
    pub status: String,
    /// Present on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    /// Present on successes that carry a payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// `{"status":"success","data":...}`
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            error: None,
            data: Some(data),
        }
    }

    /// `{"status":"error","error":{"code":...,"desc":...}}`
    pub fn error(code: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: Some(ErrorBody {
                code: code.into(),
                desc: desc.into(),
            }),
            data: None,
        }
    }

    /// True when `status` is `success`.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Error member of the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Machine-readable code, e.g. [`FIELD_INCORRECT`].
    pub code: String,
    /// Human-readable detail.
    pub desc: String,
}

/// `POST /v1/create_task` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Record for CreateTaskRequest {
    const TYPE_NAME: &'static str = "CreateTaskRequest";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::str("title", "required,max=255"),
        FieldSpec::str("description", "max=4096"),
    ];

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "title" => Some((&self.title).into()),
            "description" => Some((&self.description).into()),
            _ => None,
        }
    }
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        NewTask {
            title: req.title,
            description: req.description,
        }
    }
}

/// `POST /v1/create_task` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskResponse {
    pub task_id: i64,
}
