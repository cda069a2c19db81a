use chrono::{NaiveDate, NaiveDateTime};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Link key → URL for one employee, always shaped by the configured key set.
pub type LinkMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployee {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub employee: Option<Employee>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub employee_id: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub in_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub out_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hours_worked: f64,
    #[serde(default)]
    pub in_time_display: Option<String>,
    #[serde(default)]
    pub out_time_display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub total_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAttendanceResponse {
    #[serde(default)]
    pub filter: Option<String>,
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub summary: AttendanceSummary,
}

/// `/attendance/{id}` has answered both with a wrapped object and a bare
/// array over time; both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttendancePayload {
    Wrapped(EmployeeAttendanceResponse),
    Bare(Vec<AttendanceRecord>),
}

impl AttendancePayload {
    pub fn into_records(self) -> Vec<AttendanceRecord> {
        match self {
            Self::Wrapped(body) => body.records,
            Self::Bare(records) => records,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAttendance {
    pub employee_id: u32,
    pub employee_name: String,
    #[serde(default)]
    pub email: String,
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub summary: AttendanceSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllAttendanceResponse {
    #[serde(default)]
    pub filter: Option<String>,
    pub date_range: DateRange,
    pub attendance: Vec<EmployeeAttendance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkRequest {
    pub employee_id: u32,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkResponse {
    pub message: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub hours_worked: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAttendanceResponse {
    pub message: String,
    #[serde(default)]
    pub deleted_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsPayload {
    pub title: String,
    pub description: String,
    pub date: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub title: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfigItem {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfigResponse {
    pub links: Vec<LinkConfigItem>,
}

/// `GET /employee-links/{id}` body: the employee id next to one entry per
/// configured key.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeLinksResponse {
    #[serde(default)]
    pub employee_id: Option<u32>,
    #[serde(flatten)]
    pub entries: BTreeMap<String, Value>,
}

impl EmployeeLinksResponse {
    pub fn into_link_map(self) -> LinkMap {
        self.entries
            .into_iter()
            .map(|(key, value)| {
                let url = value.as_str().unwrap_or_default().to_string();
                (key, url)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminLinkCreated {
    #[serde(default)]
    pub message: String,
    pub link: AdminLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLink {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLinkPayload {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_title: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn timeout() -> Self {
        Self::with_code("The server took too long to respond.", "TIMEOUT")
    }

    pub fn cancelled() -> Self {
        Self::with_code("Request cancelled", "CANCELLED")
    }

    /// Builds an error from a non-2xx response body. FastAPI reports failures
    /// as `{"detail": "..."}` or, for validation, `{"detail": [{"msg": ...}]}`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("detail").and_then(detail_text));
        let code = match status {
            400 | 422 => "VALIDATION_ERROR",
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            500..=599 => "SERVER_ERROR",
            _ => "REQUEST_FAILED",
        };
        Self {
            error: detail.unwrap_or_else(|| format!("Request failed with status {}", status)),
            code: code.to_string(),
            status: Some(status),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.code == "CANCELLED"
    }
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.status.is_none());

        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert!(ApiError::cancelled().is_cancelled());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn from_status_reads_fastapi_detail() {
        let error = ApiError::from_status(
            403,
            r#"{"detail":"You are not at an allowed location. Please go to the office to mark attendance."}"#,
        );
        assert_eq!(error.code, "FORBIDDEN");
        assert_eq!(error.status, Some(403));
        assert!(error.error.starts_with("You are not at an allowed location"));
    }

    #[test]
    fn from_status_joins_validation_messages() {
        let body = json!({
            "detail": [
                { "loc": ["body", "email"], "msg": "field required" },
                { "loc": ["body", "id"], "msg": "value is not a valid integer" }
            ]
        });
        let error = ApiError::from_status(422, &body.to_string());
        assert_eq!(error.error, "field required; value is not a valid integer");
    }

    #[test]
    fn from_status_falls_back_to_generic_message() {
        let error = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(error.error, "Request failed with status 502");
        assert_eq!(error.code, "SERVER_ERROR");
    }

    #[test]
    fn attendance_payload_accepts_wrapped_and_bare_shapes() {
        let record = json!({
            "_id": "a1",
            "employee_id": 7,
            "date": "2025-03-04",
            "in_time": "2025-03-04T09:00:00.123456",
            "out_time": null,
            "status": "present",
            "hours_worked": 0.0
        });
        let wrapped: AttendancePayload = serde_json::from_value(json!({
            "filter": "month",
            "records": [record.clone()],
            "summary": { "total_hours": 0.0, "present_days": 1, "total_days": 1 }
        }))
        .unwrap();
        let bare: AttendancePayload = serde_json::from_value(json!([record])).unwrap();

        let wrapped = wrapped.into_records();
        let bare = bare.into_records();
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped[0].employee_id, 7);
        assert!(wrapped[0].in_time.is_some());
        assert!(wrapped[0].out_time.is_none());
    }

    #[test]
    fn employee_ignores_stored_password_field() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "65f0",
            "id": 12,
            "name": "Asha",
            "email": "asha@example.com",
            "password_hash": "secret"
        }))
        .unwrap();
        assert_eq!(employee.id, 12);
        assert_eq!(employee.name, "Asha");
    }

    #[test]
    fn employee_links_response_drops_id_and_blanks_nulls() {
        let response: EmployeeLinksResponse = serde_json::from_value(json!({
            "employee_id": 4,
            "policy_hub_url": "https://policy.example.com",
            "timesheet_url": null
        }))
        .unwrap();
        assert_eq!(response.employee_id, Some(4));
        let links = response.into_link_map();
        assert_eq!(links.len(), 2);
        assert_eq!(links["policy_hub_url"], "https://policy.example.com");
        assert_eq!(links["timesheet_url"], "");
    }

    #[test]
    fn update_employee_skips_blank_password() {
        let payload = UpdateEmployee {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password_hash: None,
        };
        let value = serde_json::to_value(payload).unwrap();
        assert!(value.get("password_hash").is_none());
    }
}
