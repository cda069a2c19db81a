use crate::api::{ApiClient, ApiError, AttendanceRecord, MarkRequest, MarkResponse};
use crate::state::{
    attendance::{AttendanceFilter, TodayStatus},
    links::{visible_quick_links, QuickLink},
    session::Role,
};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkDirection {
    In,
    Out,
}

impl MarkDirection {
    pub fn label(self) -> &'static str {
        match self {
            MarkDirection::In => "IN",
            MarkDirection::Out => "OUT",
        }
    }

    pub fn success_message(self, response: &MarkResponse) -> String {
        format!(
            "✓ {} time marked successfully at {} ({})",
            self.label(),
            response.time,
            response.location
        )
    }

    /// Status the day reaches once this mark is accepted.
    pub fn reached(self) -> TodayStatus {
        match self {
            MarkDirection::In => TodayStatus::InMarked,
            MarkDirection::Out => TodayStatus::Complete,
        }
    }

    pub fn fallback_error(self) -> &'static str {
        match self {
            MarkDirection::In => "Failed to mark attendance",
            MarkDirection::Out => "Failed to mark exit",
        }
    }
}

#[derive(Clone)]
pub struct EmployeeDashboardRepository {
    client: Rc<ApiClient>,
}

impl EmployeeDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            client: Rc::new(client.scoped(Role::Employee)),
        }
    }

    pub async fn quick_links(&self, employee_id: u32) -> Result<Vec<QuickLink>, ApiError> {
        let config = self.client.get_links_config().await?;
        let links = self.client.get_employee_links(employee_id).await?;
        Ok(visible_quick_links(&config, &links))
    }

    pub async fn attendance(
        &self,
        employee_id: u32,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.get_employee_attendance(employee_id, filter).await
    }

    pub async fn mark(
        &self,
        direction: MarkDirection,
        request: MarkRequest,
    ) -> Result<MarkResponse, ApiError> {
        match direction {
            MarkDirection::In => self.client.mark_in(request).await,
            MarkDirection::Out => self.client.mark_out(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_carries_backend_time_and_location() {
        let response = MarkResponse {
            message: "ok".into(),
            location: "Visakhapatnam Office".into(),
            time: "09:02 AM".into(),
            hours_worked: None,
        };
        assert_eq!(
            MarkDirection::In.success_message(&response),
            "✓ IN time marked successfully at 09:02 AM (Visakhapatnam Office)"
        );
        assert_eq!(
            MarkDirection::Out.success_message(&response),
            "✓ OUT time marked successfully at 09:02 AM (Visakhapatnam Office)"
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> EmployeeDashboardRepository {
        let session = Session::in_memory();
        session.begin(Role::Employee, "employee-token").unwrap();
        EmployeeDashboardRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.base_url()).with_session(session),
        ))
    }

    #[tokio::test]
    async fn quick_links_keep_config_order_and_skip_blank_urls() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/employee-links/config");
                then.status(200).json_body(json!({
                    "links": [
                        { "key": "timesheet_url", "name": "Timesheet" },
                        { "key": "attendance_url", "name": "Attendance Sheet" },
                        { "key": "leave_url", "name": "Leave Tracker" }
                    ]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/employee-links/7");
                then.status(200).json_body(json!({
                    "employee_id": 7,
                    "leave_url": "https://sheets.example.com/leave",
                    "timesheet_url": "https://sheets.example.com/time",
                    "attendance_url": "  "
                }));
            })
            .await;

        let links = repository(&server).quick_links(7).await.unwrap();
        let keys: Vec<_> = links.iter().map(|link| link.key.as_str()).collect();
        assert_eq!(keys, ["timesheet_url", "leave_url"]);
    }

    #[tokio::test]
    async fn mark_out_posts_coordinates_with_the_employee_token() {
        let server = MockServer::start_async().await;
        let mark = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/attendance/mark-out")
                    .header("authorization", "Bearer employee-token")
                    .x_www_form_urlencoded_tuple("employee_id", "7")
                    .x_www_form_urlencoded_tuple("latitude", "17.7")
                    .x_www_form_urlencoded_tuple("longitude", "83.3");
                then.status(200).json_body(json!({
                    "message": "OUT time marked",
                    "location": "Vizag Office",
                    "time": "05:31 PM",
                    "hours_worked": 8.5
                }));
            })
            .await;

        let response = repository(&server)
            .mark(
                MarkDirection::Out,
                MarkRequest {
                    employee_id: 7,
                    latitude: 17.7,
                    longitude: 83.3,
                },
            )
            .await
            .unwrap();
        mark.assert_async().await;
        assert_eq!(response.time, "05:31 PM");
        assert_eq!(response.hours_worked, Some(8.5));
    }

    #[tokio::test]
    async fn mark_rejection_surfaces_backend_detail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/attendance/mark-in");
                then.status(400)
                    .json_body(json!({ "detail": "You are not at the office location" }));
            })
            .await;

        let err = repository(&server)
            .mark(
                MarkDirection::In,
                MarkRequest {
                    employee_id: 7,
                    latitude: 0.0,
                    longitude: 0.0,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.error, "You are not at the office location");
    }
}
