use super::{
    client::ApiClient,
    types::{
        AllAttendanceResponse, ApiError, AttendancePayload, AttendanceRecord,
        DeleteAttendanceResponse, MarkRequest, MarkResponse,
    },
};
use crate::state::attendance::AttendanceFilter;

impl ApiClient {
    pub async fn get_employee_attendance(
        &self,
        employee_id: u32,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint(&format!("/attendance/{}", employee_id)).await;
        let payload: AttendancePayload = self
            .send_json(self.http_client().get(url).query(&filter.query()))
            .await?;
        Ok(payload.into_records())
    }

    pub async fn get_all_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<AllAttendanceResponse, ApiError> {
        let url = self.endpoint("/attendance/all").await;
        self.send_json(self.http_client().get(url).query(&filter.query()))
            .await
    }

    pub async fn mark_in(&self, request: MarkRequest) -> Result<MarkResponse, ApiError> {
        self.post_mark("/attendance/mark-in", request).await
    }

    pub async fn mark_out(&self, request: MarkRequest) -> Result<MarkResponse, ApiError> {
        self.post_mark("/attendance/mark-out", request).await
    }

    async fn post_mark(&self, path: &str, request: MarkRequest) -> Result<MarkResponse, ApiError> {
        let url = self.endpoint(path).await;
        let fields = [
            ("employee_id", request.employee_id.to_string()),
            ("latitude", request.latitude.to_string()),
            ("longitude", request.longitude.to_string()),
        ];
        self.send_json(self.http_client().post(url).form(&fields))
            .await
    }

    pub async fn delete_attendance_record(&self, record_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/attendance/{}", record_id)).await;
        self.send_discard(self.http_client().delete(url)).await
    }

    /// Removes every record of `employee_id` inside `filter`.
    pub async fn delete_employee_attendance(
        &self,
        employee_id: u32,
        filter: &AttendanceFilter,
    ) -> Result<DeleteAttendanceResponse, ApiError> {
        let url = self
            .endpoint(&format!("/attendance/employee/{}", employee_id))
            .await;
        self.send_json(self.http_client().delete(url).query(&filter.query()))
            .await
    }
}
