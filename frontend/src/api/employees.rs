use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Employee, UpdateEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn update_employee(&self, id: u32, payload: &UpdateEmployee) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/employees/{}", id)).await;
        self.send_discard(self.http_client().put(url).json(payload))
            .await
    }

    /// The backend also drops the employee's attendance and links.
    pub async fn delete_employee(&self, id: u32) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/employees/{}", id)).await;
        self.send_discard(self.http_client().delete(url)).await
    }
}
