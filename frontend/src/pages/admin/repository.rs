use super::utils::{AdminLinkDraft, EmployeeDraft, JobDraft, NewsDraft};
use crate::{
    api::{
        AdminLink, AllAttendanceResponse, ApiClient, ApiError, DeleteAttendanceResponse, Employee,
        Job, LinkConfigItem, LinkMap, NewsEvent,
    },
    state::{attendance::AttendanceFilter, crud::CrudResource, session::Role},
};
use std::rc::Rc;

/// Every admin call goes out with the admin token.
#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            client: Rc::new(client.scoped(Role::Admin)),
        }
    }

    pub fn news(&self) -> NewsResource {
        NewsResource(self.clone())
    }

    pub fn jobs(&self) -> JobsResource {
        JobsResource(self.clone())
    }

    pub fn employees(&self) -> EmployeesResource {
        EmployeesResource(self.clone())
    }

    pub fn admin_links(&self) -> AdminLinksResource {
        AdminLinksResource(self.clone())
    }

    pub async fn links_config(&self) -> Result<Vec<LinkConfigItem>, ApiError> {
        self.client.get_links_config().await
    }

    pub async fn employee_links(&self, employee_id: u32) -> Result<LinkMap, ApiError> {
        self.client.get_employee_links(employee_id).await
    }

    pub async fn save_employee_links(
        &self,
        employee_id: u32,
        links: &LinkMap,
    ) -> Result<(), ApiError> {
        self.client.save_employee_links(employee_id, links).await
    }

    pub async fn clear_employee_links(&self, employee_id: u32) -> Result<(), ApiError> {
        self.client.delete_employee_links(employee_id).await
    }

    pub async fn save_employee_link(
        &self,
        employee_id: u32,
        key: &str,
        url: &str,
    ) -> Result<(), ApiError> {
        self.client.update_employee_link(employee_id, key, url).await
    }

    pub async fn attendance(
        &self,
        filter: AttendanceFilter,
    ) -> Result<AllAttendanceResponse, ApiError> {
        self.client.get_all_attendance(&filter).await
    }

    pub async fn delete_attendance_record(&self, record_id: &str) -> Result<(), ApiError> {
        self.client.delete_attendance_record(record_id).await
    }

    pub async fn delete_employee_attendance(
        &self,
        employee_id: u32,
        filter: AttendanceFilter,
    ) -> Result<DeleteAttendanceResponse, ApiError> {
        self.client
            .delete_employee_attendance(employee_id, &filter)
            .await
    }
}

pub struct NewsResource(AdminRepository);

impl CrudResource for NewsResource {
    type Item = NewsEvent;
    type Id = String;
    type Draft = NewsDraft;

    async fn list(&self) -> Result<Vec<NewsEvent>, ApiError> {
        self.0.client.list_news().await
    }

    async fn create(&self, draft: &NewsDraft) -> Result<(), ApiError> {
        self.0.client.create_news(&draft.to_payload()).await.map(|_| ())
    }

    async fn update(&self, id: &String, draft: &NewsDraft) -> Result<(), ApiError> {
        self.0.client.update_news(id, &draft.to_payload()).await
    }

    async fn delete(&self, id: &String) -> Result<(), ApiError> {
        self.0.client.delete_news(id).await
    }

    fn item_id(item: &NewsEvent) -> String {
        item.id.clone()
    }

    fn draft_from(item: &NewsEvent) -> NewsDraft {
        NewsDraft::from_event(item, None)
    }

    fn validate(draft: &NewsDraft, editing: bool) -> Result<(), ApiError> {
        draft.validate(editing)
    }
}

pub struct JobsResource(AdminRepository);

impl CrudResource for JobsResource {
    type Item = Job;
    type Id = String;
    type Draft = JobDraft;

    async fn list(&self) -> Result<Vec<Job>, ApiError> {
        self.0.client.list_jobs().await
    }

    async fn create(&self, draft: &JobDraft) -> Result<(), ApiError> {
        self.0.client.create_job(&draft.to_payload()).await.map(|_| ())
    }

    async fn update(&self, id: &String, draft: &JobDraft) -> Result<(), ApiError> {
        self.0.client.update_job(id, &draft.to_payload()).await
    }

    async fn delete(&self, id: &String) -> Result<(), ApiError> {
        self.0.client.delete_job(id).await
    }

    fn item_id(item: &Job) -> String {
        item.id.clone()
    }

    fn draft_from(item: &Job) -> JobDraft {
        JobDraft::from_job(item)
    }

    fn validate(draft: &JobDraft, _editing: bool) -> Result<(), ApiError> {
        draft.validate()
    }
}

pub struct EmployeesResource(AdminRepository);

impl CrudResource for EmployeesResource {
    type Item = Employee;
    type Id = u32;
    type Draft = EmployeeDraft;

    async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        let mut employees = self.0.client.list_employees().await?;
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<(), ApiError> {
        self.0
            .client
            .create_employee(&draft.to_create()?)
            .await
            .map(|_| ())
    }

    async fn update(&self, id: &u32, draft: &EmployeeDraft) -> Result<(), ApiError> {
        self.0.client.update_employee(*id, &draft.to_update()).await
    }

    async fn delete(&self, id: &u32) -> Result<(), ApiError> {
        self.0.client.delete_employee(*id).await
    }

    fn item_id(item: &Employee) -> u32 {
        item.id
    }

    fn draft_from(item: &Employee) -> EmployeeDraft {
        EmployeeDraft::from_employee(item)
    }

    fn validate(draft: &EmployeeDraft, editing: bool) -> Result<(), ApiError> {
        draft.validate(editing)
    }
}

pub struct AdminLinksResource(AdminRepository);

impl CrudResource for AdminLinksResource {
    type Item = AdminLink;
    type Id = String;
    type Draft = AdminLinkDraft;

    async fn list(&self) -> Result<Vec<AdminLink>, ApiError> {
        self.0.client.list_admin_links().await
    }

    async fn create(&self, draft: &AdminLinkDraft) -> Result<(), ApiError> {
        self.0
            .client
            .create_admin_link(&draft.to_payload())
            .await
            .map(|_| ())
    }

    async fn update(&self, id: &String, draft: &AdminLinkDraft) -> Result<(), ApiError> {
        self.0.client.update_admin_link(id, &draft.to_payload()).await
    }

    async fn delete(&self, id: &String) -> Result<(), ApiError> {
        self.0.client.delete_admin_link(id).await
    }

    fn item_id(item: &AdminLink) -> String {
        item.id.clone()
    }

    fn draft_from(item: &AdminLink) -> AdminLinkDraft {
        AdminLinkDraft::from_link(item)
    }

    fn validate(draft: &AdminLinkDraft, _editing: bool) -> Result<(), ApiError> {
        draft.validate()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::state::{crud::CrudController, session::Session};
    use httpmock::prelude::*;
    use leptos::*;

    fn repository(server: &MockServer) -> AdminRepository {
        let session = Session::in_memory();
        session.begin(Role::Admin, "admin-token").unwrap();
        AdminRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.base_url()).with_session(session),
        ))
    }

    #[tokio::test]
    async fn creating_a_job_resets_the_form_and_reloads_the_list() {
        let server = MockServer::start_async().await;
        let created = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/jobs")
                    .header("authorization", "Bearer admin-token");
                then.status(200).json_body(serde_json::json!({
                    "_id": "j1",
                    "title": "Commercial Diver",
                    "description": "IMCA Part 1",
                    "location": "Kochi"
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/jobs");
                then.status(200).json_body(serde_json::json!([{
                    "_id": "j1",
                    "title": "Commercial Diver",
                    "description": "IMCA Part 1",
                    "location": "Kochi"
                }]));
            })
            .await;

        let runtime = create_runtime();
        let controller = CrudController::new(repository(&server).jobs());
        controller.draft.set(JobDraft {
            title: "Commercial Diver".into(),
            description: "IMCA Part 1".into(),
            location: "Kochi".into(),
        });

        controller.submit().await.unwrap();

        created.assert_async().await;
        assert_eq!(controller.draft.get_untracked(), JobDraft::default());
        let items = controller.items.get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Commercial Diver");
        runtime.dispose();
    }

    #[tokio::test]
    async fn employees_are_listed_by_id() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/employees");
                then.status(200).json_body(serde_json::json!([
                    { "id": 9, "name": "Ravi", "email": "ravi@example.com" },
                    { "id": 2, "name": "Asha", "email": "asha@example.com" }
                ]));
            })
            .await;

        let employees = repository(&server).employees().list().await.unwrap();
        let ids: Vec<u32> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[tokio::test]
    async fn rejected_employee_create_sends_nothing() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path("/employees");
                then.status(200);
            })
            .await;

        let runtime = create_runtime();
        let controller = CrudController::new(repository(&server).employees());
        controller.draft.set(EmployeeDraft {
            id: "0".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "pw".into(),
        });

        let err = controller.submit().await.unwrap_err();

        assert_eq!(err.code, "VALIDATION_ERROR");
        create.assert_hits_async(0).await;
        runtime.dispose();
    }
}
