use super::{
    client::ApiClient,
    types::{
        AdminLink, AdminLinkCreated, AdminLinkPayload, ApiError, EmployeeLinksResponse,
        LinkConfigItem, LinkMap, LinksConfigResponse,
    },
};

impl ApiClient {
    pub async fn get_links_config(&self) -> Result<Vec<LinkConfigItem>, ApiError> {
        let url = self.endpoint("/employee-links/config").await;
        let body: LinksConfigResponse = self.send_json(self.http_client().get(url)).await?;
        Ok(body.links)
    }

    pub async fn get_employee_links(&self, employee_id: u32) -> Result<LinkMap, ApiError> {
        let url = self
            .endpoint(&format!("/employee-links/{}", employee_id))
            .await;
        let body: EmployeeLinksResponse = self.send_json(self.http_client().get(url)).await?;
        Ok(body.into_link_map())
    }

    pub async fn save_employee_links(
        &self,
        employee_id: u32,
        links: &LinkMap,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employee-links/{}", employee_id))
            .await;
        self.send_discard(self.http_client().put(url).json(links))
            .await
    }

    pub async fn delete_employee_links(&self, employee_id: u32) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employee-links/{}", employee_id))
            .await;
        self.send_discard(self.http_client().delete(url)).await
    }

    pub async fn update_employee_link(
        &self,
        employee_id: u32,
        key: &str,
        link: &str,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employee-links/{}/{}", employee_id, key))
            .await;
        self.send_discard(self.http_client().patch(url).form(&[("url", link)]))
            .await
    }

    pub async fn list_admin_links(&self) -> Result<Vec<AdminLink>, ApiError> {
        let url = self.endpoint("/admin-links").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_admin_link(&self, payload: &AdminLinkPayload) -> Result<AdminLink, ApiError> {
        let url = self.endpoint("/admin-links").await;
        let created: AdminLinkCreated = self
            .send_json(self.http_client().post(url).form(payload))
            .await?;
        Ok(created.link)
    }

    pub async fn update_admin_link(
        &self,
        id: &str,
        payload: &AdminLinkPayload,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/admin-links/{}", id)).await;
        self.send_discard(self.http_client().put(url).form(payload))
            .await
    }

    pub async fn delete_admin_link(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/admin-links/{}", id)).await;
        self.send_discard(self.http_client().delete(url)).await
    }
}
