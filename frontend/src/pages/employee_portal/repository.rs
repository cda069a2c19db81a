use crate::api::{ApiClient, ApiError, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeePortalRepository {
    client: Rc<ApiClient>,
}

impl EmployeePortalRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let mut employees = self.client.list_employees().await?;
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }
}

/// Case-insensitive match on name or id.
pub fn matches_search(employee: &Employee, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || employee.name.to_lowercase().contains(&query)
        || employee.id.to_string().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::matches_search;
    use crate::test_support::helpers::employee;

    #[test]
    fn search_matches_name_or_id() {
        let asha = employee(105);
        assert!(matches_search(&asha, ""));
        assert!(matches_search(&asha, "asha"));
        assert!(matches_search(&asha, "105"));
        assert!(!matches_search(&asha, "ravi"));
    }
}
