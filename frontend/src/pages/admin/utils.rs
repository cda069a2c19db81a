use crate::api::{
    AdminLink, AdminLinkPayload, ApiError, CreateEmployee, Employee, ImageUpload, Job, JobPayload,
    NewsEvent, NewsPayload, UpdateEmployee,
};

fn require(fields: &[&str], message: &str) -> Result<(), ApiError> {
    if fields.iter().any(|value| value.trim().is_empty()) {
        return Err(ApiError::validation(message));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub image: Option<ImageUpload>,
    /// Object URL of the chosen file, or the stored image while editing.
    pub preview_url: Option<String>,
}

impl NewsDraft {
    pub fn from_event(event: &NewsEvent, asset_base: Option<&str>) -> Self {
        let preview_url = match (asset_base, event.image_path.trim()) {
            (_, "") => None,
            (Some(base), path) => Some(crate::config::asset_url(base, path)),
            (None, path) => Some(path.to_string()),
        };
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            image: None,
            preview_url,
        }
    }

    pub fn validate(&self, editing: bool) -> Result<(), ApiError> {
        require(
            &[&self.title, &self.description, &self.date],
            "Title, description and date are required.",
        )?;
        if !editing && self.image.is_none() {
            return Err(ApiError::validation("Please choose an image for the news item."));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> NewsPayload {
        NewsPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date.trim().to_string(),
            image: self.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub location: String,
}

impl JobDraft {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require(
            &[&self.title, &self.description, &self.location],
            "Title, description and location are required.",
        )
    }

    pub fn to_payload(&self) -> JobPayload {
        JobPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
        }
    }
}

/// Employee form. `id` stays text so the input can be cleared; the password
/// starts blank when editing and is only sent when filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            password: String::new(),
        }
    }

    pub fn parsed_id(&self) -> Result<u32, ApiError> {
        match self.id.trim().parse::<u32>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(ApiError::validation("Employee ID must be a positive number.")),
        }
    }

    pub fn validate(&self, editing: bool) -> Result<(), ApiError> {
        self.parsed_id()?;
        require(&[&self.name, &self.email], "Name and email are required.")?;
        if !editing && self.password.trim().is_empty() {
            return Err(ApiError::validation("A password is required for new employees."));
        }
        Ok(())
    }

    pub fn to_create(&self) -> Result<CreateEmployee, ApiError> {
        Ok(CreateEmployee {
            id: self.parsed_id()?,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password_hash: self.password.clone(),
        })
    }

    pub fn to_update(&self) -> UpdateEmployee {
        UpdateEmployee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password_hash: (!self.password.trim().is_empty()).then(|| self.password.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminLinkDraft {
    pub name: String,
    pub url: String,
}

impl AdminLinkDraft {
    pub fn from_link(link: &AdminLink) -> Self {
        Self {
            name: link.name.clone(),
            url: link.url.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[&self.name, &self.url], "Name and URL are required.")
    }

    pub fn to_payload(&self) -> AdminLinkPayload {
        AdminLinkPayload {
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
        }
    }
}

pub fn delete_employee_prompt(name: &str) -> String {
    format!(
        "Delete employee: {}? This will also delete all their attendance records and links.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn news_create_needs_an_image_but_edit_does_not() {
        let draft = NewsDraft {
            title: "Launch".into(),
            description: "Tug delivered".into(),
            date: "2025-03-04".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(false).unwrap_err().code, "VALIDATION_ERROR");
        assert!(draft.validate(true).is_ok());
    }

    #[wasm_bindgen_test]
    fn news_edit_previews_the_stored_image() {
        let event = NewsEvent {
            id: "n1".into(),
            title: "t".into(),
            description: "d".into(),
            date: "2025-03-04".into(),
            image_path: "uploads/news/a.png".into(),
        };
        let draft = NewsDraft::from_event(&event, Some("http://127.0.0.1:8000"));
        assert_eq!(
            draft.preview_url.as_deref(),
            Some("http://127.0.0.1:8000/uploads/news/a.png")
        );
        assert!(draft.image.is_none());
    }

    #[wasm_bindgen_test]
    fn employee_edit_leaves_password_out_when_blank() {
        let draft = EmployeeDraft::from_employee(&Employee {
            id: 4,
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
        });
        assert!(draft.password.is_empty());
        assert!(draft.validate(true).is_ok());
        assert_eq!(draft.to_update().password_hash, None);

        let with_password = EmployeeDraft {
            password: "n3w".into(),
            ..draft
        };
        assert_eq!(with_password.to_update().password_hash.as_deref(), Some("n3w"));
    }

    #[wasm_bindgen_test]
    fn employee_create_checks_id_and_password() {
        let mut draft = EmployeeDraft {
            id: "abc".into(),
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            password: "pw".into(),
        };
        assert!(draft.validate(false).is_err());
        draft.id = "12".into();
        assert_eq!(draft.to_create().unwrap().id, 12);
        draft.password.clear();
        assert!(draft.validate(false).is_err());
    }

    #[wasm_bindgen_test]
    fn admin_link_only_needs_name_and_url() {
        let draft = AdminLinkDraft {
            name: "Payroll".into(),
            url: "payroll.local/sheet".into(),
        };
        assert!(draft.validate().is_ok());
        let blank = AdminLinkDraft {
            url: "   ".into(),
            ..draft.clone()
        };
        assert!(blank.validate().is_err());
        let padded = AdminLinkDraft {
            url: " https://payroll.example.com ".into(),
            ..draft
        };
        assert_eq!(padded.to_payload().url, "https://payroll.example.com");
    }

    #[wasm_bindgen_test]
    fn delete_prompt_warns_about_cascade() {
        assert_eq!(
            delete_employee_prompt("Ravi"),
            "Delete employee: Ravi? This will also delete all their attendance records and links."
        );
    }
}
