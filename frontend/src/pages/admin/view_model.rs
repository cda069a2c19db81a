use super::repository::AdminRepository;
use crate::{
    api::{ApiClient, ApiError},
    state::crud::Submission,
    utils::{lifetime::ComponentLifetime, notify},
};
use leptos::*;
use std::{future::Future, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    News,
    Careers,
    Employees,
    Attendance,
    MyLinks,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::News,
        AdminTab::Careers,
        AdminTab::Employees,
        AdminTab::Attendance,
        AdminTab::MyLinks,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            AdminTab::News => "📰",
            AdminTab::Careers => "💼",
            AdminTab::Employees => "👥",
            AdminTab::Attendance => "📊",
            AdminTab::MyLinks => "📎",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::News => "News & Events",
            AdminTab::Careers => "Careers",
            AdminTab::Employees => "Employees",
            AdminTab::Attendance => "Attendance",
            AdminTab::MyLinks => "My Links",
        }
    }
}

/// Whether a finished mutation deserves the success alert.
pub trait Announce {
    fn announce(&self) -> bool {
        true
    }
}

impl Announce for () {}

impl Announce for Submission {
    fn announce(&self) -> bool {
        *self == Submission::Saved
    }
}

/// Text of the alert shown after a mutation. Form checks that never reached
/// the backend are shown as-is; backend failures are prefixed with the action.
/// Cancelled work and skipped saves stay silent.
pub fn outcome_message<T: Announce>(
    result: &Result<T, ApiError>,
    action: &str,
    success: &str,
) -> Option<String> {
    match result {
        Ok(done) if done.announce() => Some(success.to_string()),
        Ok(_) => None,
        Err(err) if err.is_cancelled() => None,
        Err(err) if err.code == "VALIDATION_ERROR" && err.status.is_none() => Some(err.error.clone()),
        Err(err) => Some(notify::failure_message(action, &err.error)),
    }
}

/// Runs `work` under `lifetime` and reports its outcome with an alert.
pub fn run_and_report<F, T>(lifetime: &ComponentLifetime, work: F, action: &'static str, success: String)
where
    F: Future<Output = Result<T, ApiError>> + 'static,
    T: Announce + 'static,
{
    lifetime.spawn(async move {
        let result = work.await;
        if let Err(err) = &result {
            log::warn!("admin: {} failed: {}", action, err);
        }
        if let Some(message) = outcome_message(&result, action, &success) {
            notify::alert(&message);
        }
    });
}

/// Logs a failed background load; the tab keeps whatever it showed before.
pub fn log_load_failure(what: &str, result: Result<(), ApiError>) {
    if let Err(err) = result {
        if !err.is_cancelled() {
            log::error!("admin: error loading {}: {}", what, err);
        }
    }
}

#[derive(Clone)]
pub struct AdminViewModel {
    pub tab: RwSignal<AdminTab>,
    pub repository: AdminRepository,
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AdminViewModel {
        tab: create_rw_signal(AdminTab::News),
        repository: AdminRepository::new_with_client(Rc::new(api)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failures_carry_the_detail() {
        let err = ApiError::from_status(400, r#"{"detail":"Employee ID already exists"}"#);
        assert_eq!(
            outcome_message(&Err::<(), _>(err), "save employee", "Employee added successfully!").as_deref(),
            Some("Failed to save employee: Employee ID already exists")
        );
    }

    #[test]
    fn validation_and_cancellation_are_reported_differently() {
        let invalid: Result<(), _> = Err(ApiError::validation("Name and email are required."));
        assert_eq!(
            outcome_message(&invalid, "save employee", "ok").as_deref(),
            Some("Name and email are required.")
        );
        assert_eq!(outcome_message(&Err::<(), _>(ApiError::cancelled()), "x", "ok"), None);
        assert_eq!(
            outcome_message(&Ok(()), "x", "Link added successfully!").as_deref(),
            Some("Link added successfully!")
        );
    }

    #[test]
    fn skipped_save_raises_no_alert() {
        assert_eq!(outcome_message(&Ok(Submission::Busy), "save career", "Saved!"), None);
        assert_eq!(
            outcome_message(&Ok(Submission::Saved), "save career", "Saved!").as_deref(),
            Some("Saved!")
        );
    }

    #[test]
    fn tabs_keep_their_order() {
        let labels: Vec<_> = AdminTab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(
            labels,
            vec!["News & Events", "Careers", "Employees", "Attendance", "My Links"]
        );
    }
}
