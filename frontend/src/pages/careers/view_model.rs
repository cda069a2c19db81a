use super::{repository::CareersRepository, CAREERS_EMAIL};
use crate::api::{ApiClient, ApiError, Job, MessageResponse};
use crate::utils::notify;
use leptos::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::rc::Rc;

pub fn application_received(job_title: &str) -> String {
    format!(
        "Application received! Please send your resume to {} with the subject: Application for {}",
        CAREERS_EMAIL, job_title
    )
}

/// `mailto:` fallback used when the application endpoint is unreachable.
pub fn application_mailto(job_title: &str) -> String {
    let subject = format!("Application for {}", job_title);
    let body = format!(
        "Dear Hiring Team,\n\nI am writing to express my interest in the {} position at Mag Marine Services.\n\nPlease find my resume attached.\n\nBest regards,",
        job_title
    );
    format!(
        "mailto:{}?subject={}&body={}",
        CAREERS_EMAIL,
        utf8_percent_encode(&subject, NON_ALPHANUMERIC),
        utf8_percent_encode(&body, NON_ALPHANUMERIC)
    )
}

#[derive(Clone)]
pub struct CareersViewModel {
    pub jobs: Resource<(), Result<Vec<Job>, ApiError>>,
    pub apply_action: Action<String, (String, Result<MessageResponse, ApiError>)>,
}

pub fn use_careers_view_model() -> CareersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CareersRepository::new_with_client(Rc::new(api));

    let repo_jobs = repository.clone();
    let jobs = create_resource(
        || (),
        move |_| {
            let repo = repo_jobs.clone();
            async move { repo.list_jobs().await }
        },
    );

    let apply_action = create_action(move |job_title: &String| {
        let repo = repository.clone();
        let job_title = job_title.clone();
        async move {
            let result = repo.apply(job_title.clone()).await;
            (job_title, result)
        }
    });

    create_effect(move |_| {
        if let Some((job_title, result)) = apply_action.value().get() {
            match result {
                Ok(_) => notify::alert(&application_received(&job_title)),
                Err(err) => {
                    log::warn!("application for {} failed: {}", job_title, err);
                    notify::open_mail_client(&application_mailto(&job_title));
                }
            }
        }
    });

    CareersViewModel { jobs, apply_action }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = application_mailto("Commercial Diver");
        assert!(href.starts_with("mailto:careers@magmarine.in?subject=Application%20for%20Commercial%20Diver&body="));
        assert!(href.contains("Dear%20Hiring%20Team"));
        assert!(!href.contains('\n'));
    }

    #[test]
    fn confirmation_names_the_role() {
        assert!(application_received("Welder").ends_with("Application for Welder"));
    }
}
