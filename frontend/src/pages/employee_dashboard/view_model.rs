use super::repository::{EmployeeDashboardRepository, MarkDirection};
use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, MarkRequest, MarkResponse};
use crate::state::{
    attendance::{
        derive_today_status, today_record, AttendanceFilter, FilterInputs, FilterKind, TodayStatus,
    },
    links::QuickLink,
};
use crate::utils::{
    geolocation::{current_position, GeoError},
    lifetime::ComponentLifetime,
    time::today_local,
};
use leptos::*;
use std::rc::Rc;

const REFETCH_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkFailure {
    #[error(transparent)]
    Location(#[from] GeoError),
    #[error(transparent)]
    Rejected(#[from] ApiError),
}

impl MarkFailure {
    /// Backend detail or the location reason; the direction's fallback
    /// when both are empty.
    pub fn message(&self, direction: MarkDirection) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            direction.fallback_error().to_string()
        } else {
            text
        }
    }
}

/// The signed-in employee, only when they own the requested dashboard.
pub fn dashboard_owner(stored: Option<Employee>, employee_id: u32) -> Option<Employee> {
    stored.filter(|employee| employee.id == employee_id)
}

/// Progress and outcome of the last mark attempt.
#[derive(Clone, Copy)]
pub struct MarkFeedback {
    pub loading: RwSignal<bool>,
    pub location_status: RwSignal<Option<String>>,
    pub message: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    /// Furthest status confirmed by a mark response in this view.
    pub reached: RwSignal<Option<TodayStatus>>,
}

impl MarkFeedback {
    pub fn new() -> Self {
        Self {
            loading: create_rw_signal(false),
            location_status: create_rw_signal(None),
            message: create_rw_signal(None),
            error: create_rw_signal(None),
            reached: create_rw_signal(None),
        }
    }

    fn start(&self) {
        self.loading.set(true);
        self.message.set(None);
        self.error.set(None);
        self.location_status
            .set(Some("Getting your location...".into()));
    }

    /// Keeps `loading` set until the follow-up refetch has been triggered.
    fn succeed(&self, direction: MarkDirection, response: &MarkResponse) {
        self.location_status.set(None);
        self.reached.set(Some(direction.reached()));
        self.message.set(Some(direction.success_message(response)));
    }

    fn fail(&self, message: String) {
        self.location_status.set(None);
        self.loading.set(false);
        self.error.set(Some(message));
    }

    fn settle(&self) {
        self.loading.set(false);
    }

    /// `fetched` raised to whatever this view has already confirmed.
    pub fn status_over(&self, fetched: TodayStatus) -> TodayStatus {
        match self.reached.get() {
            Some(reached) => fetched.at_least(reached),
            None => fetched,
        }
    }
}

async fn locate_and_mark(
    repo: &EmployeeDashboardRepository,
    direction: MarkDirection,
    employee_id: u32,
    feedback: MarkFeedback,
) -> Result<MarkResponse, MarkFailure> {
    let coords = current_position().await?;
    feedback
        .location_status
        .set(Some("Verifying location...".into()));
    let request = MarkRequest {
        employee_id,
        latitude: coords.latitude,
        longitude: coords.longitude,
    };
    Ok(repo.mark(direction, request).await?)
}

type RecordsResource = Resource<(Option<AttendanceFilter>, u32), Result<Vec<AttendanceRecord>, ApiError>>;

#[derive(Clone, Copy)]
pub struct EmployeeDashboardViewModel {
    pub employee: StoredValue<Employee>,
    pub filter_kind: RwSignal<FilterKind>,
    pub filter_inputs: RwSignal<FilterInputs>,
    pub records: RecordsResource,
    pub today: Resource<u32, Result<Vec<AttendanceRecord>, ApiError>>,
    pub quick_links: Resource<(), Vec<QuickLink>>,
    pub feedback: MarkFeedback,
    reload: RwSignal<u32>,
    repository: StoredValue<EmployeeDashboardRepository>,
    lifetime: StoredValue<ComponentLifetime>,
}

impl EmployeeDashboardViewModel {
    pub fn new(employee: Employee) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = EmployeeDashboardRepository::new_with_client(Rc::new(api));
        let employee_id = employee.id;

        let filter_kind = create_rw_signal(FilterKind::Month);
        let filter_inputs = create_rw_signal(FilterInputs::starting(today_local()));
        let reload = create_rw_signal(0u32);

        let repo = repository.clone();
        let records = create_resource(
            move || (filter_inputs.with(|inputs| inputs.resolve(filter_kind.get())), reload.get()),
            move |(filter, _)| {
                let repo = repo.clone();
                async move {
                    match filter {
                        Some(filter) => repo.attendance(employee_id, &filter).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );

        let repo = repository.clone();
        let today = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repo.clone();
                async move { repo.attendance(employee_id, &AttendanceFilter::Today).await }
            },
        );

        let repo = repository.clone();
        let quick_links = create_local_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move {
                    repo.quick_links(employee_id).await.unwrap_or_else(|err| {
                        log::warn!("failed to load quick links: {}", err);
                        Vec::new()
                    })
                }
            },
        );

        Self {
            employee: store_value(employee),
            filter_kind,
            filter_inputs,
            records,
            today,
            quick_links,
            feedback: MarkFeedback::new(),
            reload,
            repository: store_value(repository),
            lifetime: store_value(ComponentLifetime::bind()),
        }
    }

    pub fn employee_id(&self) -> u32 {
        self.employee.with_value(|employee| employee.id)
    }

    fn today_records(&self) -> Vec<AttendanceRecord> {
        match self.today.get() {
            Some(Ok(records)) => records,
            _ => Vec::new(),
        }
    }

    pub fn today_status(&self) -> TodayStatus {
        let fetched = derive_today_status(&self.today_records(), today_local());
        self.feedback.status_over(fetched)
    }

    pub fn today_record(&self) -> Option<AttendanceRecord> {
        today_record(&self.today_records(), today_local()).cloned()
    }

    /// Label of the active filter; `None` while a custom week is incomplete.
    pub fn filter_label(&self) -> Option<String> {
        let kind = self.filter_kind.get();
        self.filter_inputs
            .with(|inputs| inputs.resolve(kind))
            .map(|filter| filter.label())
    }

    pub fn mark(&self, direction: MarkDirection) {
        let feedback = self.feedback;
        if feedback.loading.get_untracked() {
            return;
        }
        feedback.start();
        let repo = self.repository.get_value();
        let employee_id = self.employee_id();
        let reload = self.reload;
        self.lifetime.with_value(|lifetime| {
            lifetime.spawn(async move {
                match locate_and_mark(&repo, direction, employee_id, feedback).await {
                    Ok(response) => {
                        log::info!("{} marked for employee {}", direction.label(), employee_id);
                        feedback.succeed(direction, &response);
                        gloo_timers::future::TimeoutFuture::new(REFETCH_DELAY_MS).await;
                        reload.update(|n| *n += 1);
                        feedback.settle();
                    }
                    Err(failure) => {
                        log::warn!("{} mark failed: {}", direction.label(), failure);
                        feedback.fail(failure.message(direction));
                    }
                }
            })
        });
    }
}

pub fn use_employee_dashboard_view_model(employee: Employee) -> EmployeeDashboardViewModel {
    EmployeeDashboardViewModel::new(employee)
}
