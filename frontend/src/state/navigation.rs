use leptos::*;
use percent_encoding::percent_decode_str;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsValue;

use crate::utils::storage as storage_utils;

const EMPLOYEE_DASHBOARD_PREFIX: &str = "employee-dashboard-";

/// Every screen the app can show. The current page is the single source of
/// truth for what `App` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
    Portal,
    AdminLogin,
    ForgotPassword,
    ResetPassword,
    AdminDashboard,
    EmployeePortal,
    EmployeeLogin,
    EmployeeForgotPassword,
    EmployeeResetPassword,
    EmployeeDashboard(u32),
    News,
    Careers,
    NotFound,
}

impl Page {
    pub fn slug(&self) -> String {
        let fixed = match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Contact => "contact",
            Page::Portal => "portal",
            Page::AdminLogin => "admin-login",
            Page::ForgotPassword => "forgot-password",
            Page::ResetPassword => "reset-password",
            Page::AdminDashboard => "admin-dashboard",
            Page::EmployeePortal => "employee-portal",
            Page::EmployeeLogin => "employee-login",
            Page::EmployeeForgotPassword => "employee-forgot-password",
            Page::EmployeeResetPassword => "employee-reset-password",
            Page::EmployeeDashboard(id) => return format!("{}{}", EMPLOYEE_DASHBOARD_PREFIX, id),
            Page::News => "news",
            Page::Careers => "careers",
            Page::NotFound => "not-found",
        };
        fixed.to_string()
    }

    /// Unknown slugs map to `NotFound` rather than silently falling back.
    pub fn parse(slug: &str) -> Page {
        match slug {
            "home" => Page::Home,
            "about" => Page::About,
            "services" => Page::Services,
            "contact" => Page::Contact,
            "portal" => Page::Portal,
            "admin-login" => Page::AdminLogin,
            "forgot-password" => Page::ForgotPassword,
            "reset-password" => Page::ResetPassword,
            "admin-dashboard" => Page::AdminDashboard,
            "employee-portal" => Page::EmployeePortal,
            "employee-login" => Page::EmployeeLogin,
            "employee-forgot-password" => Page::EmployeeForgotPassword,
            "employee-reset-password" => Page::EmployeeResetPassword,
            "news" => Page::News,
            "careers" => Page::Careers,
            other => other
                .strip_prefix(EMPLOYEE_DASHBOARD_PREFIX)
                .and_then(|id| id.parse().ok())
                .map(Page::EmployeeDashboard)
                .unwrap_or(Page::NotFound),
        }
    }

    /// History entries without a page (the initial entry) restore home.
    pub fn from_history_state(state: Option<&str>) -> Page {
        state.map(Page::parse).unwrap_or(Page::Home)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Magmarine",
            Page::About => "About Us",
            Page::Services => "Services",
            Page::Contact => "Contact",
            Page::Portal => "Portal",
            Page::AdminLogin => "Admin Login",
            Page::ForgotPassword | Page::EmployeeForgotPassword => "Forgot Password",
            Page::ResetPassword | Page::EmployeeResetPassword => "Reset Password",
            Page::AdminDashboard => "Admin Dashboard",
            Page::EmployeePortal => "Employee Portal",
            Page::EmployeeLogin => "Employee Login",
            Page::EmployeeDashboard(_) => "Employee Dashboard",
            Page::News => "News & Events",
            Page::Careers => "Careers",
            Page::NotFound => "Page Not Found",
        }
    }
}

/// Query parameters captured at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    pub token: Option<String>,
    pub kind: Option<String>,
}

impl DeepLink {
    pub fn parse(query: &str) -> Self {
        let mut link = DeepLink::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match key {
                "token" if !value.is_empty() => link.token = Some(value),
                "type" => link.kind = Some(value),
                _ => {}
            }
        }
        link
    }

    pub fn from_location() -> Self {
        storage_utils::window()
            .ok()
            .and_then(|window| window.location().search().ok())
            .map(|search| Self::parse(&search))
            .unwrap_or_default()
    }

    pub fn initial_page(&self) -> Page {
        match (&self.token, self.kind.as_deref()) {
            (Some(_), Some("employee")) => Page::EmployeeResetPassword,
            (Some(_), _) => Page::ResetPassword,
            (None, _) => Page::Home,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

pub trait HistoryBackend {
    fn push_page(&self, page: &Page);
    /// Replaces the current entry with `page` and drops the query string.
    fn clear_query(&self, page: &Page);
    fn scroll_to_top(&self);
}

pub struct BrowserHistory;

fn history_state(page: &Page) -> JsValue {
    let state = js_sys::Object::new();
    if js_sys::Reflect::set(&state, &"page".into(), &page.slug().into()).is_err() {
        log::warn!("failed to build history state for {}", page.slug());
    }
    state.into()
}

/// Reads `page` back out of a `popstate` event's state object.
pub fn page_from_state(state: &JsValue) -> Option<String> {
    if state.is_undefined() || state.is_null() {
        return None;
    }
    js_sys::Reflect::get(state, &"page".into())
        .ok()
        .and_then(|value| value.as_string())
}

impl HistoryBackend for BrowserHistory {
    fn push_page(&self, page: &Page) {
        let Ok(history) = storage_utils::window().and_then(|w| {
            w.history().map_err(|_| "No history".to_string())
        }) else {
            return;
        };
        let url = format!("?page={}", page.slug());
        if history
            .push_state_with_url(&history_state(page), "", Some(&url))
            .is_err()
        {
            log::warn!("failed to push history entry for {}", page.slug());
        }
    }

    fn clear_query(&self, page: &Page) {
        let Ok(window) = storage_utils::window() else {
            return;
        };
        let (Ok(history), Ok(path)) = (window.history(), window.location().pathname()) else {
            return;
        };
        if history
            .replace_state_with_url(&history_state(page), "", Some(&path))
            .is_err()
        {
            log::warn!("failed to clear query for {}", page.slug());
        }
    }

    fn scroll_to_top(&self) {
        if let Ok(window) = storage_utils::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// In-memory history with back/forward, for tests and non-browser hosts.
#[derive(Default)]
pub struct MemoryHistory {
    entries: RefCell<Vec<Option<Page>>>,
    index: RefCell<usize>,
    scrolls: RefCell<usize>,
    query_cleared: RefCell<bool>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(vec![None]),
            ..Default::default()
        }
    }

    /// Moves back one entry and returns the state a `popstate` would carry.
    pub fn back(&self) -> Option<Option<String>> {
        let mut index = self.index.borrow_mut();
        if *index == 0 {
            return None;
        }
        *index -= 1;
        Some(self.entries.borrow()[*index].map(|page| page.slug()))
    }

    pub fn forward(&self) -> Option<Option<String>> {
        let mut index = self.index.borrow_mut();
        if *index + 1 >= self.entries.borrow().len() {
            return None;
        }
        *index += 1;
        Some(self.entries.borrow()[*index].map(|page| page.slug()))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn scroll_count(&self) -> usize {
        *self.scrolls.borrow()
    }

    pub fn query_cleared(&self) -> bool {
        *self.query_cleared.borrow()
    }
}

impl HistoryBackend for MemoryHistory {
    fn push_page(&self, page: &Page) {
        let mut entries = self.entries.borrow_mut();
        let mut index = self.index.borrow_mut();
        entries.truncate(*index + 1);
        entries.push(Some(*page));
        *index = entries.len() - 1;
    }

    fn clear_query(&self, page: &Page) {
        let index = *self.index.borrow();
        if let Some(entry) = self.entries.borrow_mut().get_mut(index) {
            *entry = Some(*page);
        }
        *self.query_cleared.borrow_mut() = true;
    }

    fn scroll_to_top(&self) {
        *self.scrolls.borrow_mut() += 1;
    }
}

/// Page-state machine shared through context. All transitions go through
/// `navigate` (user action) or `on_pop_state` (browser back/forward).
#[derive(Clone)]
pub struct Navigator {
    page: RwSignal<Page>,
    reset_token: RwSignal<Option<String>>,
    history: Rc<dyn HistoryBackend>,
}

impl Navigator {
    pub fn bootstrap(history: Rc<dyn HistoryBackend>, deep_link: DeepLink) -> Self {
        let page = deep_link.initial_page();
        if deep_link.token.is_some() {
            history.clear_query(&page);
        }
        Self {
            page: create_rw_signal(page),
            reset_token: create_rw_signal(deep_link.token),
            history,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::info!("navigate: {}", page.slug());
        self.page.set(page);
        self.history.push_page(&page);
        self.history.scroll_to_top();
    }

    pub fn on_pop_state(&self, state: Option<String>) {
        let page = Page::from_history_state(state.as_deref());
        log::debug!("popstate: {}", page.slug());
        self.page.set(page);
        self.history.scroll_to_top();
    }

    pub fn current(&self) -> Page {
        self.page.get()
    }

    pub fn page(&self) -> Signal<Page> {
        self.page.into()
    }

    pub fn reset_token(&self) -> Option<String> {
        self.reset_token.get()
    }

    pub fn scroll_to_top(&self) {
        self.history.scroll_to_top();
    }
}

pub fn provide_navigator(navigator: Navigator) {
    provide_context(navigator);
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
