use leptos::*;

use crate::api::Employee;

/// Employee picked on the portal page, carried to the login and
/// forgot-password screens.
#[derive(Clone, Copy)]
pub struct PortalSelection(pub RwSignal<Option<Employee>>);

impl PortalSelection {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn select(&self, employee: Employee) {
        self.0.set(Some(employee));
    }

    pub fn get(&self) -> Option<Employee> {
        self.0.get()
    }
}

impl Default for PortalSelection {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_portal_selection() -> PortalSelection {
    use_context::<PortalSelection>().unwrap_or_else(|| {
        let selection = PortalSelection::new();
        provide_context(selection);
        selection
    })
}
