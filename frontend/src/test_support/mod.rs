#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, Employee};
    use crate::state::navigation::{provide_navigator, DeepLink, MemoryHistory, Navigator};
    use crate::state::session::{provide_session, Role, Session};
    use chrono::NaiveDate;
    use leptos::*;
    use std::rc::Rc;

    pub fn employee(id: u32) -> Employee {
        Employee {
            id,
            name: "Asha Menon".into(),
            email: "asha@example.com".into(),
        }
    }

    pub fn record(date: NaiveDate, in_hm: Option<(u32, u32)>, out_hm: Option<(u32, u32)>) -> AttendanceRecord {
        let at = |(h, m): (u32, u32)| date.and_hms_opt(h, m, 0).unwrap();
        AttendanceRecord {
            id: Some(format!("rec-{}", date)),
            employee_id: 7,
            date,
            in_time: in_hm.map(at),
            out_time: out_hm.map(at),
            status: Some("present".into()),
            hours_worked: 0.0,
            in_time_display: None,
            out_time_display: None,
        }
    }

    pub fn provide_test_navigator() -> (Navigator, Rc<MemoryHistory>) {
        let history = Rc::new(MemoryHistory::new());
        let navigator = Navigator::bootstrap(history.clone(), DeepLink::default());
        provide_navigator(navigator.clone());
        (navigator, history)
    }

    pub fn provide_signed_in(role: Role) -> Session {
        let session = Session::in_memory();
        session.begin(role, "test-token").unwrap();
        if role == Role::Employee {
            session.remember_employee(&employee(7)).unwrap();
        }
        provide_session(session.clone());
        session
    }
}
