pub mod history;
pub mod mark_attendance;
pub mod quick_links;
pub mod stats;

pub use history::AttendanceHistory;
pub use mark_attendance::MarkAttendanceSection;
pub use quick_links::QuickLinksSection;
pub use stats::StatsCards;

pub(crate) const SECTION_CLASS: &str = "bg-surface-elevated shadow rounded-lg p-6 space-y-4";
