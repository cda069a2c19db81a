pub mod about;
pub mod admin;
pub mod admin_login;
pub mod careers;
pub mod contact;
pub mod employee_dashboard;
pub mod employee_login;
pub mod employee_portal;
pub mod forgot_password;
pub mod home;
pub mod news;
pub mod not_found;
pub mod portal;
pub mod reset_password;
pub mod services;

pub use about::AboutPage;
pub use admin::AdminDashboardPage;
pub use admin_login::AdminLoginPage;
pub use careers::CareersPage;
pub use contact::ContactPage;
pub use employee_dashboard::EmployeeDashboardPage;
pub use employee_login::EmployeeLoginPage;
pub use employee_portal::EmployeePortalPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use news::NewsPage;
pub use not_found::NotFoundPage;
pub use portal::PortalPage;
pub use reset_password::ResetPasswordPage;
pub use services::ServicesPage;
