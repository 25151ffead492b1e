//! Navigation targets shared by the session controller, the HTTP client and the
//! route table. Keep these in sync with `routes::AppRoutes`.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const MEMBER_DASHBOARD: &str = "/app/dashboard";
pub const MEMBER_SETTINGS: &str = "/app/settings";
pub const ADMIN_LANDING: &str = "/admin/events";
/// Admin route rendered without the admin header.
pub const ADMIN_SETTINGS: &str = "/admin/settings";
