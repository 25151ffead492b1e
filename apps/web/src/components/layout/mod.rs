//! Layout components shared across routes. Each shell pairs the app chrome with
//! a session guard.

mod admin_layout;
mod app_shell;
mod member_layout;
mod public_layout;
mod sidebar;

pub(crate) use admin_layout::AdminLayout;
pub(crate) use app_shell::AppShell;
pub(crate) use member_layout::MemberLayout;
pub(crate) use public_layout::PublicLayout;
pub(crate) use sidebar::Sidebar;
