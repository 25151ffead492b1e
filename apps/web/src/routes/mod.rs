//! Route table. Every subtree goes through a shell layout so guard policy is
//! applied once per shell rather than per page.

mod admin;
mod dashboard;
mod home;
mod login;
mod not_found;
mod register;
mod settings;

pub(crate) use admin::{AdminEventsPage, AdminSettingsPage};
pub(crate) use dashboard::DashboardPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use settings::SettingsPage;

use crate::app_lib::paths;
use crate::components::{AdminLayout, MemberLayout, PublicLayout};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <ParentRoute path=path!("") view=PublicLayout>
                <Route path=path!("") view=HomePage />
                <Route path=path!("auth/login") view=LoginPage />
                <Route path=path!("auth/register") view=RegisterPage />
            </ParentRoute>
            <ParentRoute path=path!("/app") view=MemberLayout>
                <Route path=path!("dashboard") view=DashboardPage />
                <Route path=path!("settings") view=SettingsPage />
                <Route
                    path=path!("")
                    view=|| view! { <Redirect path=paths::MEMBER_DASHBOARD /> }
                />
            </ParentRoute>
            <ParentRoute path=path!("/admin") view=AdminLayout>
                <Route path=path!("events") view=AdminEventsPage />
                <Route path=path!("settings") view=AdminSettingsPage />
                <Route
                    path=path!("")
                    view=|| view! { <Redirect path=paths::ADMIN_LANDING /> }
                />
            </ParentRoute>
        </Routes>
    }
}
