use crate::components::layout::AppShell;
use crate::features::auth::{Guard, policy::Shell};
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Shell for `/app/*`. Anonymous visitors are sent to the login page.
#[component]
pub fn MemberLayout() -> impl IntoView {
    view! {
        <AppShell>
            <Guard shell=Shell::Member>
                <Outlet />
            </Guard>
        </AppShell>
    }
}
