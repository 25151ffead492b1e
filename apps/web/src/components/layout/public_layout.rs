use crate::components::layout::AppShell;
use crate::features::auth::{Guard, policy::Shell};
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Shell for pages anyone may see. The guard always renders here; it is kept so
/// every shell goes through the same policy.
#[component]
pub fn PublicLayout() -> impl IntoView {
    view! {
        <AppShell>
            <Guard shell=Shell::Public>
                <Outlet />
            </Guard>
        </AppShell>
    }
}
