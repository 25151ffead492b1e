//! Side navigation for the admin console.

use crate::app_lib::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const ACTIVE: &str = "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-purple-700 bg-purple-50 dark:bg-purple-900 dark:text-purple-300";
const IDLE: &str = "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white";

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-1">
                <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                    "Admin"
                </h3>
                <SidebarLink
                    target=paths::ADMIN_LANDING
                    icon="event"
                    label="Events"
                    active=move || pathname().starts_with(paths::ADMIN_LANDING)
                />
                <SidebarLink
                    target=paths::ADMIN_SETTINGS
                    icon="settings"
                    label="Settings"
                    active=move || pathname().starts_with(paths::ADMIN_SETTINGS)
                />
                <SidebarLink
                    target=paths::MEMBER_DASHBOARD
                    icon="dashboard"
                    label="Member view"
                    active=|| false
                />
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    view! {
        <A href=target {..} class=move || if active() { ACTIVE } else { IDLE }>
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
