use crate::components::layout::{AppShell, Sidebar};
use crate::features::auth::{
    Guard,
    policy::{Shell, shows_admin_header},
    state::use_auth,
};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

/// Shell for `/admin/*`. Members are sent to their dashboard, anonymous
/// visitors to the login page. Nothing below renders until the session has
/// resolved an admin.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let show_header = move || shows_admin_header(&location.pathname.get());
    let admin_name = move || {
        auth.session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

    view! {
        <AppShell>
            <Guard shell=Shell::Admin>
                <div class="flex min-h-[70vh]">
                    <Sidebar />
                    <section class="flex-1 px-6">
                        <Show when=show_header>
                            <div class="mb-6 border-b border-gray-200 dark:border-gray-800 pb-4">
                                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                    "Admin Console"
                                </h1>
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "Signed in as " {admin_name}
                                </p>
                            </div>
                        </Show>
                        <Outlet />
                    </section>
                </div>
            </Guard>
        </AppShell>
    }
}
