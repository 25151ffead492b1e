//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup and the mobile menu toggle so routes can focus on content.
//! Links here are convenience only; the API authorizes every request.

use crate::app_lib::paths;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-purple-700 md:p-0 dark:text-white md:dark:hover:text-purple-400 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;
    let home_target = move || {
        let target = if auth.is_admin.get() {
            paths::ADMIN_LANDING
        } else {
            paths::MEMBER_DASHBOARD
        };
        target.to_string()
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="SheCodes" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "SheCodes"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        // Session links stay hidden until the stored token is resolved.
                        <ul
                            class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700"
                            class:invisible=move || auth.is_loading.get()
                        >
                            <Show
                                when=move || auth.is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <Show
                                                when=on_login
                                                fallback=move || {
                                                    view! {
                                                        <A
                                                            href=paths::LOGIN
                                                            {..}
                                                            class=NAV_LINK
                                                            on:click=move |_| set_menu_open.set(false)
                                                        >
                                                            "Sign In"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A
                                                    href=paths::REGISTER
                                                    {..}
                                                    class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Join"
                                                </A>
                                            </Show>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href=home_target
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {move || if auth.is_admin.get() { "Admin" } else { "Dashboard" }}
                                    </A>
                                </li>
                                <li>
                                    <button
                                        type="button"
                                        class=NAV_LINK
                                        on:click=move |_| {
                                            set_menu_open.set(false);
                                            auth.logout();
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
