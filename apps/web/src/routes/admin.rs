//! Admin console pages. Both render inside the admin shell, which has already
//! proven the visitor is an admin.

use crate::features::auth::state::use_auth;
use leptos::prelude::*;

/// Admin landing page.
#[component]
pub fn AdminEventsPage() -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 dark:border-gray-700 p-6">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Events"</h2>
            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                "No events scheduled yet."
            </p>
        </div>
    }
}

/// Settings carry their own heading; the console header is hidden here.
#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let auth = use_auth();
    let email = move || {
        auth.session
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };

    view! {
        <div>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Settings"</h1>
            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                "Signed in as " {email}
            </p>
            <button
                type="button"
                class="mt-6 text-sm font-medium text-purple-700 hover:underline"
                on:click=move |_| auth.refetch()
            >
                "Reload my account"
            </button>
        </div>
    }
}
