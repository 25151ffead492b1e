//! Member landing page. Rendered only inside the member shell, so the session
//! always carries a user here.

use crate::app_lib::paths;
use crate::features::auth::{state::use_auth, types::User};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    move || {
        auth.session
            .get()
            .user
            .map(|user| view! { <MemberCard user=user /> })
    }
}

#[component]
fn MemberCard(user: User) -> impl IntoView {
    let details = [
        ("Email", Some(user.email)),
        ("Occupation", user.occupation),
        ("LinkedIn", user.linkedin),
    ];

    view! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                "Welcome back, " {user.name}
            </h1>
            <span class="mt-2 inline-block rounded-full bg-purple-100 px-3 py-1 text-xs font-semibold text-purple-800">
                {user.role.label()}
            </span>
            {user
                .about_me
                .map(|about| view! { <p class="mt-6 text-gray-600 dark:text-gray-300">{about}</p> })}
            <dl class="mt-6 divide-y divide-gray-100 dark:divide-gray-800">
                {details
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|value| (label, value)))
                    .map(|(label, value)| {
                        view! {
                            <div class="py-3 grid grid-cols-3 gap-4">
                                <dt class="text-sm font-medium text-gray-500">{label}</dt>
                                <dd class="col-span-2 text-sm text-gray-900 dark:text-white">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <A
                href=paths::MEMBER_SETTINGS
                {..}
                class="mt-6 inline-flex items-center text-sm font-medium text-purple-700 hover:underline"
            >
                <span class="material-symbols-outlined mr-2 text-base">"edit"</span>
                "Edit profile"
            </A>
        </div>
    }
}
