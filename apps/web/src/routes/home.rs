//! Public landing page.

use crate::app_lib::paths;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <section class="max-w-3xl mx-auto text-center py-16">
            <h1 class="text-4xl font-extrabold tracking-tight text-gray-900 dark:text-white md:text-5xl">
                "SheCodes Society"
            </h1>
            <p class="mt-6 text-lg text-gray-500 dark:text-gray-400">
                "Workshops, mentoring and a community of women building software together."
            </p>
            <div class="mt-10 flex justify-center gap-4">
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=|| {
                        view! {
                            <A
                                href=paths::REGISTER
                                {..}
                                class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-purple-700 rounded-lg hover:bg-purple-800 focus:ring-4 focus:outline-none focus:ring-purple-300"
                            >
                                "Become a member"
                            </A>
                            <A
                                href=paths::LOGIN
                                {..}
                                class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100"
                            >
                                "Sign in"
                            </A>
                        }
                    }
                >
                    <A
                        href=paths::MEMBER_DASHBOARD
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-purple-700 rounded-lg hover:bg-purple-800 focus:ring-4 focus:outline-none focus:ring-purple-300"
                    >
                        "Go to your dashboard"
                    </A>
                </Show>
            </div>
        </section>
    }
}
