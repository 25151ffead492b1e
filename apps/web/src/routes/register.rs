use crate::app_lib::{AppError, paths};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{client, state::use_auth, types::RegisterRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

/// Account creation. The server emails a verification link, so success ends
/// on a message rather than a session.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        let api = auth.client();
        async move { client::register(&api, &request).await }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        register_action.dispatch(RegisterRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    let outcome = move || {
        register_action
            .value()
            .get()
            .map(|result: Result<String, AppError>| match result {
                Ok(message) => view! { <Alert kind=AlertKind::Success message=message /> },
                Err(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> },
            })
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">"Join SheCodes"</h1>
            <div class="mb-5">
                <label class=LABEL for="name">"Full name"</label>
                <input
                    id="name"
                    type="text"
                    class=INPUT
                    autocomplete="name"
                    required
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    class=INPUT
                    autocomplete="email"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    class=INPUT
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=register_action.pending()>
                "Create account"
            </Button>
            <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                "Already a member? "
                <A href=paths::LOGIN {..} class="text-purple-700 hover:underline">
                    "Sign in"
                </A>
            </p>
            {move || {
                register_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            <div class="mt-4">{outcome}</div>
        </form>
    }
}
