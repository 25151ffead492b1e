use crate::app_lib::{AppError, paths};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{client, state::use_auth, types::LoginForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |form: &LoginForm| {
        let form = form.clone();
        let api = auth.client();
        async move { client::login_with_password(&api, &form).await }
    });

    // The session picks the landing page once the token resolves.
    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(token) => auth.login(token),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let form = LoginForm {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if form.email.is_empty() || form.password.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(form);
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">"Sign in"</h1>
            <div class="mb-5">
                <label class=LABEL for="email">"Your email"</label>
                <input
                    id="email"
                    type="email"
                    class=INPUT
                    autocomplete="email"
                    placeholder="name@example.com"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=LABEL for="password">"Your password"</label>
                <input
                    id="password"
                    type="password"
                    class=INPUT
                    autocomplete="current-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=login_action.pending()>
                "Sign in"
            </Button>
            <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                "New here? "
                <A href=paths::REGISTER {..} class="text-purple-700 hover:underline">
                    "Create an account"
                </A>
            </p>
            {move || {
                login_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
