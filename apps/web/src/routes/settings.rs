//! Profile editing for the signed-in member.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::{
    auth::{state::use_auth, types::User},
    me::{client, types::ProfileUpdate},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let current_name = auth
        .session
        .get_untracked()
        .user
        .map(|user| user.name)
        .unwrap_or_default();
    let (name, set_name) = signal(current_name);

    let save_action = Action::new_local(move |update: &ProfileUpdate| {
        let update = update.clone();
        let api = auth.client();
        let session = auth.controller();
        async move { client::update_profile(&api, &session, &update).await }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        save_action.dispatch(ProfileUpdate {
            name: name.get_untracked(),
        });
    };

    let outcome = move || {
        save_action
            .value()
            .get()
            .map(|result: Result<User, AppError>| match result {
                Ok(_) => view! { <Alert kind=AlertKind::Success message="Profile saved." /> },
                Err(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> },
            })
    };

    view! {
        <form class="max-w-sm" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">"Profile"</h1>
            <div class="mb-5">
                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="name">
                    "Display name"
                </label>
                <input
                    id="name"
                    type="text"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=save_action.pending()>
                "Save"
            </Button>
            {move || {
                save_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            <div class="mt-4">{outcome}</div>
        </form>
    }
}
