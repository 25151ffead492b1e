use crate::components::Spinner;
use crate::features::auth::{
    policy::{GuardOutcome, Shell, evaluate},
    state::use_auth,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders `children` only when the session satisfies `shell`.
#[component]
pub fn Guard(shell: Shell, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let outcome = Memo::new(move |_| evaluate(shell, &auth.session.get()));

    Effect::new(move |_| {
        if let GuardOutcome::Redirect(target) = outcome.get() {
            // UX-only guard; real access control must live on the API.
            navigate(target, Default::default());
        }
    });

    move || match outcome.get() {
        GuardOutcome::Render => children(),
        GuardOutcome::Loading | GuardOutcome::Redirect(_) => view! {
            <div class="flex justify-center items-center min-h-[50vh]">
                <Spinner label="Checking your session" />
            </div>
        }
        .into_any(),
    }
}
