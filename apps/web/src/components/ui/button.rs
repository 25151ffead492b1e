use leptos::prelude::*;

const PRIMARY: &str = "text-white bg-purple-700 hover:bg-purple-800 focus:ring-4 focus:outline-none focus:ring-purple-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-purple-600 dark:hover:bg-purple-700 dark:focus:ring-purple-800";

/// Form submit button. Stays disabled while its action is pending so a form
/// cannot post twice.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=PRIMARY
            class:cursor-wait=move || disabled.get()
            class:opacity-60=move || disabled.get()
            disabled=move || disabled.get()
            aria-busy=move || disabled.get().to_string()
        >
            {children()}
        </button>
    }
}
