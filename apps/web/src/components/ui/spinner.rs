use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading");

    view! {
        <div class="inline-flex items-center gap-3" role="status" aria-live="polite">
            <div
                class="h-7 w-7 animate-spin rounded-full border-4 border-purple-200 border-t-purple-700"
                aria-hidden="true"
            ></div>
            <span class="sr-only">{label}</span>
        </div>
    }
}
