//! Inline status banners for form outcomes. Messages come from `AppError` or
//! fixed strings and never carry token or password material.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-rose-200 bg-rose-50 px-4 py-3 text-sm text-rose-700 dark:border-rose-400 dark:bg-rose-900/30 dark:text-rose-200"
            }
            AlertKind::Success => {
                "rounded-lg border border-purple-200 bg-purple-50 px-4 py-3 text-sm text-purple-800 dark:border-purple-400 dark:bg-purple-900/30 dark:text-purple-200"
            }
        }
    }

    /// Errors interrupt screen readers; confirmations wait their turn.
    fn role(self) -> &'static str {
        match self {
            AlertKind::Error => "alert",
            AlertKind::Success => "status",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=kind.class() role=kind.role()>
            {message}
        </div>
    }
}
