use crate::app_lib::config::AppConfig;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // The provider navigates, so it has to live inside the router.
    view! {
        <Router>
            <AuthProvider config=config>
                <AppRoutes />
            </AuthProvider>
        </Router>
    }
}
