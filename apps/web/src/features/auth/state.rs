//! Leptos bridge for the session. The provider owns the one `SessionController`
//! for the page, mirrors its snapshots into a signal and starts hydration on
//! mount. Views read the signal; mutations go through the controller so that
//! ordering stays with the controller and not with the render cycle.

use crate::app_lib::{
    ApiClient,
    api::GlooTransport,
    config::AppConfig,
    navigation::{BrowserNavigator, Navigator},
    storage::LocalTokenStore,
};
use crate::features::auth::session::{SessionController, SessionSnapshot};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

#[derive(Clone)]
struct Handles {
    controller: SessionController,
    client: ApiClient,
}

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<SessionSnapshot>,
    pub is_loading: Signal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
    handles: StoredValue<Handles, LocalStorage>,
}

impl AuthContext {
    fn new(session: RwSignal<SessionSnapshot>, handles: Handles) -> Self {
        Self {
            session,
            is_loading: Signal::derive(move || session.get().is_loading()),
            is_authenticated: Signal::derive(move || session.get().is_authenticated()),
            is_admin: Signal::derive(move || session.get().is_admin()),
            handles: StoredValue::new_local(handles),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.handles.with_value(|handles| handles.client.clone())
    }

    pub fn controller(&self) -> SessionController {
        self.handles.with_value(|handles| handles.controller.clone())
    }

    /// Hands a freshly issued token to the session. Landing navigation follows
    /// once the token resolves.
    pub fn login(&self, token: String) {
        let controller = self.controller();
        spawn_local(async move {
            controller.login(&token).await;
        });
    }

    pub fn logout(&self) {
        self.controller().logout();
    }

    pub fn refetch(&self) {
        let controller = self.controller();
        spawn_local(async move {
            controller.refetch().await;
        });
    }
}

/// Soft navigation through the router, hard navigation through the window.
struct RouterNavigator {
    navigate: Box<dyn Fn(&str)>,
    browser: BrowserNavigator,
}

impl Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        self.browser.current_path()
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }

    fn hard_navigate(&self, path: &str) {
        self.browser.hard_navigate(path);
    }
}

/// Provides auth context and starts session hydration once on mount. Must be
/// rendered inside the router.
#[component]
pub fn AuthProvider(config: AppConfig, children: Children) -> impl IntoView {
    let navigate = use_navigate();
    let navigator = RouterNavigator {
        navigate: Box::new(move |path: &str| navigate(path, Default::default())),
        browser: BrowserNavigator,
    };

    let client = ApiClient::new(
        config.api_base_url,
        Rc::new(GlooTransport),
        Rc::new(LocalTokenStore::new(config.token_storage_key)),
        Rc::new(navigator),
    );
    let controller = SessionController::new(client.clone());

    let session = RwSignal::new(controller.snapshot());
    // Lives as long as the page; never unsubscribed.
    controller.subscribe(move |snapshot| session.set(snapshot.clone()));

    let auth = AuthContext::new(
        session,
        Handles {
            controller: controller.clone(),
            client,
        },
    );
    provide_context(auth);

    spawn_local(async move {
        controller.start().await;
    });

    view! { {children()} }
}

/// Returns the auth context installed by [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
