//! Application Context
//!
//! Error routing and auth guards shared by every page.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use timesheet_core::{ErrorCode, ServiceError};

use crate::browser;
use crate::store::{store_logout, store_show_error, use_app_store, AppStateStoreFields, AppStore};

/// Surface a failed request: session problems open the "not logged in"
/// modal, anything else the generic server error modal
pub fn handle_service_error(store: &AppStore, err: &ServiceError) {
    if err.is_session_error() {
        log::info!("Session error: {}", err.code);
    } else {
        log::error!("Request failed: {}", err);
    }
    store_show_error(store, err);
}

/// Log a failure that only matters to the console
pub fn log_service_error(context: &str, err: &ServiceError) {
    if err.code != ErrorCode::MissingToken {
        log::error!("{}: {}", context, err);
    }
}

/// Drop the session locally; the router then sends the user to `/login`
pub fn sign_out(store: &AppStore) {
    browser::set_authenticated(false);
    store_logout(store);
}

/// Navigation usable from `Callback`s: the router's navigate function stays
/// on this component's effect and the returned callback only records the path
pub fn use_navigate_to() -> Callback<String> {
    let navigate = use_navigate();
    let (target, set_target) = signal(None::<String>);
    Effect::new(move |_| {
        if let Some(path) = target.get() {
            navigate(&path, Default::default());
        }
    });
    Callback::new(move |path: String| set_target.set(Some(path)))
}

/// Renders `children` for signed-in users, redirects everyone else to `/login`
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    let authenticated = move || store.session().read().authenticated;

    view! {
        <Show
            when=authenticated
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Inverse of [`Protected`]: signed-in users visiting login or sign-up go home
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    let authenticated = move || store.session().read().authenticated;

    view! {
        <Show
            when=move || !authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
