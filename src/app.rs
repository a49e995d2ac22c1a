//! Timesheet Frontend App
//!
//! Provides the store, resumes the session and routes between pages.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::browser;
use crate::components::{ErrorModal, Navigation, UnauthenticatedModal, WaitLoader};
use crate::config::BOOT_LOADER_DELAY_MS;
use crate::context::{log_service_error, GuestOnly, Protected};
use crate::pages::{
    AccountPage, ClientEditPage, ClientsPage, HomePage, LoginPage, NewUserSetupPage, ProfilePage,
    ProjectEditPage, ProjectsPage, ReportsPage, SignUpPage, TaskEditPage, TasksPage, TimePage,
};
use crate::store::{store_login, AppState, AppStateStoreFields, AppStore};

/// Exchange the session cookie for the signed-in user, once per page load
fn resume_session(store: AppStore) {
    spawn_local(async move {
        match api::resume_session().await {
            Ok(user) => {
                log::info!("Resumed session for user {}", user.id);
                browser::set_authenticated(true);
                store_login(&store, user);
            }
            Err(e) => {
                log_service_error("Session resume failed", &e);
                browser::set_authenticated(false);
            }
        }
        store.booted().set(true);
    });
}

#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path="/" /> }>
            <Route path=path!("/login") view=|| view! { <GuestOnly><LoginPage /></GuestOnly> } />
            <Route path=path!("/sign-up") view=|| view! { <GuestOnly><SignUpPage /></GuestOnly> } />
            <Route path=path!("/new-user/:first_name/:token") view=NewUserSetupPage />

            <Route path=path!("/") view=|| view! { <Protected><HomePage /></Protected> } />
            <Route path=path!("/time/:date?") view=|| view! { <Protected><TimePage /></Protected> } />
            <Route path=path!("/profile") view=|| view! { <Protected><ProfilePage /></Protected> } />
            <Route path=path!("/account") view=|| view! { <Protected><AccountPage /></Protected> } />

            <Route path=path!("/projects") view=|| view! { <Protected><ProjectsPage /></Protected> } />
            <Route path=path!("/projects/create") view=|| view! { <Protected><ProjectEditPage /></Protected> } />
            <Route path=path!("/projects/edit/:id") view=|| view! { <Protected><ProjectEditPage /></Protected> } />
            <Route path=path!("/clients") view=|| view! { <Protected><ClientsPage /></Protected> } />
            <Route path=path!("/client/create") view=|| view! { <Protected><ClientEditPage /></Protected> } />
            <Route path=path!("/client/edit/:id") view=|| view! { <Protected><ClientEditPage /></Protected> } />
            <Route path=path!("/tasks") view=|| view! { <Protected><TasksPage /></Protected> } />
            <Route path=path!("/task/create") view=|| view! { <Protected><TaskEditPage /></Protected> } />
            <Route path=path!("/task/edit/:id") view=|| view! { <Protected><TaskEditPage /></Protected> } />

            <Route path=path!("/reports/:kind?") view=|| view! { <Protected><ReportsPage /></Protected> } />
        </Routes>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let booted = move || store.booted().get();
    // The loader only shows up for returning users, and only if booting is slow
    let (show_loader, set_show_loader) = signal(false);
    if browser::was_authenticated() {
        spawn_local(async move {
            TimeoutFuture::new(BOOT_LOADER_DELAY_MS).await;
            set_show_loader.set(true);
        });
    }

    resume_session(store);

    view! {
        <Router>
            <Show
                when=booted
                fallback=move || view! {
                    <Show when=move || show_loader.get()>
                        <WaitLoader message="App booting up..." />
                    </Show>
                }
            >
                <Navigation />
                <main class="app-content">
                    <AppRoutes />
                </main>
            </Show>
            <ErrorModal />
            <UnauthenticatedModal />
        </Router>
    }
}
