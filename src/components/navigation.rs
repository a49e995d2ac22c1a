//! Navigation Bar
//!
//! Time / Projects / Reports links and the user menu. Hidden until signed in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::WaitLoader;
use crate::context::{log_service_error, sign_out};
use crate::mobile::use_is_mobile;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn MainLinks() -> impl IntoView {
    view! {
        <A href="/time" attr:class="menu-item">"Time"</A>
        <A href="/projects" attr:class="menu-item">"Projects"</A>
        <A href="/reports" attr:class="menu-item">"Reports"</A>
    }
}

#[component]
fn UserMenu(on_logout: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);

    let first_name = move || store.session().read().display_first_name();
    let full_name = move || store.session().read().display_full_name();
    let company = move || store.session().read().display_company();

    view! {
        <div class="menu-right">
            <div class="dropdown" on:click=move |_| set_open.update(|o| *o = !*o)>
                <div class="dropdown-trigger">
                    <span class="icon">"◯"</span>
                    <span>{first_name}</span>
                </div>
                <Show when=move || open.get()>
                    <div class="dropdown-menu">
                        <div class="dropdown-item">
                            <div class="menu-name">{full_name}</div>
                            <span class="menu-company">{company}</span>
                        </div>
                        <div class="dropdown-divider"></div>
                        <A href="/profile" attr:class="dropdown-item">"Profile"</A>
                        <div class="dropdown-divider"></div>
                        <A href="/account" attr:class="dropdown-item">"Account"</A>
                        <div class="dropdown-divider"></div>
                        <div class="dropdown-item" on:click=move |_| on_logout.run(())>"Logout"</div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let store = use_app_store();
    let is_mobile = use_is_mobile();
    let (pending_logout, set_pending_logout) = signal(false);
    let (sidebar_open, set_sidebar_open) = signal(false);

    let logout = Callback::new(move |_| {
        set_pending_logout.set(true);
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                log_service_error("Failed to logout", &e);
            }
            sign_out(&store);
            set_pending_logout.set(false);
        });
    });

    let authenticated = move || store.session().read().authenticated;

    view! {
        <Show when=move || pending_logout.get()>
            <WaitLoader message="Logging you out" />
        </Show>
        <Show when=move || authenticated() && !pending_logout.get()>
            {move || if is_mobile.get() {
                view! {
                    <nav class="menu menu-compact">
                        <div class="dropdown" on:click=move |_| set_sidebar_open.update(|o| *o = !*o)>
                            <span class="icon">"☰"</span>
                            <Show when=move || sidebar_open.get()>
                                <div class="dropdown-menu">
                                    <MainLinks />
                                </div>
                            </Show>
                        </div>
                        <UserMenu on_logout=logout />
                    </nav>
                }.into_any()
            } else {
                view! {
                    <nav class="menu menu-large">
                        <MainLinks />
                        <UserMenu on_logout=logout />
                    </nav>
                }.into_any()
            }}
        </Show>
    }
}
