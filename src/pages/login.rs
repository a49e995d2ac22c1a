//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use timesheet_core::messages::login_error;
use timesheet_core::validation::{
    is_email_valid, is_password_valid, password_length_hint, EMAIL_MAX_LENGTH, PASSWORD_MAX_LENGTH,
};

use crate::api;
use crate::browser;
use crate::components::{FormInput, WaitLoader};
use crate::store::{store_login, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let (loading, set_loading) = signal(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (email_error, set_email_error) = signal(false);
    let (password_error, set_password_error) = signal(false);
    let error_message = RwSignal::new(None::<String>);

    let clear_errors = move || {
        set_email_error.set(false);
        set_password_error.set(false);
        error_message.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get(), password.get());
        if !is_email_valid(&email) {
            return set_email_error.set(true);
        }
        if !is_password_valid(&password) {
            return set_password_error.set(true);
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(user) => {
                    log::info!("Logged in as user {}", user.id);
                    browser::set_authenticated(true);
                    store_login(&store, user);
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    error_message.set(Some(login_error(&e)));
                }
            }
            set_loading.set(false);
        });
    };

    let password_badge = Signal::derive(move || password.with(|p| password_length_hint(p)));

    view! {
        <div class="profile-background">
            <Show when=move || loading.get()>
                <WaitLoader message="Logging you in..." />
            </Show>
            <div class="profile-container login">
                <div class="profile-form">
                    <div class="message negative profile-error" class:hidden=move || error_message.get().is_none()>
                        <div class="message-header">{move || error_message.get().unwrap_or_default()}</div>
                    </div>
                    <h2 class="header blue centered">"Login"</h2>
                    <form class="form large" on:submit=on_submit>
                        <div class="segment stacked">
                            <FormInput
                                value=email
                                kind="email"
                                placeholder="Email"
                                autocomplete="email"
                                max_length=EMAIL_MAX_LENGTH
                                error=email_error
                                autofocus=true
                                on_input=move |_: ()| clear_errors()
                            />
                            <FormInput
                                value=password
                                kind="password"
                                placeholder="Password"
                                autocomplete="current-password"
                                max_length=PASSWORD_MAX_LENGTH
                                error=password_error
                                badge=password_badge
                                on_input=move |_: ()| clear_errors()
                            />
                            <button type="submit" class="btn btn-blue fluid large">"Login"</button>
                            <div class="profile-link-message">
                                "Need to " <A href="/sign-up">"Sign Up"</A> "?"
                            </div>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
