//! Create Account Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use timesheet_core::messages::sign_up_error;
use timesheet_core::models::SignUpRequest;
use timesheet_core::validation::{
    is_company_valid, is_email_valid, is_name_valid, is_password_valid, COMPANY_NAME_MAX_LENGTH,
    EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
};

use crate::api;
use crate::browser;
use crate::components::{FormInput, WaitLoader};
use crate::store::{store_login, use_app_store};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    FirstName,
    LastName,
    Company,
    Email,
    Password,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let store = use_app_store();
    let (loading, set_loading) = signal(false);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let invalid = RwSignal::new(None::<Field>);
    let error_message = RwSignal::new(None::<String>);
    let (password_focused, set_password_focused) = signal(false);

    let clear_errors = move || {
        invalid.set(None);
        error_message.set(None);
    };
    let has_error = move |field: Field| Signal::derive(move || invalid.get() == Some(field));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = SignUpRequest {
            first_name: first_name.get(),
            last_name: last_name.get(),
            company: company.get(),
            email: email.get(),
            password: password.get(),
        };
        let failed = if !is_name_valid(&body.first_name) {
            Some(Field::FirstName)
        } else if !is_name_valid(&body.last_name) {
            Some(Field::LastName)
        } else if !is_company_valid(&body.company) {
            Some(Field::Company)
        } else if !is_email_valid(&body.email) {
            Some(Field::Email)
        } else if !is_password_valid(&body.password) {
            Some(Field::Password)
        } else {
            None
        };
        if failed.is_some() {
            return invalid.set(failed);
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::sign_up(&body).await {
                Ok(user) => {
                    browser::set_authenticated(true);
                    store_login(&store, user);
                }
                Err(e) => {
                    log::error!("Sign up failed: {}", e);
                    error_message.set(Some(sign_up_error(&e)));
                }
            }
            set_loading.set(false);
        });
    };

    let show_password_hint = move || {
        let len = password.with(|p| p.chars().count());
        password_focused.get() && len > 0 && len < PASSWORD_MIN_LENGTH
    };

    view! {
        <div class="profile-background">
            <Show when=move || loading.get()>
                <WaitLoader message="Logging you in..." />
            </Show>
            <div class="profile-container">
                <div class="profile-form">
                    <h2 class="header blue centered">"Create Account"</h2>
                    <form class="form" on:submit=on_submit>
                        <Show when=move || error_message.get().is_some()>
                            <div class="message negative profile-error">
                                <div class="message-header">{move || error_message.get().unwrap_or_default()}</div>
                            </div>
                        </Show>
                        <div class="segment stacked">
                            <FormInput
                                label="First Name"
                                value=first_name
                                autocomplete="given-name"
                                max_length=NAME_MAX_LENGTH
                                error=has_error(Field::FirstName)
                                badge=Some("Required")
                                autofocus=true
                                on_input=move |_: ()| clear_errors()
                            />
                            <FormInput
                                label="Last Name"
                                value=last_name
                                autocomplete="family-name"
                                max_length=NAME_MAX_LENGTH
                                error=has_error(Field::LastName)
                                badge=Some("Required")
                                on_input=move |_: ()| clear_errors()
                            />
                            <FormInput
                                label="Company Name"
                                value=company
                                max_length=COMPANY_NAME_MAX_LENGTH
                                error=has_error(Field::Company)
                                badge=Some("Required")
                                on_input=move |_: ()| clear_errors()
                            />
                            <FormInput
                                label="Email"
                                kind="email"
                                value=email
                                autocomplete="email"
                                max_length=EMAIL_MAX_LENGTH
                                error=has_error(Field::Email)
                                badge=Some("Required")
                                on_input=move |_: ()| clear_errors()
                            />
                            <FormInput
                                label="Password"
                                kind="password"
                                value=password
                                autocomplete="new-password"
                                max_length=PASSWORD_MAX_LENGTH
                                error=has_error(Field::Password)
                                badge=Some("Required")
                                on_input=move |_: ()| clear_errors()
                                on_focus=move |focused: bool| set_password_focused.set(focused)
                            />
                            <Show when=show_password_hint>
                                <div class="popup">"Password should be at least 8 characters"</div>
                            </Show>
                            <button type="submit" class="btn btn-blue fluid large">"Create Account"</button>
                            <div class="profile-link-message">
                                "By creating an account you agree to the "
                                <a href="/terms" target="_blank">"terms of service"</a>
                                " and "
                                <a href="/privacy" target="_blank">"privacy policy"</a>
                            </div>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
