//! New User Setup Page
//!
//! Landing page of the invite email: `/new-user/{firstNameEncoded}/{token}`.
//! Setting a password does not sign the user in; they are sent to `/login`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use timesheet_core::account::decode_invite_name;
use timesheet_core::messages::new_user_setup_error;
use timesheet_core::validation::{is_password_valid, password_length_hint, PASSWORD_MAX_LENGTH};

use crate::api;
use crate::components::{ConfirmModal, FormInput, WaitLoader};
use crate::context::{log_service_error, sign_out, use_navigate_to};
use crate::store::use_app_store;

#[component]
pub fn NewUserSetupPage() -> impl IntoView {
    let store = use_app_store();
    let params = use_params_map();
    let navigate_to = use_navigate_to();

    let first_name = move || {
        params
            .read()
            .get("first_name")
            .and_then(|encoded| decode_invite_name(&encoded))
            .unwrap_or_default()
    };
    let token = move || params.read().get("token").unwrap_or_default();

    let (loading, set_loading) = signal(false);
    let password = RwSignal::new(String::new());
    let (password_error, set_password_error) = signal(false);
    let error_message = RwSignal::new(None::<String>);
    let (setup_complete, set_setup_complete) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let password = password.get();
        if !is_password_valid(&password) {
            return set_password_error.set(true);
        }
        let token = token();

        set_loading.set(true);
        spawn_local(async move {
            match api::setup(&token, &password).await {
                Ok(()) => {
                    if let Err(e) = api::logout().await {
                        log_service_error("Failed to logout", &e);
                    }
                    sign_out(&store);
                    set_setup_complete.set(true);
                }
                Err(e) => {
                    log::error!("Account setup failed: {}", e);
                    error_message.set(Some(new_user_setup_error(&e)));
                }
            }
            set_loading.set(false);
        });
    };

    let continue_to_login = move |_: ()| {
        set_setup_complete.set(false);
        navigate_to.run("/login".to_string());
    };

    let password_badge = Signal::derive(move || password.with(|p| password_length_hint(p)));

    view! {
        <div class="profile-background">
            <Show when=move || loading.get()>
                <WaitLoader message="Setting up your account..." />
            </Show>
            <div class="profile-container login">
                <div class="profile-form">
                    <div class="message negative profile-error" class:hidden=move || error_message.get().is_none()>
                        <div class="message-header">{move || error_message.get().unwrap_or_default()}</div>
                    </div>
                    <h2 class="header blue centered">"Welcome " {first_name} "!"</h2>
                    <h3 class="header centered">
                        "Please setup your account" <br /> "by setting a strong password"
                    </h3>
                    <form class="form large" on:submit=on_submit>
                        <div class="segment stacked">
                            <FormInput
                                label="Password"
                                kind="password"
                                value=password
                                autocomplete="new-password"
                                max_length=PASSWORD_MAX_LENGTH
                                error=password_error
                                badge=password_badge
                                on_input=move |_: ()| {
                                    set_password_error.set(false);
                                    error_message.set(None);
                                }
                            />
                            <button type="submit" class="btn btn-blue fluid large">"Setup Account"</button>
                        </div>
                    </form>
                </div>
            </div>
            <ConfirmModal
                open=setup_complete
                title="Account Setup Complete"
                description="Your account is now setup. Please click 'Continue' to login."
                confirm_label="Continue"
                hide_cancel=true
                on_confirm=continue_to_login
                on_cancel=move |_: ()| set_setup_complete.set(false)
            />
        </div>
    }
}
