//! Add User Modal
//!
//! Invites a user to the account. Validation and duplicate-email errors are
//! shown inline; anything else goes to the global error modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use timesheet_core::account::Role;
use timesheet_core::forms::{validate_profile, FormError};
use timesheet_core::messages::{add_user_error, is_add_user_inline_error};
use timesheet_core::models::AddUserRequest;
use timesheet_core::validation::{EMAIL_MAX_LENGTH, NAME_MAX_LENGTH};

use crate::api;
use crate::components::{FormInput, WaitLoader};
use crate::context::handle_service_error;
use crate::store::use_app_store;

#[component]
pub fn AddUserModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_success: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let (loading, set_loading) = signal(false);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let field_error = RwSignal::new(None::<FormError>);
    let server_error = RwSignal::new(None::<String>);

    let clear_errors = move || {
        field_error.set(None);
        server_error.set(None);
    };
    let reset = move || {
        clear_errors();
        first_name.set(String::new());
        last_name.set(String::new());
        email.set(String::new());
        role.set(Role::User);
    };

    let add_user = move |_| {
        let body = AddUserRequest {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            role: role.get().as_str().to_string(),
        };
        if let Err(e) = validate_profile(&body.first_name, &body.last_name, &body.email) {
            return field_error.set(Some(e));
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::add_user(&body).await {
                Ok(()) => {
                    on_success.run(());
                    reset();
                }
                Err(e) => {
                    log::error!("Failed to add user: {}", e);
                    server_error.set(Some(add_user_error(&e)));
                    if !is_add_user_inline_error(&e.code) {
                        handle_service_error(&store, &e);
                    }
                }
            }
            set_loading.set(false);
        });
    };

    let cancel = move |_| {
        on_cancel.run(());
        reset();
    };

    let has_error = move |error: FormError| Signal::derive(move || field_error.get() == Some(error));

    view! {
        <Show when=move || loading.get()>
            <WaitLoader message="Adding User..." />
        </Show>
        <Show when=move || open.get() && !loading.get()>
            <div class="modal-backdrop inverted">
                <div class="modal">
                    <div class="modal-header">"Add User"</div>
                    <div class="modal-content">
                        <Show when=move || server_error.get().is_some()>
                            <div class="message negative">
                                <div class="message-header">{move || server_error.get().unwrap_or_default()}</div>
                            </div>
                        </Show>
                        <form class="form" on:submit=|ev| ev.prevent_default()>
                            <FormInput
                                label="First Name"
                                value=first_name
                                autocomplete="given-name"
                                max_length=NAME_MAX_LENGTH
                                error=has_error(FormError::InvalidFirstName)
                                badge=Some("Required")
                                autofocus=true
                                on_input=move |_: ()| clear_errors()
                            />
                            <FormInput
                                label="Last Name"
                                value=last_name
                                autocomplete="family-name"
                                max_length=NAME_MAX_LENGTH
                                error=has_error(FormError::InvalidLastName)
                                badge=Some("Required")
                                on_input=move |_: ()| clear_errors()
                            />
                            <FormInput
                                label="Email"
                                kind="email"
                                value=email
                                autocomplete="email"
                                max_length=EMAIL_MAX_LENGTH
                                error=has_error(FormError::InvalidEmail)
                                badge=Some("Required")
                                on_input=move |_: ()| clear_errors()
                            />
                            <div class="field">
                                <label>"Role"</label>
                                <label class="radio">
                                    <input
                                        type="radio"
                                        name="role"
                                        prop:checked=move || role.get() == Role::User
                                        on:change=move |_| role.set(Role::User)
                                    />
                                    "User"
                                </label>
                                <label class="radio">
                                    <input
                                        type="radio"
                                        name="role"
                                        prop:checked=move || role.get() == Role::Admin
                                        on:change=move |_| role.set(Role::Admin)
                                    />
                                    "Administrator"
                                </label>
                            </div>
                        </form>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=add_user>"Add User"</button>
                        <button class="btn" on:click=cancel>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
