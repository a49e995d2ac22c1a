//! Profile Page
//!
//! Personal details and password change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use timesheet_core::account::TIMEZONES;
use timesheet_core::forms::{validate_profile, FormError};
use timesheet_core::models::{PasswordChange, Profile};
use timesheet_core::validation::{EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH};
use timesheet_core::{ErrorCode, ServiceError};

use crate::api;
use crate::components::{FormInput, WaitLoader};
use crate::context::handle_service_error;
use crate::store::{store_apply_profile, use_app_store};

/// Field a rejected profile update points at, when the form can show it
fn profile_field_error(err: &ServiceError) -> Option<FormError> {
    match err.code {
        ErrorCode::InvalidEmail => Some(FormError::InvalidEmail),
        ErrorCode::FieldSize => match err.field()? {
            "firstName" => Some(FormError::InvalidFirstName),
            "lastName" => Some(FormError::InvalidLastName),
            "email" => Some(FormError::InvalidEmail),
            _ => None,
        },
        _ => None,
    }
}

/// Field a rejected password change points at
fn password_field_error(err: &ServiceError) -> Option<FormError> {
    match err.code {
        ErrorCode::IncorrectPassword => Some(FormError::InvalidCurrentPassword),
        ErrorCode::InvalidPassword => Some(FormError::InvalidPassword),
        ErrorCode::FieldSize => PasswordChange::field_error(err.field()?),
        _ => None,
    }
}

#[component]
fn PasswordForm() -> impl IntoView {
    let store = use_app_store();
    let current = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<FormError>);
    let (busy, set_busy) = signal(false);
    let changed = RwSignal::new(false);

    let has_error = move |errors: &'static [FormError]| {
        Signal::derive(move || field_error.get().is_some_and(|e| errors.contains(&e)))
    };
    let clear = move |_: ()| {
        field_error.set(None);
        changed.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let change = PasswordChange {
            current_password: current.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        if let Err(e) = change.validate() {
            return field_error.set(Some(e));
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::update_password(&change).await {
                Ok(()) => {
                    current.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                    changed.set(true);
                }
                Err(e) => match password_field_error(&e) {
                    Some(field) => field_error.set(Some(field)),
                    None => handle_service_error(&store, &e),
                },
            }
            set_busy.set(false);
        });
    };

    view! {
        <Show when=move || busy.get()>
            <WaitLoader message="Updating Password..." />
        </Show>
        <h3 class="header">"Change Password"</h3>
        <Show when=move || changed.get()>
            <div class="message positive">"Password updated"</div>
        </Show>
        <Show when=move || field_error.get().is_some()>
            <div class="message negative">{move || field_error.get().map(|e| e.to_string())}</div>
        </Show>
        <form class="form" on:submit=on_submit>
            <FormInput
                value=current
                label="Current Password"
                kind="password"
                autocomplete="current-password"
                max_length=PASSWORD_MAX_LENGTH
                error=has_error(&[FormError::InvalidCurrentPassword])
                on_input=clear
            />
            <FormInput
                value=password
                label="New Password"
                kind="password"
                autocomplete="new-password"
                max_length=PASSWORD_MAX_LENGTH
                error=has_error(&[FormError::InvalidPassword, FormError::PasswordMismatch])
                on_input=clear
            />
            <FormInput
                value=confirm
                label="Confirm Password"
                kind="password"
                autocomplete="new-password"
                max_length=PASSWORD_MAX_LENGTH
                error=has_error(&[FormError::InvalidConfirmPassword, FormError::PasswordMismatch])
                on_input=clear
            />
            <div class="form-actions">
                <button type="submit" class="btn btn-primary">"Update Password"</button>
            </div>
        </form>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let timezone = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<FormError>);
    let (busy, set_busy) = signal(true);
    let saved = RwSignal::new(false);

    spawn_local(async move {
        match api::get_profile().await {
            Ok(profile) => {
                first_name.set(profile.first_name);
                last_name.set(profile.last_name);
                email.set(profile.email);
                timezone.set(profile.timezone);
            }
            Err(e) => handle_service_error(&store, &e),
        }
        set_busy.set(false);
    });

    let has_error = move |error: FormError| Signal::derive(move || field_error.get() == Some(error));
    let clear = move |_: ()| {
        field_error.set(None);
        saved.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = Profile {
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            timezone: timezone.get(),
        };
        if let Err(e) = validate_profile(&profile.first_name, &profile.last_name, &profile.email) {
            return field_error.set(Some(e));
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::update_profile(&profile).await {
                Ok(updated) => {
                    store_apply_profile(&store, &updated);
                    saved.set(true);
                }
                Err(e) => match profile_field_error(&e) {
                    Some(field) => field_error.set(Some(field)),
                    None => handle_service_error(&store, &e),
                },
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="edit-page profile-page">
            <Show when=move || busy.get()>
                <WaitLoader message="Saving Profile..." />
            </Show>
            <h2 class="header">"Profile"</h2>
            <Show when=move || saved.get()>
                <div class="message positive">"Profile updated"</div>
            </Show>
            <form class="form" on:submit=on_submit>
                <FormInput
                    value=first_name
                    label="First Name"
                    autocomplete="given-name"
                    max_length=NAME_MAX_LENGTH
                    error=has_error(FormError::InvalidFirstName)
                    badge=Signal::derive(|| Some("Required"))
                    on_input=clear
                />
                <FormInput
                    value=last_name
                    label="Last Name"
                    autocomplete="family-name"
                    max_length=NAME_MAX_LENGTH
                    error=has_error(FormError::InvalidLastName)
                    badge=Signal::derive(|| Some("Required"))
                    on_input=clear
                />
                <FormInput
                    value=email
                    label="Email"
                    kind="email"
                    autocomplete="email"
                    max_length=EMAIL_MAX_LENGTH
                    error=has_error(FormError::InvalidEmail)
                    badge=Signal::derive(|| Some("Invalid"))
                    on_input=clear
                />
                <div class="field">
                    <label>"Timezone"</label>
                    <select
                        prop:value=move || timezone.get()
                        on:change=move |ev| {
                            timezone.set(event_target_value(&ev));
                            saved.set(false);
                        }
                    >
                        <option value="" disabled=true>"Select Timezone"</option>
                        {TIMEZONES
                            .into_iter()
                            .map(|tz| view! {
                                <option value=tz.value>{format!("{} {}", tz.text, tz.description)}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Save"</button>
                </div>
            </form>

            <PasswordForm />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_size(field: &str) -> ServiceError {
        ServiceError::from_json(
            &format!(r#"{{"status":"error","code":"FieldSize","detail":{{"field":"{}"}}}}"#, field),
            400,
        )
    }

    #[test]
    fn test_profile_field_error() {
        assert_eq!(profile_field_error(&field_size("lastName")), Some(FormError::InvalidLastName));
        assert_eq!(profile_field_error(&field_size("nickname")), None);
        let other = ServiceError::new(ErrorCode::Other("Boom".into()), 500, "");
        assert_eq!(profile_field_error(&other), None);
    }

    #[test]
    fn test_password_field_error() {
        let wrong = ServiceError::new(ErrorCode::IncorrectPassword, 400, "");
        assert_eq!(password_field_error(&wrong), Some(FormError::InvalidCurrentPassword));
        assert_eq!(
            password_field_error(&field_size("confirmPassword")),
            Some(FormError::InvalidConfirmPassword)
        );
    }
}
