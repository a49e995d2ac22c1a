//! Account Page
//!
//! Company name, week start and timezone, plus inviting users.

use leptos::prelude::*;
use leptos::task::spawn_local;
use timesheet_core::account::{Role, TIMEZONES, WEEK_START_OPTIONS};
use timesheet_core::models::Account;
use timesheet_core::validation::{is_company_valid, COMPANY_NAME_MAX_LENGTH};

use crate::api;
use crate::components::{AddUserModal, FormInput, WaitLoader};
use crate::context::handle_service_error;
use crate::store::{store_apply_account, use_app_store};

#[component]
pub fn AccountPage() -> impl IntoView {
    let store = use_app_store();
    let company = RwSignal::new(String::new());
    let week_start = RwSignal::new(0u8);
    let timezone = RwSignal::new(String::new());
    let (company_error, set_company_error) = signal(false);
    let (busy, set_busy) = signal(true);
    let saved = RwSignal::new(false);
    let add_user_open = RwSignal::new(false);
    let invited = RwSignal::new(false);

    spawn_local(async move {
        match api::get_account().await {
            Ok(account) => {
                company.set(account.company);
                week_start.set(account.week_start);
                timezone.set(account.timezone);
            }
            Err(e) => handle_service_error(&store, &e),
        }
        set_busy.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let account = Account {
            company: company.get().trim().to_string(),
            week_start: week_start.get(),
            timezone: timezone.get(),
        };
        if !is_company_valid(&account.company) {
            return set_company_error.set(true);
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::update_account(&account).await {
                Ok(updated) => {
                    store_apply_account(&store, &updated);
                    saved.set(true);
                }
                Err(e) => handle_service_error(&store, &e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="edit-page account-page">
            <Show when=move || busy.get()>
                <WaitLoader message="Saving Account..." />
            </Show>
            <h2 class="header">"Account"</h2>
            <Show when=move || saved.get()>
                <div class="message positive">"Account updated"</div>
            </Show>
            <form class="form" on:submit=on_submit>
                <FormInput
                    value=company
                    label="Company"
                    max_length=COMPANY_NAME_MAX_LENGTH
                    error=company_error
                    badge=Signal::derive(|| Some("Required"))
                    on_input=move |_: ()| {
                        set_company_error.set(false);
                        saved.set(false);
                    }
                />
                <div class="field">
                    <label>"Week Starts On"</label>
                    <select
                        prop:value=move || week_start.get().to_string()
                        on:change=move |ev| {
                            if let Ok(day) = event_target_value(&ev).parse::<u8>() {
                                week_start.set(day);
                                saved.set(false);
                            }
                        }
                    >
                        {WEEK_START_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value.to_string()>{label}</option> })
                            .collect_view()}
                    </select>
                </div>
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

            <h3 class="header">"Users"</h3>
            <Show when=move || invited.get()>
                <div class="message positive">"Invitation sent"</div>
            </Show>
            <button class="btn" on:click=move |_| {
                invited.set(false);
                add_user_open.set(true);
            }>
                {format!("+ Add User ({} or {})", Role::User.as_str(), Role::Admin.as_str())}
            </button>
            <AddUserModal
                open=add_user_open
                on_success=move |_: ()| {
                    add_user_open.set(false);
                    invited.set(true);
                }
                on_cancel=move |_: ()| add_user_open.set(false)
            />
        </div>
    }
}
