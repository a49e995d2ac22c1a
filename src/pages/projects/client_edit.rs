use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use timesheet_core::forms::validate_client;
use timesheet_core::validation::CLIENT_NAME_MAX_LENGTH;

use crate::api;
use crate::components::{FormInput, WaitLoader};
use crate::context::{handle_service_error, use_navigate_to};
use crate::store::use_app_store;

/// `/client/create` and `/client/edit/:id`
#[component]
pub fn ClientEditPage() -> impl IntoView {
    let store = use_app_store();
    let navigate_to = use_navigate_to();
    let params = use_params_map();
    let client_id = params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    let name = RwSignal::new(String::new());
    let (name_error, set_name_error) = signal(false);
    let (busy, set_busy) = signal(client_id.is_some());

    if let Some(id) = client_id {
        spawn_local(async move {
            match api::get_client(id).await {
                Ok(client) => name.set(client.name),
                Err(e) => handle_service_error(&store, &e),
            }
            set_busy.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = match validate_client(client_id, name.get().trim()) {
            Ok(client) => client,
            Err(_) => return set_name_error.set(true),
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::save_client(&client).await {
                Ok(saved) => {
                    log::info!("Saved client {:?}", saved.id);
                    navigate_to.run("/clients".to_string());
                }
                Err(e) => handle_service_error(&store, &e),
            }
            set_busy.set(false);
        });
    };

    let title = if client_id.is_some() { "Edit Client" } else { "Create Client" };

    view! {
        <div class="edit-page client-edit">
            <Show when=move || busy.get()>
                <WaitLoader message="Saving Client..." />
            </Show>
            <h2 class="header">{title}</h2>
            <form class="form" on:submit=on_submit>
                <FormInput
                    value=name
                    label="Client Name"
                    max_length=CLIENT_NAME_MAX_LENGTH
                    error=name_error
                    badge=Signal::derive(|| Some("Required"))
                    autofocus=true
                    on_input=move |_: ()| set_name_error.set(false)
                />
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Save"</button>
                    <button type="button" class="btn" on:click=move |_| navigate_to.run("/clients".to_string())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
