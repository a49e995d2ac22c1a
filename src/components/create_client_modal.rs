//! Create Client Modal
//!
//! Inline client creation from the project editor.

use leptos::prelude::*;
use leptos::task::spawn_local;
use timesheet_core::forms::validate_client;
use timesheet_core::models::Client;

use crate::api;
use crate::components::WaitLoader;
use crate::context::handle_service_error;
use crate::store::use_app_store;

#[component]
pub fn CreateClientModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_success: Callback<Client>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (name_error, set_name_error) = signal(false);
    let (loading, set_loading) = signal(false);

    let reset = move || {
        set_name.set(String::new());
        set_name_error.set(false);
    };

    let save = move |_| {
        let client = match validate_client(None, name.get().trim()) {
            Ok(client) => client,
            Err(_) => return set_name_error.set(true),
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::save_client(&client).await {
                Ok(created) => {
                    on_success.run(created);
                    reset();
                }
                Err(e) => handle_service_error(&store, &e),
            }
            set_loading.set(false);
        });
    };

    let cancel = move |_| {
        on_cancel.run(());
        reset();
    };

    view! {
        <Show when=move || loading.get()>
            <WaitLoader message="Saving Client..." />
        </Show>
        <Show when=move || open.get() && !loading.get()>
            <div class="modal-backdrop inverted">
                <div class="modal">
                    <div class="modal-header">"Create Client"</div>
                    <div class="modal-content">
                        <form class="form" on:submit=|ev| ev.prevent_default()>
                            <div class="field">
                                <label>"Client Name"</label>
                                <div class="input-action">
                                    <input
                                        type="text"
                                        class:error=move || name_error.get()
                                        prop:value=name
                                        on:input=move |ev| {
                                            set_name_error.set(false);
                                            set_name.set(event_target_value(&ev));
                                        }
                                    />
                                    <Show when=move || name_error.get()>
                                        <span class="input-label error">"Required"</span>
                                    </Show>
                                </div>
                            </div>
                        </form>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=save>"Save"</button>
                        <button class="btn" on:click=cancel>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
