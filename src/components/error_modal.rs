//! Server Error Modal
//!
//! Driven by the `error_modal` field of the global store.

use leptos::prelude::*;
use timesheet_core::session::{DEFAULT_ERROR_ACTION, DEFAULT_ERROR_TITLE};

use crate::mobile::use_is_mobile;
use crate::store::{store_close_error, use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorModal() -> impl IntoView {
    let store = use_app_store();
    let is_mobile = use_is_mobile();

    let open = move || store.error_modal().read().server_error;
    let title = move || {
        let title = store.error_modal().read().title.clone();
        if title.is_empty() { DEFAULT_ERROR_TITLE.to_string() } else { title }
    };
    let message = move || store.error_modal().read().message.clone();
    let action = move || {
        let action = store.error_modal().read().action_message.clone();
        if action.is_empty() { DEFAULT_ERROR_ACTION.to_string() } else { action }
    };
    let close = move |_| store_close_error(&store);

    view! {
        <Show when=open>
            <div class="modal-backdrop blurring" on:click=close>
                <div class="modal modal-small" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">{title}</div>
                    <div class="modal-content">
                        <Show when=move || !is_mobile.get()>
                            <span class="icon icon-warning">"⚠"</span>
                        </Show>
                        <div class="modal-description">
                            <h4>{message}</h4>
                            <p>{action}</p>
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=close>"Try Again"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
