use leptos::prelude::*;

use crate::context::sign_out;
use crate::mobile::use_is_mobile;
use crate::store::{store_close_error, use_app_store, AppStateStoreFields};

/// Shown when a request fails because the session is gone
#[component]
pub fn UnauthenticatedModal() -> impl IntoView {
    let store = use_app_store();
    let is_mobile = use_is_mobile();

    let open = move || store.error_modal().read().session_expired;
    let close = move |_| store_close_error(&store);
    let login = move |_| {
        sign_out(&store);
        store_close_error(&store);
    };

    view! {
        <Show when=open>
            <div class="modal-backdrop blurring" on:click=close>
                <div class="modal modal-small" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">"Oops. You're not logged in."</div>
                    <div class="modal-content">
                        <Show when=move || !is_mobile.get()>
                            <span class="icon icon-info">"i"</span>
                        </Show>
                        <div class="modal-description">
                            <p>"Please login or try your request again."</p>
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=login>"Login"</button>
                        <button class="btn" on:click=close>"Try Again"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
