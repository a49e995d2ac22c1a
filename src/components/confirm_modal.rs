//! Confirm Modal Component
//!
//! Yes/No confirmation used before archiving or deleting.

use leptos::prelude::*;

/// Confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` - Header text
/// * `description` - Body text
/// * `on_confirm` - Runs when the user clicks the confirm button
/// * `on_cancel` - Runs on cancel or backdrop click
/// * `hide_cancel` - Only offer the confirm button
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(optional)] hide_cancel: bool,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Yes".to_string());
    let cancel_label = cancel_label.unwrap_or_else(|| "No".to_string());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal modal-tiny" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">{title}</div>
                    <div class="modal-content">
                        <p>{description}</p>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                        {(!hide_cancel).then(|| view! {
                            <button class="btn" on:click=move |_| on_cancel.run(())>
                                {cancel_label.clone()}
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </Show>
    }
}
