use leptos::prelude::*;

/// Dimmed overlay with a spinner and message
#[component]
pub fn WaitLoader(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="dimmer-loader">
            <div class="dimmer">
                <div class="loader">
                    <span class="spinner"></span>
                    <span class="loader-text">{message}</span>
                </div>
            </div>
        </div>
    }
}
