use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let company = move || store.session().read().company.clone();

    view! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title"><span class="icon icon-clock">"🕒"</span> " " {company}</h1>
            </header>
            <div class="home-link-list">
                <ul class="list relaxed">
                    <li><span class="icon">"🕓"</span> <A href="/time">"Time"</A></li>
                    <li><span class="icon">"☑"</span> <A href="/projects">"Projects"</A></li>
                    <li><span class="icon">"📊"</span> <A href="/reports">"Reports"</A></li>
                </ul>
            </div>
        </div>
    }
}
