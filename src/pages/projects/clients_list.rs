use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use timesheet_core::models::Client;

use super::{archive_description, ArchiveTarget, ArchivedToggle, ListTabs};
use crate::api;
use crate::components::{ConfirmModal, WaitLoader};
use crate::context::handle_service_error;
use crate::store::use_app_store;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let store = use_app_store();
    let archived = RwSignal::new(false);
    let clients = RwSignal::new(Vec::<Client>::new());
    let loading = RwSignal::new(false);
    let target = RwSignal::new(None::<ArchiveTarget>);

    Effect::new(move |_| {
        let show_archived = archived.get();
        loading.set(true);
        spawn_local(async move {
            let result = if show_archived {
                api::get_archived_clients().await
            } else {
                api::get_clients().await
            };
            match result {
                Ok(list) => clients.set(list),
                Err(e) => handle_service_error(&store, &e),
            }
            loading.set(false);
        });
    });

    let remove = move |id: i64| clients.update(|list| list.retain(|c| c.id != Some(id)));

    let confirm_archive = move |_: ()| {
        let Some(ArchiveTarget { id, .. }) = target.get_untracked() else {
            return;
        };
        target.set(None);
        spawn_local(async move {
            match api::archive_client(id).await {
                Ok(()) => remove(id),
                Err(e) => handle_service_error(&store, &e),
            }
        });
    };

    let restore = move |id: i64| {
        spawn_local(async move {
            match api::restore_client(id).await {
                Ok(()) => remove(id),
                Err(e) => handle_service_error(&store, &e),
            }
        });
    };

    view! {
        <div class="list-page clients-list">
            <ListTabs />
            <div class="list-toolbar">
                <A href="/client/create" attr:class="btn btn-positive">"+ New Client"</A>
                <ArchivedToggle archived=archived />
            </div>

            <Show when=move || loading.get()>
                <WaitLoader message="Loading clients..." />
            </Show>
            <Show when=move || !loading.get() && clients.with(|c| c.is_empty())>
                <p class="empty-list">
                    {move || if archived.get() { "No archived clients" } else { "No clients yet" }}
                </p>
            </Show>

            <div class="list-group">
                <For
                    each=move || clients.get()
                    key=|client| client.id
                    children=move |client| {
                        let id = client.id.unwrap_or_default();
                        let name = client.name.clone();
                        view! {
                            <div class="list-item">
                                <span class="list-item-name">{client.name}</span>
                                <Show
                                    when=move || archived.get()
                                    fallback=move || {
                                        let name = name.clone();
                                        view! {
                                            <A href=format!("/client/edit/{}", id) attr:class="btn btn-small">"Edit"</A>
                                            <button
                                                class="btn btn-small"
                                                on:click=move |_| target.set(Some(ArchiveTarget { id, name: name.clone() }))
                                            >
                                                "Archive"
                                            </button>
                                        }
                                    }
                                >
                                    <button class="btn btn-small" on:click=move |_| restore(id)>"Restore"</button>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <ConfirmModal
                open=Signal::derive(move || target.with(|t| t.is_some()))
                title="Archive Client?"
                description=Signal::derive(move || {
                    target.with(|t| t.as_ref().map(|t| archive_description("client", &t.name)).unwrap_or_default())
                })
                on_confirm=confirm_archive
                on_cancel=move |_: ()| target.set(None)
            />
        </div>
    }
}
