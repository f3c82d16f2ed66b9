//! Franchise list screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `ListState` behind the table: every table event goes through
//! `ListState::apply`, which answers with a fetch to run, a route to open or
//! ids to confirm for deletion. Fetch responses carry the query's sequence tag
//! so a slow page cannot overwrite a newer one.

use engine::config::UiConfig;
use engine::list::{ListEffect, ListQuery, ListState};
use engine::table::TableEvent;
use engine::value::RowId;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::dynamic_table::DynamicTable;
use crate::net::api;
use crate::pages::franchise_fields::{ENTITY, FRANCHISE_ROUTES, FRANCHISES, list_columns};
use crate::state::notify::NotifyState;

#[component]
pub fn FranchiseListPage() -> impl IntoView {
    let config = expect_context::<UiConfig>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let list = RwSignal::new(ListState::new(FRANCHISE_ROUTES, config.default_page_size));
    let base = StoredValue::new(config.api_base);
    let pending_delete = RwSignal::new(None::<Vec<RowId>>);
    let navigate_to = RwSignal::new(None::<String>);

    let run_fetch = move |query: ListQuery| {
        let base = base.get_value();
        leptos::task::spawn_local(async move {
            let result = api::fetch_list(&base, FRANCHISES, &query).await.map_err(|e| e.to_string());
            list.try_update(|l| l.complete(query.seq, result));
        });
    };

    let refetch = move || {
        if let Some(query) = list.try_update(ListState::begin_fetch) {
            run_fetch(query);
        }
    };

    Effect::new(refetch);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = navigate_to.get() {
            navigate_to.set(None);
            navigate(&route, NavigateOptions::default());
        }
    });

    let dispatch = move |event: TableEvent| match list.try_update(|l| l.apply(event)) {
        Some(ListEffect::Fetch(query)) => run_fetch(query),
        Some(ListEffect::Navigate(route)) => navigate_to.set(Some(route)),
        Some(ListEffect::ConfirmDelete(ids)) => pending_delete.set(Some(ids)),
        None => {}
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(ids) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let base = base.get_value();
        leptos::task::spawn_local(async move {
            match api::delete_many(&base, FRANCHISES, &ids).await {
                Ok(response) => {
                    list.try_update(|l| l.remove_rows(&ids));
                    notify.update(|n| {
                        n.success(&response.message);
                    });
                    refetch();
                }
                Err(err) => notify.update(|n| {
                    n.error(err.to_string());
                }),
            }
        });
    });
    let on_cancel_delete = Callback::new(move |()| pending_delete.set(None));
    let delete_message = Signal::derive(move || {
        let count = pending_delete.with(|ids| ids.as_ref().map_or(0, Vec::len));
        if count == 1 {
            "Delete this franchise? This cannot be undone.".to_owned()
        } else {
            format!("Delete {count} franchises? This cannot be undone.")
        }
    });

    // Memos, so list updates that leave these unchanged do not notify the table.
    let rows = Memo::new(move |_| list.with(|l| l.rows().to_vec()));
    let loading = Memo::new(move |_| list.with(ListState::is_loading));
    let pagination = Memo::new(move |_| list.with(ListState::pagination));
    let create_route = list.with_untracked(ListState::create_route);

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <a class="btn btn--primary" href=create_route>
                    {format!("Add {ENTITY}")}
                </a>
            </header>
            {move || list.with(|l| l.error().map(|e| view! { <p class="list-page__error">{e.to_owned()}</p> }))}
            <DynamicTable
                rows=rows
                columns=list_columns()
                title="Franchise List"
                loading=loading
                pagination=pagination
                on_page_change=Callback::new(move |page| dispatch(TableEvent::PageChange(page)))
                on_limit_change=Callback::new(move |limit| dispatch(TableEvent::LimitChange(limit)))
                on_search_change=Callback::new(move |search| dispatch(TableEvent::SearchChange(search)))
                on_view=Callback::new(move |id| dispatch(TableEvent::View(id)))
                on_edit=Callback::new(move |id| dispatch(TableEvent::Edit(id)))
                on_delete=Callback::new(move |ids| dispatch(TableEvent::Delete(ids)))
            />
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete Franchise"
                    message=delete_message
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
