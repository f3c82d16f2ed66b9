//! Franchise detail screen.

use engine::value::RowId;
use leptos::prelude::*;

use crate::components::dynamic_detail::DynamicDetail;
use crate::pages::franchise_fields::{ENTITY, FRANCHISE_ROUTES, FRANCHISES, detail_fields};
use crate::pages::record::{RecordLoad, route_id, use_record};

#[component]
pub fn FranchiseViewPage() -> impl IntoView {
    let id = route_id();
    let record = use_record(FRANCHISES, id);
    let edit_href = move || id.get().map(|id: RowId| format!("{FRANCHISE_ROUTES}/edit/{id}"));

    move || match record.get() {
        RecordLoad::Loading => view! { <p class="detail-page__status">"Loading franchise..."</p> }.into_any(),
        RecordLoad::Failed(message) => view! { <p class="detail-page__error">{message}</p> }.into_any(),
        RecordLoad::Loaded(data) => view! {
            <div class="detail-page">
                <nav class="detail-page__actions">
                    <a class="btn" href=FRANCHISE_ROUTES>
                        "Back to list"
                    </a>
                    <a class="btn btn--primary" href=edit_href>
                        "Edit"
                    </a>
                </nav>
                <DynamicDetail fields=detail_fields() data=data entity_name=ENTITY />
            </div>
        }
        .into_any(),
    }
}
