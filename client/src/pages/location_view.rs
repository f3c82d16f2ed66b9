//! Location detail screen.

use engine::field::RendererId;
use leptos::prelude::*;

use crate::components::dynamic_detail::DynamicDetail;
use crate::components::render::{RecordRenderers, RecordView};
use crate::pages::location_fields::{ENTITY, FRANCHISE_LINK, LOCATIONS, detail_fields, franchise_href};
use crate::pages::record::{RecordLoad, route_id, use_record};

#[component]
pub fn LocationViewPage() -> impl IntoView {
    let record = use_record(LOCATIONS, route_id());
    let renderers = RecordRenderers::default().with(
        RendererId::new(FRANCHISE_LINK),
        RecordView::new(|record| {
            franchise_href(record).map(|href| view! { <a class="btn btn--link" href=href>"Open franchise"</a> })
        }),
    );

    move || match record.get() {
        RecordLoad::Loading => view! { <p class="detail-page__status">"Loading location..."</p> }.into_any(),
        RecordLoad::Failed(message) => view! { <p class="detail-page__error">{message}</p> }.into_any(),
        RecordLoad::Loaded(data) => view! {
            <div class="detail-page">
                <DynamicDetail fields=detail_fields() data=data entity_name=ENTITY renderers=renderers.clone() />
            </div>
        }
        .into_any(),
    }
}
