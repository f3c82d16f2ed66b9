//! Location create screen with a remote franchise selector.
//!
//! The selector is a custom form field: the page owns its `SelectorState`,
//! reads the selected franchise when building the payload and resets the
//! selector once the location is created.

use engine::FormValues;
use engine::config::UiConfig;
use engine::field::RendererId;
use engine::form::FormMode;
use engine::selector::SelectorState;
use leptos::prelude::*;

use crate::components::dynamic_form::DynamicForm;
use crate::components::remote_selector::RemoteSelector;
use crate::components::render::{FieldRenderers, OptionsFuture, SubmitFuture};
use crate::net::api;
use crate::pages::franchise_fields::FRANCHISES;
use crate::pages::location_fields::{
    ENTITY, FRANCHISE_OPTION_LIMIT, FRANCHISE_RENDERER, LOCATIONS, create_payload, form_fields, franchise_selector,
};

#[component]
pub fn LocationCreatePage() -> impl IntoView {
    let config = expect_context::<UiConfig>();
    let franchise = RwSignal::new(SelectorState::new(franchise_selector(&config)));

    let fetch_base = config.api_base.clone();
    let fetch = Callback::new(move |query: Option<String>| -> OptionsFuture {
        let base = fetch_base.clone();
        Box::pin(async move {
            api::search(&base, FRANCHISES, query, FRANCHISE_OPTION_LIMIT).await.map_err(|e| e.to_string())
        })
    });

    let submit_base = config.api_base;
    let on_submit = Callback::new(move |values: FormValues| -> SubmitFuture {
        let base = submit_base.clone();
        let payload = franchise.with_untracked(|s| create_payload(&values, &s.value()));
        Box::pin(async move {
            let payload = payload?;
            let response = api::create(&base, LOCATIONS, &payload).await.map_err(|e| e.to_string())?;
            franchise.try_update(SelectorState::reset);
            Ok(response)
        })
    });

    let fields = match form_fields() {
        Ok(fields) => fields,
        Err(err) => return view! { <p class="form-page__error">{err.to_string()}</p> }.into_any(),
    };
    let renderers = FieldRenderers::default().with(RendererId::new(FRANCHISE_RENDERER), move || {
        view! {
            <RemoteSelector
                label="Franchise"
                state=franchise
                fetch=fetch
                placeholder="Search franchises"
                width="100%"
            />
        }
    });

    view! {
        <div class="form-page">
            <DynamicForm fields=fields entity_name=ENTITY mode=FormMode::Add on_submit=on_submit renderers=renderers />
        </div>
    }
    .into_any()
}
