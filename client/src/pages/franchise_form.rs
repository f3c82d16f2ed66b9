//! Franchise create and edit screens.
//!
//! Both render the same descriptors through `DynamicForm`. The logo URL is a
//! custom field: its input keeps the value in a page-local signal that is
//! merged into the payload on submit.

use engine::FormValues;
use engine::config::UiConfig;
use engine::field::RendererId;
use engine::form::FormMode;
use engine::value::{RowId, display_at};
use leptos::prelude::*;
use serde_json::Value;

use crate::components::dynamic_form::DynamicForm;
use crate::components::render::{FieldRenderers, SubmitFuture};
use crate::net::api;
use crate::pages::franchise_fields::{ENTITY, FRANCHISES, LOGO_FIELD, LOGO_RENDERER, form_fields, with_logo};
use crate::pages::record::{RecordLoad, route_id, use_record};

#[component]
pub fn FranchiseCreatePage() -> impl IntoView {
    let base = expect_context::<UiConfig>().api_base;
    let logo = RwSignal::new(String::new());

    let on_submit = Callback::new(move |values: FormValues| -> SubmitFuture {
        let base = base.clone();
        let payload = with_logo(values, &logo.get_untracked());
        Box::pin(async move {
            let response = api::create(&base, FRANCHISES, &payload).await.map_err(|e| e.to_string())?;
            logo.try_update(String::clear);
            Ok(response)
        })
    });

    franchise_form(FormMode::Add, on_submit, None, logo)
}

#[component]
pub fn FranchiseEditPage() -> impl IntoView {
    let base = expect_context::<UiConfig>().api_base;
    let id = route_id();
    let record = use_record(FRANCHISES, id);
    let logo = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(current) = record.with(|r| r.record().map(|v| display_at(v, LOGO_FIELD))) {
            logo.set(current);
        }
    });

    let initial = Signal::derive(move || {
        record.with(|r| match r.record() {
            Some(Value::Object(map)) => map.clone(),
            _ => FormValues::new(),
        })
    });

    let on_submit = Callback::new(move |values: FormValues| -> SubmitFuture {
        let base = base.clone();
        let target: Option<RowId> = id.get_untracked();
        let payload = with_logo(values, &logo.get_untracked());
        Box::pin(async move {
            let target = target.ok_or_else(|| "missing franchise id".to_owned())?;
            api::update(&base, FRANCHISES, &target, &payload).await.map_err(|e| e.to_string())
        })
    });

    move || match record.get() {
        RecordLoad::Loading => view! { <p class="form-page__status">"Loading franchise..."</p> }.into_any(),
        RecordLoad::Failed(message) => view! { <p class="form-page__error">{message}</p> }.into_any(),
        RecordLoad::Loaded(_) => franchise_form(FormMode::Edit, on_submit, Some(initial), logo),
    }
}

fn franchise_form(
    mode: FormMode,
    on_submit: Callback<FormValues, SubmitFuture>,
    initial: Option<Signal<FormValues>>,
    logo: RwSignal<String>,
) -> AnyView {
    let fields = match form_fields() {
        Ok(fields) => fields,
        Err(err) => return view! { <p class="form-page__error">{err.to_string()}</p> }.into_any(),
    };
    let renderers = FieldRenderers::default().with(RendererId::new(LOGO_RENDERER), move || {
        view! {
            <label class="dynamic-form__label" for=LOGO_FIELD>
                "Franchise Logo URL"
            </label>
            <input
                class="dynamic-form__input"
                type="url"
                id=LOGO_FIELD
                placeholder="https://"
                prop:value=move || logo.get()
                on:input=move |ev| logo.set(event_target_value(&ev))
            />
            {move || {
                let url = logo.get();
                (!url.trim().is_empty())
                    .then(|| view! { <img class="dynamic-form__logo-preview" src=url alt="Franchise logo" /> })
            }}
        }
    });

    let form = match initial {
        Some(initial) => view! {
            <DynamicForm
                fields=fields
                entity_name=ENTITY
                mode=mode
                on_submit=on_submit
                initial_data=initial
                renderers=renderers
            />
        }
        .into_any(),
        None => view! {
            <DynamicForm fields=fields entity_name=ENTITY mode=mode on_submit=on_submit renderers=renderers />
        }
        .into_any(),
    };

    view! { <div class="form-page">{form}</div> }.into_any()
}
