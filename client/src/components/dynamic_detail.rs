//! Read-only sectioned view of one record.
//!
//! `engine::detail::build_detail` resolves every field against the record;
//! this component only turns the resolved items into markup. Sections render
//! as `<details>` accordions with the first one open.

use engine::detail::{DetailField, DetailItem, DetailSection, MISSING_COLUMNS, MISSING_VALUE, build_detail, heading};
use leptos::prelude::*;
use serde_json::Value;

use crate::components::render::RecordRenderers;

#[component]
pub fn DynamicDetail(
    fields: Vec<DetailField>,
    #[prop(into)] data: Signal<Value>,
    #[prop(into)] entity_name: String,
    #[prop(optional)] renderers: RecordRenderers,
) -> impl IntoView {
    let fields = StoredValue::new(fields);
    let renderers = StoredValue::new(renderers);

    let sections = move || {
        data.with(|record| {
            fields.with_value(|fields| {
                build_detail(fields, record)
                    .into_iter()
                    .map(|section| render_section(section, record, renderers))
                    .collect_view()
            })
        })
    };

    view! {
        <article class="dynamic-detail">
            <h2 class="dynamic-detail__heading">{heading(&entity_name)}</h2>
            {sections}
        </article>
    }
}

fn render_section(section: DetailSection<'_>, record: &Value, renderers: StoredValue<RecordRenderers>) -> AnyView {
    let items = section
        .items
        .into_iter()
        .map(|item| render_item(item, record, renderers))
        .collect_view();
    view! {
        <details class="dynamic-detail__section" open=section.expanded>
            <summary class="dynamic-detail__section-title">{section.name}</summary>
            <dl class="dynamic-detail__grid">{items}</dl>
        </details>
    }
    .into_any()
}

fn render_item(item: DetailItem<'_>, record: &Value, renderers: StoredValue<RecordRenderers>) -> AnyView {
    let label = item.field().label.clone();
    let wide = matches!(item, DetailItem::Table { .. } | DetailItem::Custom { .. });
    let content = match item {
        DetailItem::Scalar { text, .. } => view! { <span class="dynamic-detail__value">{text}</span> }.into_any(),
        DetailItem::TextList { items, .. } if items.is_empty() => {
            view! { <span class="dynamic-detail__value">{MISSING_VALUE}</span> }.into_any()
        }
        DetailItem::TextList { items, .. } => view! {
            <div class="dynamic-detail__chips">
                {items.into_iter().map(|text| view! { <span class="chip">{text}</span> }).collect_view()}
            </div>
        }
        .into_any(),
        DetailItem::Table { columns, rows, link_label, .. } => {
            let headers = columns
                .iter()
                .map(|col| view! { <th>{col.header_name.clone()}</th> })
                .collect_view();
            let link_label = link_label.map(str::to_owned);
            let has_links = link_label.is_some();
            let body = rows
                .into_iter()
                .map(|row| {
                    let cells = row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view();
                    let link = has_links.then(|| {
                        let anchor = row.link.map(|href| {
                            view! { <a class="btn btn--link" href=href>{link_label.clone()}</a> }
                        });
                        view! { <td class="dynamic-detail__row-action">{anchor}</td> }
                    });
                    view! {
                        <tr data-key=row.key>
                            {cells}
                            {link}
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <table class="dynamic-detail__table">
                    <thead>
                        <tr>
                            {headers}
                            {has_links.then(|| view! { <th>"Actions"</th> })}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            }
            .into_any()
        }
        DetailItem::MissingColumns { .. } => {
            view! { <p class="dynamic-detail__notice">{MISSING_COLUMNS}</p> }.into_any()
        }
        DetailItem::Custom { renderer, .. } => renderers
            .with_value(|r| r.get(renderer).map(|render| render.run(record)))
            .unwrap_or_else(|| {
                leptos::logging::warn!("detail: no renderer registered for {}", renderer.0);
                view! { <span class="dynamic-detail__value">{MISSING_VALUE}</span> }.into_any()
            }),
    };

    view! {
        <div class="dynamic-detail__item" class=("dynamic-detail__item--wide", wide)>
            <dt class="dynamic-detail__label">{label}</dt>
            <dd>{content}</dd>
        </div>
    }
    .into_any()
}
