//! Generic paginated table rendered from column descriptors.
//!
//! SYSTEM CONTEXT
//! ==============
//! A pure view over rows and pagination owned by the parent: every user action
//! leaves as a callback and the parent decides whether to fetch, navigate or
//! confirm. Sorting and row checkboxes are local to the visible page.

use engine::config::UiConfig;
use engine::debounce::DebouncePolicy;
use engine::table::{EMPTY_TEXT, Pagination, RowActions, RowSelection, SortDirection, SortState, TableBody};
use engine::value::{NULL, RowId};
use leptos::prelude::*;
use serde_json::Value;

use crate::components::render::TableColumn;
use crate::components::search_bar::SearchBar;

#[component]
pub fn DynamicTable(
    #[prop(into)] rows: Signal<Vec<Value>>,
    columns: Vec<TableColumn>,
    #[prop(into)] title: String,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] pagination: Signal<Pagination>,
    on_page_change: Callback<u32>,
    on_limit_change: Callback<u32>,
    on_search_change: Callback<String>,
    #[prop(optional)] on_view: Option<Callback<RowId>>,
    #[prop(optional)] on_edit: Option<Callback<RowId>>,
    #[prop(optional)] on_delete: Option<Callback<Vec<RowId>>>,
    #[prop(default = true)] show_default_actions: bool,
    #[prop(optional)] limit_options: Option<Vec<u32>>,
    #[prop(optional)] debounce: Option<DebouncePolicy>,
) -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let limit_options = limit_options.unwrap_or_else(|| config.page_size_options.clone());
    let search_policy = debounce.unwrap_or_else(|| config.debounce_policy());
    let actions = RowActions {
        view: on_view.is_some(),
        edit: on_edit.is_some(),
        delete: on_delete.is_some(),
        show_default: show_default_actions,
    };
    let columns = StoredValue::new(columns);
    let sort = RwSignal::new(SortState::default());
    let selection = RwSignal::new(RowSelection::default());

    // Checkboxes follow the rows: ids that left the page are unchecked.
    Effect::new(move || {
        rows.with(|rows| selection.maybe_update(|s| s.retain_rows(rows)));
    });

    let sorted = Memo::new(move |_| {
        let mut page = rows.get();
        sort.with(|s| s.apply(&mut page));
        page
    });

    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let field = col.descriptor.field.clone();
                    let header = col.descriptor.header_name.clone();
                    if !col.descriptor.sortable {
                        return view! { <th class="dynamic-table__th">{header}</th> }.into_any();
                    }
                    let indicator = {
                        let field = field.clone();
                        move || match sort.with(|s| s.direction_for(&field)) {
                            Some(SortDirection::Asc) => " ▲",
                            Some(SortDirection::Desc) => " ▼",
                            None => "",
                        }
                    };
                    view! {
                        <th class="dynamic-table__th dynamic-table__th--sortable">
                            <button class="dynamic-table__sort" on:click=move |_| sort.update(|s| s.toggle(&field))>
                                {header}
                                {indicator}
                            </button>
                        </th>
                    }
                    .into_any()
                })
                .collect_view()
        })
    };

    let column_count = columns.with_value(Vec::len) + 1 + usize::from(actions.visible());

    let body = move || match TableBody::of(loading.get(), &sorted.read()) {
        TableBody::Loading => view! {
            <tr>
                <td class="dynamic-table__status" colspan=column_count.to_string()>
                    <progress class="dynamic-table__progress"></progress>
                </td>
            </tr>
        }
        .into_any(),
        TableBody::Empty => view! {
            <tr>
                <td class="dynamic-table__status" colspan=column_count.to_string()>{EMPTY_TEXT}</td>
            </tr>
        }
        .into_any(),
        TableBody::Rows => sorted
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                view! {
                    <TableRow
                        row=row
                        index=index
                        columns=columns
                        actions=actions
                        selection=selection
                        on_view=on_view
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }
            })
            .collect_view()
            .into_any(),
    };

    let bulk_delete = move |_| {
        let ids = selection.with(|s| s.ids().to_vec());
        if let Some(on_delete) = on_delete
            && !ids.is_empty()
        {
            on_delete.run(ids);
        }
    };

    let limit_choices = limit_options
        .into_iter()
        .map(|limit| view! { <option value=limit.to_string()>{limit}</option> })
        .collect_view();

    view! {
        <div class="dynamic-table">
            <header class="dynamic-table__header">
                <h2 class="dynamic-table__title">{title}</h2>
                <span class="dynamic-table__spacer"></span>
                <Show when=move || actions.delete && !selection.with(RowSelection::is_empty)>
                    <button class="btn btn--danger dynamic-table__bulk-delete" on:click=bulk_delete>
                        {move || format!("Delete {} selected", selection.with(RowSelection::len))}
                    </button>
                </Show>
                <SearchBar on_search=on_search_change policy=search_policy />
            </header>
            <table class="dynamic-table__table">
                <thead>
                    <tr>
                        <th class="dynamic-table__th dynamic-table__th--check">
                            <input
                                type="checkbox"
                                title="Select all"
                                prop:checked=move || selection.with(|s| s.all_selected(&sorted.read()))
                                prop:indeterminate=move || selection.with(|s| s.is_partial(&sorted.read()))
                                on:change=move |_| selection.update(|s| s.toggle_all(&sorted.read()))
                            />
                        </th>
                        {header_cells}
                        {actions.visible().then(|| view! { <th class="dynamic-table__th">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <footer class="dynamic-table__footer">
                <label class="dynamic-table__limit">
                    "Rows per page"
                    <select
                        prop:value=move || pagination.get().limit.to_string()
                        on:change=move |ev| {
                            if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                                on_limit_change.run(limit);
                            }
                        }
                    >
                        {limit_choices}
                    </select>
                </label>
                <span class="dynamic-table__range">{move || pagination.get().range_label()}</span>
                <button
                    class="btn dynamic-table__prev"
                    title="Previous page"
                    disabled=move || !pagination.get().has_previous()
                    on:click=move |_| on_page_change.run(pagination.get_untracked().page.saturating_sub(1))
                >
                    "‹"
                </button>
                <button
                    class="btn dynamic-table__next"
                    title="Next page"
                    disabled=move || !pagination.get().has_next()
                    on:click=move |_| on_page_change.run(pagination.get_untracked().page.saturating_add(1))
                >
                    "›"
                </button>
            </footer>
        </div>
    }
}

#[component]
fn TableRow(
    row: Value,
    index: usize,
    columns: StoredValue<Vec<TableColumn>>,
    actions: RowActions,
    selection: RwSignal<RowSelection>,
    on_view: Option<Callback<RowId>>,
    on_edit: Option<Callback<RowId>>,
    on_delete: Option<Callback<Vec<RowId>>>,
) -> impl IntoView {
    let id = RowId::of(&row);
    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let content = match &col.render {
                    Some(render) => render.run(col.descriptor.cell(&row).unwrap_or(&NULL), &row),
                    None => col.descriptor.cell_text(&row).into_any(),
                };
                view! { <td class="dynamic-table__td">{content}</td> }
            })
            .collect_view()
    });

    let check = id.clone().map(|id| {
        let checked_id = id.clone();
        view! {
            <input
                type="checkbox"
                prop:checked=move || selection.with(|s| s.is_selected(&checked_id))
                on:change=move |_| selection.update(|s| s.toggle(&id))
            />
        }
    });

    let row_actions = actions.visible().then(|| {
        let buttons = id.clone().map(|id| {
            let view_id = id.clone();
            let edit_id = id.clone();
            view! {
                {on_view.map(|cb| view! { <button class="btn btn--link" title="View" on:click=move |_| cb.run(view_id.clone())>"View"</button> })}
                {on_edit.map(|cb| view! { <button class="btn btn--link" title="Edit" on:click=move |_| cb.run(edit_id.clone())>"Edit"</button> })}
                {on_delete.map(|cb| view! { <button class="btn btn--link btn--danger" title="Delete" on:click=move |_| cb.run(vec![id.clone()])>"Delete"</button> })}
            }
        });
        view! { <td class="dynamic-table__td dynamic-table__td--actions">{buttons}</td> }
    });

    let key = id.map_or_else(|| format!("row-{index}"), |id| id.to_string());

    view! {
        <tr class="dynamic-table__row" data-key=key>
            <td class="dynamic-table__td dynamic-table__td--check">{check}</td>
            {cells}
            {row_actions}
        </tr>
    }
}
