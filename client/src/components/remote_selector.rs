//! Debounced autocomplete over a caller-supplied fetch function.
//!
//! SYSTEM CONTEXT
//! ==============
//! The parent owns the `SelectorState` signal so it can read the selection or
//! call `reset()` after a submit. This component drives the state from DOM
//! events, runs the fetches it asks for and reports each outcome back with the
//! fetch's sequence tag; superseded responses are dropped by the state.
//!
//! On unmount the pending timer is cancelled and the state is detached so no
//! late timer or response lands in it.

use engine::selector::{FetchRequest, SelectMode, SelectorState, SelectorStep};
use leptos::prelude::*;
use serde_json::Value;

use crate::components::render::OptionsFuture;
use crate::util::debounce::DebounceTimer;

#[component]
pub fn RemoteSelector(
    #[prop(into)] label: String,
    state: RwSignal<SelectorState>,
    fetch: Callback<Option<String>, OptionsFuture>,
    #[prop(optional)] on_select: Option<Callback<Value>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] width: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let timer = DebounceTimer::new();
    let open = RwSignal::new(false);
    on_cleanup(move || {
        state.try_update_untracked(SelectorState::detach);
    });

    let run_fetch = move |request: FetchRequest| {
        let pending = fetch.run(request.query);
        leptos::task::spawn_local(async move {
            let result = pending.await;
            state.try_update(|s| s.complete(request.seq, result));
        });
    };

    let on_focus = move |_| {
        open.set(true);
        if let Some(Some(request)) = state.try_update(SelectorState::focus) {
            run_fetch(request);
        }
    };

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        open.set(true);
        match state.try_update(|s| s.input(&text)) {
            Some(SelectorStep::Fetch(request)) => run_fetch(request),
            Some(SelectorStep::Wait(ticket, delay)) => timer.schedule(delay, move || {
                if let Some(Some(request)) = state.try_update(|s| s.settle(ticket)) {
                    run_fetch(request);
                }
            }),
            Some(SelectorStep::Idle) | None => {}
        }
    };

    let report = move || {
        if let Some(on_select) = on_select {
            on_select.run(state.with_untracked(SelectorState::value));
        }
    };

    let pick = move |item: Value| {
        state.update(|s| s.select(item));
        if state.with_untracked(|s| s.config().mode == SelectMode::Single) {
            open.set(false);
        }
        report();
    };

    let chips = move || {
        state.with(|s| {
            (s.config().mode == SelectMode::Multi).then(|| {
                s.selection()
                    .iter()
                    .map(|item| {
                        let text = s.option_label(item);
                        let item = item.clone();
                        view! {
                            <span class="chip">
                                {text}
                                <button
                                    class="chip__remove"
                                    type="button"
                                    title="Remove"
                                    on:click=move |_| {
                                        state.update(|s| s.remove(&item));
                                        report();
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    })
                    .collect_view()
            })
        })
    };

    let dropdown = move || {
        if !open.get() {
            return None;
        }
        let items = state.with(|s| {
            if s.options().is_empty() {
                let text = if s.is_loading() { "Loading..." } else { "No options" };
                return view! { <li class="remote-selector__empty">{text}</li> }.into_any();
            }
            s.options()
                .iter()
                .map(|item| {
                    let text = s.option_label(item);
                    let selected = s.is_selected(item);
                    let item = item.clone();
                    view! {
                        <li
                            class="remote-selector__option"
                            class=("remote-selector__option--selected", selected)
                            role="option"
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                pick(item.clone());
                            }
                        >
                            {text}
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        });
        Some(view! { <ul class="remote-selector__options" role="listbox">{items}</ul> })
    };

    view! {
        <div class="remote-selector" style=width.map(|w| format!("width: {w}"))>
            <label class="remote-selector__label">
                {label}
                <input
                    class="remote-selector__input"
                    type="text"
                    placeholder=placeholder.unwrap_or_default()
                    autocomplete="off"
                    disabled=move || disabled.get()
                    prop:value=move || state.with(|s| s.query().to_owned())
                    on:focus=on_focus
                    on:input=on_input
                    on:blur=move |_| open.set(false)
                />
            </label>
            <Show when=move || state.with(SelectorState::is_loading)>
                <span class="remote-selector__loading">"Loading..."</span>
            </Show>
            <div class="remote-selector__chips">{chips}</div>
            {move || state.with(|s| s.error().map(|e| view! { <p class="remote-selector__error">{e.to_owned()}</p> }))}
            {dropdown}
        </div>
    }
}
