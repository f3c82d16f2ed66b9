//! Search input whose text leaves through a debounce policy.

use engine::config::UiConfig;
use engine::debounce::{DebouncePolicy, DebouncedInput, InputStep};
use leptos::prelude::*;

use crate::util::debounce::DebounceTimer;

/// Calls `on_search` with the settled text. Without an explicit `policy` the
/// configured search debounce applies.
#[component]
pub fn SearchBar(
    on_search: Callback<String>,
    #[prop(optional)] policy: Option<DebouncePolicy>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let policy = policy
        .or_else(|| use_context::<UiConfig>().map(|config| config.debounce_policy()))
        .unwrap_or_default();
    let input = StoredValue::new(DebouncedInput::new(policy));
    let timer = DebounceTimer::new();
    on_cleanup(move || {
        input.try_update_value(DebouncedInput::dispose);
    });

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        match input.try_update_value(|i| i.change(&text)) {
            Some(InputStep::Emit(text)) => on_search.run(text),
            Some(InputStep::Wait(ticket, delay)) => timer.schedule(delay, move || {
                if let Some(Some(text)) = input.try_update_value(|i| i.settle(ticket)) {
                    on_search.run(text);
                }
            }),
            Some(InputStep::Idle) | None => {}
        }
    };

    view! {
        <input
            class="search-bar"
            type="search"
            placeholder=placeholder.unwrap_or_else(|| "Search".to_owned())
            on:input=on_input
        />
    }
}
