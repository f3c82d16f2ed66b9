//! Loads the record named by the route's `:id` parameter.
//!
//! Shared by the edit and view screens. The load re-runs when the parameter
//! changes; a response for an id that is no longer current is dropped.

use engine::config::UiConfig;
use engine::value::RowId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use serde_json::Value;

use crate::net::api;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RecordLoad {
    #[default]
    Loading,
    Loaded(Value),
    Failed(String),
}

impl RecordLoad {
    pub fn record(&self) -> Option<&Value> {
        match self {
            Self::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// Route id of the current screen, if it parses.
pub fn route_id() -> Memo<Option<RowId>> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("id").as_deref().and_then(RowId::parse))
}

pub fn use_record(resource: &'static str, id: Memo<Option<RowId>>) -> RwSignal<RecordLoad> {
    let base = expect_context::<UiConfig>().api_base;
    let record = RwSignal::new(RecordLoad::Loading);

    Effect::new(move || {
        let Some(current) = id.get() else {
            record.set(RecordLoad::Failed(format!("missing {resource} id")));
            return;
        };
        record.set(RecordLoad::Loading);
        let base = base.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_one(&base, resource, &current).await;
            if id.try_get_untracked().flatten().as_ref() != Some(&current) {
                leptos::logging::log!("{resource}: dropping response for stale id {current}");
                return;
            }
            let outcome = match result {
                Ok(value) => RecordLoad::Loaded(value),
                Err(err) => {
                    leptos::logging::warn!("{resource}: load failed: {err}");
                    RecordLoad::Failed(err.to_string())
                }
            };
            record.try_update(|slot| *slot = outcome);
        });
    });

    record
}
