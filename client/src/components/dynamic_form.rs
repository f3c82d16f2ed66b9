//! Generic editable form rendered from field descriptors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every create/edit screen renders through this component. All value,
//! validation and submit bookkeeping lives in `engine::form::FormState`; this
//! file maps DOM events onto it and publishes submit outcomes to the shared
//! notification state.

use engine::FormValues;
use engine::error::FormError;
use engine::field::{FieldDescriptor, FieldKind};
use engine::form::{FormMode, FormState};
use engine::section::divider_after;
use engine::value::display_text;
use leptos::prelude::*;

use crate::components::render::{FieldRenderers, SubmitFuture};
use crate::state::notify::NotifyState;

/// Sectioned form that hands its values to `on_submit`.
///
/// When `initial_data` is given the values re-sync every time it changes,
/// which lets edit screens load the record asynchronously.
#[component]
pub fn DynamicForm(
    fields: Vec<FieldDescriptor>,
    #[prop(into)] entity_name: String,
    mode: FormMode,
    on_submit: Callback<FormValues, SubmitFuture>,
    #[prop(optional, into)] initial_data: Option<Signal<FormValues>>,
    #[prop(optional)] renderers: FieldRenderers,
) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let initial = initial_data.map(|data| data.get_untracked()).unwrap_or_default();
    let state = match FormState::with_initial(fields, mode, &initial) {
        Ok(state) => RwSignal::new(state),
        Err(err) => {
            leptos::logging::warn!("form {entity_name}: {err}");
            return view! { <p class="dynamic-form__error">{err.to_string()}</p> }.into_any();
        }
    };

    if let Some(initial_data) = initial_data {
        Effect::new(move || {
            let data = initial_data.get();
            state.update(|s| s.sync_initial(&data));
        });
    }

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values = match state.try_update(FormState::begin_submit) {
            Some(Ok(values)) => values,
            Some(Err(FormError::Busy)) | None => return,
            Some(Err(err)) => {
                leptos::logging::log!("form: {err}");
                return;
            }
        };
        let pending = on_submit.run(values);
        leptos::task::spawn_local(async move {
            let outcome = pending.await;
            state.update(|s| s.finish_submit(&outcome));
            notify.update(|n| match &outcome {
                Ok(response) => {
                    n.success(&response.message);
                }
                Err(message) => {
                    n.error(message.clone());
                }
            });
        });
    };

    let groups: Vec<(String, Vec<FieldDescriptor>)> = state.with_untracked(|s| {
        s.sections()
            .into_iter()
            .map(|section| (section.name, section.items.into_iter().cloned().collect()))
            .collect()
    });
    let group_count = groups.len();
    let heading = mode.heading(&entity_name);
    let submit_label = heading.clone();

    let body = groups
        .into_iter()
        .enumerate()
        .map(|(index, (name, fields))| {
            let controls = fields
                .into_iter()
                .map(|field| view! { <FormField field=field state=state renderers=renderers.clone() /> })
                .collect_view();
            view! {
                <section class="dynamic-form__section">
                    <h3 class="dynamic-form__section-title">{name}</h3>
                    <div class="dynamic-form__grid">{controls}</div>
                </section>
                {divider_after(index, group_count).then(|| view! { <hr class="dynamic-form__divider" /> })}
            }
        })
        .collect_view();

    view! {
        <form class="dynamic-form" novalidate=true on:submit=on_form_submit>
            <h2 class="dynamic-form__heading">{heading}</h2>
            {body}
            <div class="dynamic-form__actions">
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || state.with(FormState::is_submitting)
                >
                    {submit_label}
                </button>
            </div>
        </form>
    }
    .into_any()
}

#[component]
fn FormField(field: FieldDescriptor, state: RwSignal<FormState>, renderers: FieldRenderers) -> impl IntoView {
    if let FieldKind::Custom(id) = &field.kind {
        return match renderers.get(id) {
            Some(view) => view! { <div class="dynamic-form__field dynamic-form__field--custom">{view.run()}</div> }
                .into_any(),
            None => {
                leptos::logging::warn!("form: no renderer registered for {}", id.0);
                view! { <p class="dynamic-form__error">{format!("{}: renderer unavailable", field.label)}</p> }
                    .into_any()
            }
        };
    }

    let name = field.name.clone();
    let value = {
        let name = name.clone();
        move || state.with(|s| s.value_text(&name))
    };
    let error = {
        let name = name.clone();
        move || state.with(|s| s.error(&name).map(str::to_owned))
    };
    let on_change = {
        let name = name.clone();
        Callback::new(move |raw: String| {
            state.update(|s| {
                if let Err(err) = s.handle_input(&name, &raw) {
                    leptos::logging::log!("form: {err}");
                }
            });
        })
    };
    let disabled = field.disabled;
    let invalid = {
        let error = error.clone();
        move || error().is_some()
    };

    let control = match &field.kind {
        FieldKind::Select(options) => {
            let choices = options
                .iter()
                .map(|opt| {
                    let option_value = display_text(&opt.value);
                    view! { <option value=option_value>{opt.label.clone()}</option> }
                })
                .collect_view();
            view! {
                <select
                    class="dynamic-form__input"
                    id=name.clone()
                    name=name.clone()
                    disabled=disabled
                    prop:value=value
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    <option value="">"Select..."</option>
                    {choices}
                </select>
            }
            .into_any()
        }
        FieldKind::Password => {
            let visible = RwSignal::new(false);
            view! {
                <div class="dynamic-form__password">
                    <input
                        class="dynamic-form__input"
                        type=move || if visible.get() { "text" } else { "password" }
                        id=name.clone()
                        name=name.clone()
                        disabled=disabled
                        prop:value=value
                        on:input=move |ev| on_change.run(event_target_value(&ev))
                    />
                    <button
                        class="btn dynamic-form__toggle"
                        type="button"
                        title="Toggle password visibility"
                        on:click=move |_| visible.update(|v| *v = !*v)
                    >
                        {move || if visible.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
            }
            .into_any()
        }
        kind => view! {
            <input
                class="dynamic-form__input"
                type=kind.input_type()
                id=name.clone()
                name=name.clone()
                disabled=disabled
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="dynamic-form__field" class=("dynamic-form__field--invalid", invalid)>
            <label class="dynamic-form__label" for=name>
                {field.label.clone()}
                {field.required.then_some(" *")}
            </label>
            {control}
            {move || error().map(|message| view! { <p class="dynamic-form__helper">{message}</p> })}
        </div>
    }
    .into_any()
}
