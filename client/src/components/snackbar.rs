//! Bottom-of-screen notification driven by [`NotifyState`].
//!
//! Each new notice schedules its own hide; dismissing by sequence number
//! keeps an older timer from hiding a newer notice.

use engine::config::UiConfig;
use leptos::prelude::*;

use crate::state::notify::{NotifyState, Severity};

#[component]
pub fn Snackbar() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let hide_ms = use_context::<UiConfig>().map_or(UiConfig::default().notification_hide_ms, |c| c.notification_hide_ms);

    Effect::new(move || {
        let Some(seq) = notify.with(|n| n.current().map(|notice| notice.seq)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let delay = std::time::Duration::from_millis(hide_ms);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                notify.try_update(|n| n.dismiss(seq));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seq, hide_ms);
        }
    });

    move || {
        notify.with(|n| {
            n.current().map(|notice| {
                let seq = notice.seq;
                let modifier = match notice.severity {
                    Severity::Success => "snackbar--success",
                    Severity::Error => "snackbar--error",
                };
                view! {
                    <div class=format!("snackbar {modifier}") role="status">
                        <span class="snackbar__message">{notice.message.clone()}</span>
                        <button
                            class="btn snackbar__close"
                            title="Dismiss"
                            on:click=move |_| {
                                notify.update(|n| {
                                    n.dismiss(seq);
                                });
                            }
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        })
    }
}
