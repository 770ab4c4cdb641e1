use bosswatch_core::{BossStore, TrackerAction, TrackerConfig, TrackerError, TrackerState};
use chrono::Local;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::{AddBossForm, BossTable, EditKillForm};
use crate::storage::LocalStorage;
use crate::utils::alert;

static CSS: Asset = asset!("/assets/styles.css");

const CONFIG_TOML: &str = include_str!("../assets/bosswatch.toml");

type Tracker = TrackerState<LocalStorage>;

fn load_config() -> TrackerConfig {
    TrackerConfig::from_toml_str(CONFIG_TOML).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Bundled config invalid, using defaults");
        TrackerConfig::default()
    })
}

/// Surface a failed action: rejected input blocks on an alert, storage
/// failures show the save warning.
fn report(err: &TrackerError, mut save_failed: Signal<bool>) {
    if err.is_user_facing() {
        tracing::info!(error = %err, "Rejected input");
        alert(&err.to_string());
    } else {
        tracing::error!(error = %err, "Tracker action failed");
        save_failed.set(true);
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let mut tracker = use_signal(|| -> Tracker {
        TrackerState::new(BossStore::load(LocalStorage::open(), config.storage_key.clone()))
    });
    let mut now = use_signal(Local::now);
    let mut save_failed = use_signal(|| false);

    // Refresh countdowns; the task is dropped with the component
    let tick_ms = config.tick_interval();
    use_future(move || async move {
        loop {
            TimeoutFuture::new(tick_ms).await;
            now.set(Local::now());
        }
    });
    use_drop(|| tracing::debug!("Boss timer unmounted"));

    let mut dispatch = move |action: TrackerAction| {
        let at = Local::now();
        let result = tracker.write().dispatch(action, &at);
        if let Err(err) = result {
            report(&err, save_failed);
        }
        now.set(at);
    };

    let (rows, has_selection, add_form, edit_form) = {
        let state = tracker.read();
        (
            state.rows(&now()),
            state.selected().is_some(),
            state.add_form().cloned(),
            state.edit_form().cloned(),
        )
    };

    rsx! {
        link { rel: "stylesheet", href: CSS }

        div { class: "boss-timer",
            h1 { "{config.title}" }

            if save_failed() {
                div { class: "save-warning",
                    span { "Changes could not be saved to browser storage." }
                    button {
                        class: "btn btn-close",
                        onclick: move |_| save_failed.set(false),
                        "X"
                    }
                }
            }

            BossTable { rows, on_action: move |action: TrackerAction| dispatch(action) }

            div { class: "button-container",
                button {
                    id: "addBossBtn",
                    class: "btn",
                    onclick: move |_| dispatch(TrackerAction::OpenAdd),
                    "Add Boss"
                }
                button {
                    id: "deleteSelectedBtn",
                    class: "btn btn-danger",
                    disabled: !has_selection,
                    onclick: move |_| dispatch(TrackerAction::DeleteSelected),
                    "Delete"
                }
            }

            if let Some(draft) = add_form {
                AddBossForm { draft, on_action: move |action: TrackerAction| dispatch(action) }
            }

            if let Some(draft) = edit_form {
                EditKillForm { draft, on_action: move |action: TrackerAction| dispatch(action) }
            }
        }
    }
}
