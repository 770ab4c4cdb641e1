//! Add-boss and kill-time modal forms

use bosswatch_core::{AddBossDraft, EditKillDraft, TrackerAction};
use dioxus::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Add Boss Form
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn AddBossForm(draft: AddBossDraft, on_action: EventHandler<TrackerAction>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_action.call(TrackerAction::CloseAdd),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Add Boss" }
                    span {
                        class: "close",
                        onclick: move |_| on_action.call(TrackerAction::CloseAdd),
                        "×"
                    }
                }

                div { class: "form-field",
                    label { class: "form-label", "Boss Name:" }
                    input {
                        r#type: "text",
                        class: "input w-full",
                        placeholder: "Enter boss name",
                        value: "{draft.name}",
                        oninput: move |e| on_action.call(TrackerAction::SetAddName(e.value()))
                    }
                }

                div { class: "form-field",
                    label { class: "form-label", "Respawn Time:" }
                    input {
                        r#type: "text",
                        class: "input w-full",
                        placeholder: "e.g. 2h 30m",
                        value: "{draft.respawn}",
                        oninput: move |e| on_action.call(TrackerAction::SetAddRespawn(e.value()))
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-success",
                        onclick: move |_| on_action.call(TrackerAction::SubmitAdd),
                        "Add Boss"
                    }
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kill Time Form
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn EditKillForm(draft: EditKillDraft, on_action: EventHandler<TrackerAction>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_action.call(TrackerAction::CloseEdit),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Edit Kill Time" }
                    span {
                        class: "close",
                        onclick: move |_| on_action.call(TrackerAction::CloseEdit),
                        "×"
                    }
                }

                div { class: "form-field",
                    label { class: "form-label", "Time Killed:" }
                    input {
                        r#type: "time",
                        class: "input",
                        value: "{draft.time}",
                        oninput: move |e| on_action.call(TrackerAction::SetEditTime(e.value()))
                    }
                    span { class: "hint", "A time later than now counts as yesterday" }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-success",
                        onclick: move |_| on_action.call(TrackerAction::SaveEdit),
                        "Save"
                    }
                }
            }
        }
    }
}
