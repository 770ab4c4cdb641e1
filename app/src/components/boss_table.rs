//! Boss countdown table

use bosswatch_core::{BossRow, TrackerAction};
use dioxus::prelude::*;

#[component]
pub fn BossTable(rows: Vec<BossRow>, on_action: EventHandler<TrackerAction>) -> Element {
    rsx! {
        table { class: "boss-table",
            thead {
                tr {
                    th { "Boss Name" }
                    th { "Time Killed" }
                    th { "Respawn Countdown" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody {
                for row in rows {
                    BossTableRow { key: "{row.index}", row: row.clone(), on_action }
                }
            }
        }
    }
}

/// A single boss row. Clicking the row selects it; the action buttons stop
/// propagation so they never change the selection.
#[component]
fn BossTableRow(row: BossRow, on_action: EventHandler<TrackerAction>) -> Element {
    let index = row.index;
    let status_class = format!("status {}", row.status.css_class());
    let status_label = row.status.label();
    let respawn_title = if row.respawns_at.is_empty() {
        String::new()
    } else {
        format!("Respawns at {}", row.respawns_at)
    };

    rsx! {
        tr {
            class: if row.selected { "selected" } else { "" },
            onclick: move |_| on_action.call(TrackerAction::Select(index)),

            td { "{row.name}" }
            td { "{row.killed_at}" }
            td { class: "countdown", title: "{respawn_title}", "{row.countdown}" }
            td { class: "{status_class}", "{status_label}" }
            td { class: "actions",
                button {
                    class: "btn killBtn",
                    disabled: !row.can_mark_killed(),
                    onclick: move |e| {
                        e.stop_propagation();
                        on_action.call(TrackerAction::MarkKilled(index));
                    },
                    "Killed"
                }
                button {
                    class: "btn resetBtn",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_action.call(TrackerAction::Reset(index));
                    },
                    "Reset"
                }
                button {
                    class: "btn editBtn",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_action.call(TrackerAction::OpenEdit(index));
                    },
                    "Edit"
                }
            }
        }
    }
}
