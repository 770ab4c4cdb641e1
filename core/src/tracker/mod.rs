//! Tracker state machine
//!
//! `TrackerState` holds everything the widget shows: the persisted roster,
//! the selected row and the drafts of the two modal forms. The UI never
//! mutates it directly; it dispatches a `TrackerAction` and re-renders.
//!
//! ```text
//!  click / input ──▶ TrackerAction ──▶ dispatch(action, now) ──▶ BossStore ──▶ storage
//!                                               │
//!  refresh tick ──▶ now ────────────────────▶ rows(now) ──▶ table
//! ```

mod error;
mod view;


use std::fmt::Display;

use chrono::{DateTime, TimeZone};

pub use error::{ADD_BOSS_GUIDANCE, TrackerError};
pub use view::{BossRow, NOT_KILLED, build_rows};

use crate::roster::{Boss, BossStatus};
use crate::store::{BossStore, StateStorage};
use crate::time_codec::{format_clock_input, instant_from_millis, parse_clock_time};

/// Contents of the "Add Boss" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddBossDraft {
    pub name: String,
    /// Free-form respawn text, e.g. `"2h 30m"`
    pub respawn: String,
}

/// Contents of the kill time editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditKillDraft {
    /// Boss being edited
    pub index: usize,
    /// `HH:MM`, empty when the boss was never killed
    pub time: String,
}

/// User intents the widget can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerAction {
    Select(usize),
    MarkKilled(usize),
    Reset(usize),
    Remove(usize),
    DeleteSelected,

    OpenEdit(usize),
    SetEditTime(String),
    SaveEdit,
    CloseEdit,

    OpenAdd,
    SetAddName(String),
    SetAddRespawn(String),
    SubmitAdd,
    CloseAdd,
}

/// Widget state: roster, selection and open forms.
///
/// A form is visible while its draft is `Some`.
#[derive(Debug)]
pub struct TrackerState<S: StateStorage> {
    store: BossStore<S>,
    selected: Option<usize>,
    add_form: Option<AddBossDraft>,
    edit_form: Option<EditKillDraft>,
}

impl<S: StateStorage> TrackerState<S> {
    pub fn new(store: BossStore<S>) -> Self {
        Self {
            store,
            selected: None,
            add_form: None,
            edit_form: None,
        }
    }

    pub fn store(&self) -> &BossStore<S> {
        &self.store
    }

    pub fn bosses(&self) -> &[Boss] {
        self.store.bosses()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn add_form(&self) -> Option<&AddBossDraft> {
        self.add_form.as_ref()
    }

    pub fn edit_form(&self) -> Option<&EditKillDraft> {
        self.edit_form.as_ref()
    }

    /// Table rows as of `now`
    pub fn rows<Tz>(&self, now: &DateTime<Tz>) -> Vec<BossRow>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        build_rows(self.store.bosses(), self.selected, now)
    }

    /// Apply one action.
    ///
    /// Rejected form input is returned as a user-facing error and leaves the
    /// form open with its draft intact. Storage errors are returned after the
    /// in-memory change has been applied.
    pub fn dispatch<Tz>(
        &mut self,
        action: TrackerAction,
        now: &DateTime<Tz>,
    ) -> Result<(), TrackerError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        tracing::trace!(?action, "Dispatching tracker action");

        match action {
            TrackerAction::Select(index) => {
                if index < self.store.len() {
                    self.selected = Some(index);
                }
            }
            TrackerAction::MarkKilled(index) => self.mark_killed(index, now.timestamp_millis())?,
            TrackerAction::Reset(index) => {
                self.store.reset(index)?;
            }
            TrackerAction::Remove(index) => self.remove(index)?,
            TrackerAction::DeleteSelected => {
                if let Some(index) = self.selected {
                    self.remove(index)?;
                }
            }

            TrackerAction::OpenEdit(index) => self.open_edit(index, now),
            TrackerAction::SetEditTime(time) => {
                if let Some(draft) = self.edit_form.as_mut() {
                    draft.time = time;
                }
            }
            TrackerAction::SaveEdit => self.save_edit(now)?,
            TrackerAction::CloseEdit => self.edit_form = None,

            TrackerAction::OpenAdd => self.add_form = Some(AddBossDraft::default()),
            TrackerAction::SetAddName(name) => {
                if let Some(draft) = self.add_form.as_mut() {
                    draft.name = name;
                }
            }
            TrackerAction::SetAddRespawn(respawn) => {
                if let Some(draft) = self.add_form.as_mut() {
                    draft.respawn = respawn;
                }
            }
            TrackerAction::SubmitAdd => self.submit_add()?,
            TrackerAction::CloseAdd => self.add_form = None,
        }

        Ok(())
    }

    fn mark_killed(&mut self, index: usize, now_ms: i64) -> Result<(), TrackerError> {
        let Some(boss) = self.store.get(index) else {
            return Ok(());
        };
        if boss.status(now_ms) == BossStatus::Dead {
            tracing::debug!(index, name = %boss.name, "Boss still dead, ignoring kill");
            return Ok(());
        }
        self.store.mark_killed(index, now_ms)?;
        Ok(())
    }

    /// Remove a boss and keep selection and the open editor pointing at the
    /// same bosses they pointed at before.
    fn remove(&mut self, index: usize) -> Result<(), TrackerError> {
        if index >= self.store.len() {
            return Ok(());
        }

        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        self.edit_form = match self.edit_form.take() {
            Some(draft) if draft.index == index => None,
            Some(draft) if draft.index > index => Some(EditKillDraft {
                index: draft.index - 1,
                ..draft
            }),
            other => other,
        };

        self.store.remove(index)?;
        Ok(())
    }

    fn open_edit<Tz>(&mut self, index: usize, now: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(boss) = self.store.get(index) else {
            return;
        };
        let time = boss
            .killed_at
            .and_then(|ms| instant_from_millis(&now.timezone(), ms))
            .map(|at| format_clock_input(&at))
            .unwrap_or_default();
        self.edit_form = Some(EditKillDraft { index, time });
    }

    fn save_edit<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<(), TrackerError> {
        let Some(draft) = self.edit_form.as_ref() else {
            return Ok(());
        };
        let Some(time) = parse_clock_time(&draft.time) else {
            return Err(TrackerError::InvalidClockTime {
                input: draft.time.clone(),
            });
        };
        let index = draft.index;

        self.edit_form = None;
        self.store.set_killed_at_clock_time(index, time, now)?;
        Ok(())
    }

    fn submit_add(&mut self) -> Result<(), TrackerError> {
        let Some(draft) = self.add_form.as_ref() else {
            return Ok(());
        };
        match self.store.add(&draft.name, &draft.respawn) {
            Err(err) if err.is_validation() => Err(err.into()),
            // Added (even if the write failed), so the form is done
            result => {
                self.add_form = None;
                result.map(|_| ()).map_err(TrackerError::from)
            }
        }
    }
}
