//! In-memory roster mirrored to a storage slot

use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use super::{StateStorage, StoreError};
use crate::roster::{Boss, default_roster};
use crate::time_codec::{instant_from_millis, most_recent_clock_time, parse_duration};

/// Ordered list of tracked bosses backed by a `StateStorage` slot.
///
/// Mutations that address a boss by index are no-ops for indices past the end
/// and return `Ok(false)`. Every successful mutation persists the full list
/// before returning; if the write fails the in-memory change is kept and the
/// error is returned.
#[derive(Debug)]
pub struct BossStore<S: StateStorage> {
    bosses: Vec<Boss>,
    storage: S,
    key: String,
}

impl<S: StateStorage> BossStore<S> {
    /// Rehydrate the roster stored under `key`.
    ///
    /// Falls back to the seed roster when nothing is stored or the snapshot
    /// does not decode. A kill stamp outside the representable date range
    /// makes the snapshot unreadable too. Read failures are logged, never
    /// returned.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let bosses = match storage.get(&key) {
            Some(raw) => match decode_roster(&raw) {
                Ok(bosses) => {
                    tracing::debug!(key = %key, count = bosses.len(), "Loaded boss roster");
                    bosses
                }
                Err(reason) => {
                    tracing::warn!(
                        key = %key,
                        error = %reason,
                        "Stored boss roster unreadable, using defaults"
                    );
                    default_roster()
                }
            },
            None => {
                tracing::info!(key = %key, "No stored boss roster, seeding defaults");
                default_roster()
            }
        };

        Self {
            bosses,
            storage,
            key,
        }
    }

    pub fn bosses(&self) -> &[Boss] {
        &self.bosses
    }

    pub fn get(&self, index: usize) -> Option<&Boss> {
        self.bosses.get(index)
    }

    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Record a kill at `at_ms` (epoch milliseconds)
    pub fn mark_killed(&mut self, index: usize, at_ms: i64) -> Result<bool, StoreError> {
        self.update(index, |boss| boss.killed_at = Some(at_ms))
    }

    /// Forget the last kill
    pub fn reset(&mut self, index: usize) -> Result<bool, StoreError> {
        self.update(index, |boss| boss.killed_at = None)
    }

    /// Back-date a kill to the most recent occurrence of `time` not after `now`
    pub fn set_killed_at_clock_time<Tz: TimeZone>(
        &mut self,
        index: usize,
        time: NaiveTime,
        now: &DateTime<Tz>,
    ) -> Result<bool, StoreError> {
        let killed_at = most_recent_clock_time(now, time).timestamp_millis();
        self.update(index, |boss| boss.killed_at = Some(killed_at))
    }

    /// Append a new boss from form input, returning its index.
    ///
    /// Rejects a blank name or a respawn text without a positive duration,
    /// leaving the roster untouched. Duplicate names are allowed.
    pub fn add(&mut self, name: &str, respawn_text: &str) -> Result<usize, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let respawn_seconds = parse_duration(respawn_text);
        if respawn_seconds == 0 {
            return Err(StoreError::InvalidRespawn {
                input: respawn_text.to_string(),
            });
        }

        self.bosses.push(Boss::new(name, respawn_seconds));
        let index = self.bosses.len() - 1;
        tracing::info!(index, name, respawn_seconds, "Added boss");
        self.persist()?;
        Ok(index)
    }

    /// Delete the boss at `index`; later bosses shift down by one
    pub fn remove(&mut self, index: usize) -> Result<Option<Boss>, StoreError> {
        if index >= self.bosses.len() {
            tracing::debug!(index, len = self.bosses.len(), "Ignoring remove of unknown boss");
            return Ok(None);
        }
        let removed = self.bosses.remove(index);
        tracing::info!(index, name = %removed.name, "Removed boss");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Write the whole roster to storage
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let snapshot = serde_json::to_string(&self.bosses).map_err(StoreError::Serialize)?;
        self.storage.set(&self.key, &snapshot).inspect_err(|err| {
            tracing::error!(key = %self.key, error = %err, "Failed to persist boss roster")
        })
    }

    fn update(&mut self, index: usize, apply: impl FnOnce(&mut Boss)) -> Result<bool, StoreError> {
        let Some(boss) = self.bosses.get_mut(index) else {
            tracing::debug!(index, len = self.bosses.len(), "Ignoring update of unknown boss");
            return Ok(false);
        };
        apply(boss);
        tracing::debug!(index, name = %boss.name, killed_at = ?boss.killed_at, "Updated boss");
        self.persist()?;
        Ok(true)
    }
}

/// Decode a roster snapshot, rejecting kill stamps that cannot be shown
fn decode_roster(raw: &str) -> Result<Vec<Boss>, String> {
    let bosses: Vec<Boss> = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    let out_of_range = bosses
        .iter()
        .find(|boss| boss.killed_at.is_some_and(|ms| instant_from_millis(&Utc, ms).is_none()));
    match out_of_range {
        Some(boss) => Err(format!("kill time of {:?} is out of range", boss.name)),
        None => Ok(bosses),
    }
}
