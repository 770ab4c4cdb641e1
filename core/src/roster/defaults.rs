//! Seed roster used on first run and when the stored snapshot is unreadable

use super::Boss;
use crate::time_codec::parse_duration;

/// Default bosses with their respawn intervals, in display order
pub const DEFAULT_BOSSES: &[(&str, &str)] = &[
    ("Venatus", "10h"),
    ("Viorent", "10h"),
    ("Ego", "21h"),
    ("Livera", "24h"),
    ("Araneo", "24h"),
    ("Undomiel", "24h"),
    ("Lady Dalia", "18h"),
    ("General Aquleus", "29h"),
    ("Amentis", "29h"),
    ("Baron Braudmore", "32h"),
    ("Wannitas", "48h"),
    ("Metus", "48h"),
    ("Duplican", "48h"),
    ("Shuliar", "35h"),
];

/// Build the seed roster, every boss never killed
pub fn default_roster() -> Vec<Boss> {
    DEFAULT_BOSSES
        .iter()
        .map(|(name, respawn)| Boss::new(*name, parse_duration(respawn)))
        .collect()
}
