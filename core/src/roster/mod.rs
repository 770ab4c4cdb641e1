//! Tracked bosses
//!
//! A `Boss` is the persisted record (name, respawn interval, last kill).
//! Everything shown in the countdown table is derived from it and the
//! current time; nothing derived is stored.
//!
//! # Lifecycle
//!
//! ```text
//!   Unset ──mark killed / edit──▶ Dead ──time passes──▶ Ready
//!     ▲                            │  ▲                   │
//!     └──────────reset─────────────┘  └─────edit──────────┘
//! ```

mod boss;
mod defaults;

pub use boss::{Boss, BossStatus};
pub use defaults::{DEFAULT_BOSSES, default_roster};
