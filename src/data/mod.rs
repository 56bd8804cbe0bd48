//! Static tables for the NOSTROMO and her crew
//!
//! Everything here is compiled-in, read-only data: ship systems, the crew
//! manifest, mission parameters, log entries, the alert pool and the banners.

pub mod alerts;
pub mod art;
pub mod crew;
pub mod mission;
pub mod systems;

pub use alerts::*;
pub use crew::*;
pub use mission::*;
pub use systems::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
