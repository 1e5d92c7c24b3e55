pub mod client;
pub mod display;
pub mod fallback;
pub mod scan;
pub mod stats;
pub mod wire;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the content API wire format
// ---------------------------------------------------------------------------

/// An opaque coach record. The upstream coach shape is passed through to the
/// rendering layer untouched.
pub type CoachRecord = serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Provider-assigned identifier, stable within one upstream snapshot.
    /// Always held as a string even when the wire carries a number.
    pub id: String,
    pub city: String,
    pub name: String,        // "Celtics"
    pub abbreviation: String, // "BOS"
    pub slug: String,        // "celtics"
    pub colors: Option<TeamColors>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
}

/// One roster slot. Name parts are individually optional; the display name
/// is derived in `display::to_display_player` from whichever are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub name: Option<String>,
    /// Kept as a string: "no number" is a distinct state from "number zero".
    pub jersey_number: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub age: Option<u32>,
    pub experience: Option<u32>,
}

/// Team metadata and roster reconciled into one unit. Built fresh per
/// request and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CombinedTeamResult {
    pub team: Team,
    pub roster: Vec<RosterEntry>,
    pub coaches: Vec<CoachRecord>,
}

/// Request-surface view of a combined result. `advisory` is set when
/// placeholder content was substituted for an unavailable upstream, so the
/// consumer can render a non-fatal note instead of an error page.
#[derive(Debug, Clone, Default)]
pub struct TeamPage {
    pub team: Team,
    pub roster: Vec<RosterEntry>,
    pub coaches: Vec<CoachRecord>,
    pub advisory: Option<String>,
}

impl TeamPage {
    pub fn from_combined(result: CombinedTeamResult) -> Self {
        Self {
            team: result.team,
            roster: result.roster,
            coaches: result.coaches,
            advisory: None,
        }
    }
}
