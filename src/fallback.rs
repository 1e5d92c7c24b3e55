//! Deterministic placeholder data shown when real data cannot be resolved.
//!
//! Everything here is pure: computable with zero I/O even when every
//! upstream call has failed. Invoked only after the resolver reports a
//! failure, never speculatively.

use crate::{RosterEntry, Team};

/// Neutral placeholder team carrying the requested identifier.
pub fn default_team(id: &str) -> Team {
    Team {
        id: id.to_owned(),
        city: "Sample City".into(),
        name: "Team".into(),
        abbreviation: "SAM".into(),
        slug: "sample-team".into(),
        colors: None,
    }
}

/// Fixed two-entry placeholder roster, stable across calls.
pub fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry {
            id: "1".into(),
            first_name: Some("Sample".into()),
            last_name: Some("Player 1".into()),
            display_name: Some("Sample Player 1".into()),
            name: Some("Sample Player 1".into()),
            jersey_number: Some("1".into()),
            position: Some("PG".into()),
            height: Some("6'2\"".into()),
            weight: Some("190 lbs".into()),
            age: Some(25),
            experience: Some(3),
        },
        RosterEntry {
            id: "2".into(),
            first_name: Some("Sample".into()),
            last_name: Some("Player 2".into()),
            display_name: Some("Sample Player 2".into()),
            name: Some("Sample Player 2".into()),
            jersey_number: Some("2".into()),
            position: Some("SG".into()),
            height: Some("6'4\"".into()),
            weight: Some("200 lbs".into()),
            age: Some(27),
            experience: Some(5),
        },
    ]
}

/// Primary/secondary colors for the teams with curated stats pages; a
/// neutral pair for everyone else.
pub fn team_colors(team_id: &str) -> (&'static str, &'static str) {
    match team_id {
        "celtics" => ("#007A33", "#BA9653"),
        "lakers" => ("#552583", "#FDB927"),
        "warriors" => ("#1D428A", "#FFC72C"),
        _ => ("#000000", "#FFFFFF"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_team_carries_requested_id() {
        let team = default_team("999999999");
        assert_eq!(team.id, "999999999");
        assert_eq!(team.abbreviation, "SAM");
    }

    #[test]
    fn default_roster_is_stable_across_calls() {
        assert_eq!(default_roster(), default_roster());
        assert_eq!(default_roster().len(), 2);
    }

    #[test]
    fn unknown_team_gets_neutral_colors() {
        assert_eq!(team_colors("celtics").0, "#007A33");
        assert_eq!(team_colors("sonics"), ("#000000", "#FFFFFF"));
    }
}
