//! Presentation adapter — flattens a roster entry into the field set the
//! rendering layer expects: composed display name, "N/A"-style defaults for
//! absent attributes, and a jersey-number sort key.

use crate::RosterEntry;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPlayer {
    pub id: String,
    pub display_name: String,
    pub jersey_number: Option<String>,
    pub position: String,
    pub height: String,
    pub weight: String,
    pub age: Option<u32>,
    pub experience: u32,
    /// Parsed jersey number. `None` (absent or unparseable) sorts after
    /// every entry with a valid number.
    pub sort_key: Option<u32>,
}

/// Flatten one roster entry for rendering.
///
/// Display name resolution order: explicit display name, else first+last
/// (trimmed, single space), else the generic name field, else the raw
/// identifier.
pub fn to_display_player(entry: &RosterEntry) -> DisplayPlayer {
    DisplayPlayer {
        id: entry.id.clone(),
        display_name: display_name(entry),
        jersey_number: entry.jersey_number.clone(),
        position: entry.position.clone().unwrap_or_else(|| "N/A".into()),
        height: entry.height.clone().unwrap_or_else(|| "N/A".into()),
        weight: entry.weight.clone().unwrap_or_else(|| "N/A".into()),
        age: entry.age,
        experience: entry.experience.unwrap_or(0),
        sort_key: jersey_sort_key(entry.jersey_number.as_deref()),
    }
}

fn display_name(entry: &RosterEntry) -> String {
    if let Some(name) = non_empty(entry.display_name.as_deref()) {
        return name.to_owned();
    }
    let composed = format!(
        "{} {}",
        entry.first_name.as_deref().unwrap_or(""),
        entry.last_name.as_deref().unwrap_or(""),
    );
    let composed = composed.trim();
    if !composed.is_empty() {
        return composed.to_owned();
    }
    if let Some(name) = non_empty(entry.name.as_deref()) {
        return name.to_owned();
    }
    entry.id.clone()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn jersey_sort_key(number: Option<&str>) -> Option<u32> {
    number.and_then(|n| n.trim().parse::<u32>().ok())
}

/// Order roster entries by jersey number, numberless entries last.
///
/// Returns `Equal` unless one entry genuinely sorts before the other, so a
/// stable sort keeps the original relative order of tied entries across
/// repeated renders of the same input.
pub fn compare_by_jersey(a: &DisplayPlayer, b: &DisplayPlayer) -> Ordering {
    match (a.sort_key, b.sort_key) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Map a full roster for rendering, sorted by jersey number.
pub fn display_roster(roster: &[RosterEntry]) -> Vec<DisplayPlayer> {
    let mut players: Vec<DisplayPlayer> = roster.iter().map(to_display_player).collect();
    players.sort_by(compare_by_jersey);
    players
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, number: Option<&str>) -> RosterEntry {
        RosterEntry {
            id: id.to_owned(),
            jersey_number: number.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn explicit_display_name_wins() {
        let mut e = entry("p1", None);
        e.display_name = Some("J. Tatum".into());
        e.first_name = Some("Jayson".into());
        e.last_name = Some("Tatum".into());
        assert_eq!(to_display_player(&e).display_name, "J. Tatum");
    }

    #[test]
    fn name_composes_from_first_and_last() {
        let mut e = entry("p1", None);
        e.first_name = Some("Jayson".into());
        e.last_name = Some("Tatum".into());
        assert_eq!(to_display_player(&e).display_name, "Jayson Tatum");
    }

    #[test]
    fn lone_last_name_is_trimmed() {
        let mut e = entry("p1", None);
        e.last_name = Some("Tatum".into());
        assert_eq!(to_display_player(&e).display_name, "Tatum");
    }

    #[test]
    fn generic_name_field_then_raw_id() {
        let mut e = entry("p1", None);
        e.name = Some("Jayson Tatum".into());
        assert_eq!(to_display_player(&e).display_name, "Jayson Tatum");
        assert_eq!(to_display_player(&entry("p2", None)).display_name, "p2");
    }

    #[test]
    fn blank_display_name_falls_through() {
        let mut e = entry("p1", None);
        e.display_name = Some("   ".into());
        e.name = Some("Jayson Tatum".into());
        assert_eq!(to_display_player(&e).display_name, "Jayson Tatum");
    }

    #[test]
    fn absent_attributes_render_as_na() {
        let p = to_display_player(&entry("p1", None));
        assert_eq!(p.position, "N/A");
        assert_eq!(p.height, "N/A");
        assert_eq!(p.experience, 0);
    }

    #[test]
    fn jersey_numbers_sort_numerically_with_numberless_last() {
        let roster = vec![
            entry("a", Some("7")),
            entry("b", Some("0")),
            entry("c", None),
            entry("d", Some("23")),
        ];
        let sorted = display_roster(&roster);
        let order: Vec<(&str, Option<&str>)> = sorted
            .iter()
            .map(|p| (p.id.as_str(), p.jersey_number.as_deref()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("b", Some("0")),
                ("a", Some("7")),
                ("d", Some("23")),
                ("c", None),
            ]
        );
    }

    #[test]
    fn numberless_entries_keep_original_relative_order() {
        let roster = vec![
            entry("x", None),
            entry("a", Some("12")),
            entry("y", Some("n/a")),
            entry("z", None),
        ];
        let sorted = display_roster(&roster);
        let tail: Vec<&str> = sorted.iter().skip(1).map(|p| p.id.as_str()).collect();
        assert_eq!(tail, vec!["x", "y", "z"]);
    }

    #[test]
    fn number_zero_is_a_real_number_not_absence() {
        let p = to_display_player(&entry("a", Some("0")));
        assert_eq!(p.sort_key, Some(0));
        assert_eq!(p.jersey_number.as_deref(), Some("0"));
    }
}
