//! Shape scanner — locates the record collection inside an upstream document
//! whose exact shape varies by deployment.
//!
//! The content API has shipped the team listing as `results.items`, as a bare
//! `results` array, as `league.standard` (flagged by franchise status), and
//! as a top-level `teams` array. Rather than chasing one schema, the scanner
//! tries an ordered hint list and falls back to a two-level breadth scan for
//! the first array-valued field. Pure function over a decoded document; no
//! I/O.

use serde_json::Value;

/// One candidate location for the collection, tried in order.
#[derive(Debug, Clone, Copy)]
pub enum PathHint {
    /// Array expected at this field path, e.g. `["results", "items"]`.
    Path(&'static [&'static str]),
    /// Array expected at this path, filtered to elements whose `flag` field
    /// is boolean `true` (drops historical/inactive franchise records).
    FilteredByFlag {
        path: &'static [&'static str],
        flag: &'static str,
    },
}

/// Candidate locations for the teams listing, in the order the upstream has
/// been observed to use them.
pub const TEAM_COLLECTION_HINTS: &[PathHint] = &[
    PathHint::Path(&["results", "items"]),
    PathHint::Path(&["results"]),
    PathHint::FilteredByFlag { path: &["league", "standard"], flag: "isNBAFranchise" },
    PathHint::Path(&["teams"]),
];

/// No array was reachable by any hint or within two levels of the top.
/// Carries the top-level field names actually present, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoCollection {
    pub available_keys: Vec<String>,
}

/// Locate the record collection in `document`.
///
/// Priority order, first match wins:
/// 1. each hint in order;
/// 2. the document itself, if it is an array;
/// 3. the first array-valued top-level field, else the first array-valued
///    field inside any record-valued top-level field;
/// 4. `NoCollection` listing the top-level field names.
///
/// Deterministic: the same document and hint order always yield the same
/// collection (unchanged in element order) or the same failure.
pub fn locate_collection(
    document: &Value,
    hints: &[PathHint],
) -> Result<Vec<Value>, NoCollection> {
    for hint in hints {
        match *hint {
            PathHint::Path(path) => {
                if let Some(items) = array_at(document, path) {
                    return Ok(items.to_vec());
                }
            }
            PathHint::FilteredByFlag { path, flag } => {
                if let Some(items) = array_at(document, path) {
                    return Ok(items
                        .iter()
                        .filter(|item| item.get(flag).and_then(Value::as_bool) == Some(true))
                        .cloned()
                        .collect());
                }
            }
        }
    }

    if let Some(items) = document.as_array() {
        return Ok(items.clone());
    }

    if let Some(map) = document.as_object() {
        for value in map.values() {
            if let Some(items) = value.as_array() {
                return Ok(items.clone());
            }
        }
        for value in map.values() {
            if let Some(nested) = value.as_object() {
                for sub in nested.values() {
                    if let Some(items) = sub.as_array() {
                        return Ok(items.clone());
                    }
                }
            }
        }
    }

    Err(NoCollection {
        available_keys: document
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default(),
    })
}

fn array_at<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    let mut current = document;
    for field in path {
        current = current.get(field)?;
    }
    current.as_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn teams() -> Value {
        json!([{"tid": "1610612738"}, {"tid": "1610612747"}])
    }

    #[test]
    fn results_items_shape_returns_collection_unchanged() {
        let doc = json!({"results": {"items": teams()}});
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(Value::Array(found), teams());
    }

    #[test]
    fn bare_results_array_shape() {
        let doc = json!({"results": teams()});
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(Value::Array(found), teams());
    }

    #[test]
    fn league_standard_shape_filters_by_franchise_flag() {
        let doc = json!({"league": {"standard": [
            {"teamId": "1", "isNBAFranchise": true},
            {"teamId": "2", "isNBAFranchise": false},
            {"teamId": "3"},
            {"teamId": "4", "isNBAFranchise": true},
        ]}});
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        let ids: Vec<&str> = found.iter().filter_map(|t| t["teamId"].as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn top_level_teams_shape() {
        let doc = json!({"teams": teams()});
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(Value::Array(found), teams());
    }

    #[test]
    fn bare_array_document() {
        let doc = teams();
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(Value::Array(found), teams());
    }

    #[test]
    fn hint_order_beats_generic_scan() {
        // "data" would win a generic scan; the hinted path must win instead.
        let doc = json!({"data": [1, 2, 3], "results": {"items": teams()}});
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(Value::Array(found), teams());
    }

    #[test]
    fn generic_scan_finds_top_level_array() {
        let doc = json!({"payload": teams()});
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(Value::Array(found), teams());
    }

    #[test]
    fn generic_scan_reaches_one_level_down() {
        let doc = json!({"meta": {"count": 2}, "payload": {"entries": teams()}});
        let found = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(Value::Array(found), teams());
    }

    #[test]
    fn no_array_anywhere_reports_top_level_keys() {
        let doc = json!({"error": "maintenance", "status": {"code": 503}});
        let err = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap_err();
        assert_eq!(err.available_keys, vec!["error", "status"]);
    }

    #[test]
    fn scan_is_deterministic() {
        let doc = json!({"alpha": {"x": 1}, "beta": teams(), "gamma": [{"other": true}]});
        let first = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        let second = locate_collection(&doc, TEAM_COLLECTION_HINTS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scalar_document_fails_with_empty_key_list() {
        let err = locate_collection(&json!(42), TEAM_COLLECTION_HINTS).unwrap_err();
        assert!(err.available_keys.is_empty());
    }
}
