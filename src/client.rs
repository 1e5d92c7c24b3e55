use crate::scan::{self, TEAM_COLLECTION_HINTS};
use crate::wire::RosterResponse;
use crate::{fallback, CoachRecord, CombinedTeamResult, RosterEntry, Team, TeamColors, TeamPage};
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const CONTENT_API_BASE: &str = "https://content-api-prod.nba.com/public/1/leagues/nba";

/// NBA directory client backed by the public content API.
#[derive(Debug, Clone)]
pub struct NbaApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for NbaApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("nba-api/0.1 (team directory)")
                .build()
                .unwrap_or_default(),
            base_url: CONTENT_API_BASE.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    /// The teams listing held no recognizable collection. Carries the
    /// top-level field names that were actually present.
    NoCollection { available_keys: Vec<String> },
    /// The identifier was absent from the resolved collection. Terminal:
    /// no roster fetch is attempted.
    TeamNotFound(String),
    /// The team resolved but the roster call failed. Distinct from
    /// `TeamNotFound` so callers can show team info with placeholder roster.
    RosterFetch { team_id: String, source: Box<ApiError> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NoCollection { available_keys } => write!(
                f,
                "No team collection found in response. Top-level keys: {available_keys:?}"
            ),
            ApiError::TeamNotFound(id) => write!(f, "Team not found: {id}"),
            ApiError::RosterFetch { team_id, source } => {
                write!(f, "Roster fetch failed for team {team_id}: {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl NbaApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different base URL. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Fetch the league team listing.
    ///
    /// The collection location inside the response varies by deployment;
    /// `scan::locate_collection` probes the known shapes in order. Shape and
    /// transport failures propagate: there is no safe placeholder for the
    /// entire league.
    pub async fn fetch_teams(&self) -> ApiResult<Vec<Team>> {
        let url = format!("{}/teams", self.base_url);
        let document = self.get_json(&url).await?;
        let collection = scan::locate_collection(&document, TEAM_COLLECTION_HINTS)
            .map_err(|e| ApiError::NoCollection { available_keys: e.available_keys })?;
        debug!("teams listing resolved to {} records", collection.len());
        Ok(collection.iter().map(map_team).collect())
    }

    /// Resolve team and roster as one dependent two-step chain.
    ///
    /// The team is resolved first; `TeamNotFound` is terminal and no roster
    /// call is made. A roster failure after a successful team resolution
    /// surfaces as `RosterFetch`. Roster and coaches default to empty when
    /// the payload omits them — optional content, unlike the team itself.
    pub async fn fetch_combined(&self, team_id: &str) -> ApiResult<CombinedTeamResult> {
        let team = self.resolve_team_by_id(team_id).await?;
        let (roster, coaches) =
            self.fetch_roster(team_id).await.map_err(|source| ApiError::RosterFetch {
                team_id: team_id.to_owned(),
                source: Box::new(source),
            })?;
        Ok(CombinedTeamResult { team, roster, coaches })
    }

    /// The team page surface: combined result with the recovery policy
    /// applied.
    ///
    /// `TeamNotFound` stays a not-found outcome. Any other failure is
    /// recovered locally with placeholder content and an advisory message,
    /// so the consumer renders a note instead of an error page. An empty but
    /// structurally valid roster is real content and is never substituted.
    pub async fn fetch_team_page(&self, team_id: &str) -> ApiResult<TeamPage> {
        let team = match self.resolve_team_by_id(team_id).await {
            Ok(team) => team,
            Err(err @ ApiError::TeamNotFound(_)) => return Err(err),
            Err(err) => {
                warn!("team {team_id} unavailable, substituting sample data: {err}");
                return Ok(TeamPage {
                    team: fallback::default_team(team_id),
                    roster: fallback::default_roster(),
                    coaches: Vec::new(),
                    advisory: Some(format!("Using sample data due to API limitations. {err}")),
                });
            }
        };

        match self.fetch_roster(team_id).await {
            Ok((roster, coaches)) => Ok(TeamPage { team, roster, coaches, advisory: None }),
            Err(err) => {
                warn!("roster fetch failed for team {team_id}, substituting sample roster: {err}");
                Ok(TeamPage {
                    team,
                    roster: fallback::default_roster(),
                    coaches: Vec::new(),
                    advisory: Some(format!("Using sample roster due to API limitations. {err}")),
                })
            }
        }
    }

    async fn resolve_team_by_id(&self, team_id: &str) -> ApiResult<Team> {
        let url = format!("{}/teams", self.base_url);
        let document = self.get_json(&url).await?;
        let collection = scan::locate_collection(&document, TEAM_COLLECTION_HINTS)
            .map_err(|e| ApiError::NoCollection { available_keys: e.available_keys })?;
        resolve_team(&collection, team_id)
            .ok_or_else(|| ApiError::TeamNotFound(team_id.to_owned()))
    }

    async fn fetch_roster(&self, team_id: &str) -> ApiResult<(Vec<RosterEntry>, Vec<CoachRecord>)> {
        let url = format!("{}/teams/{team_id}/roster", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.clone()))?;
        let raw: RosterResponse =
            response.json().await.map_err(|e| ApiError::Parsing(e, url))?;

        let results = raw.results.unwrap_or_default();
        let roster = results
            .roster
            .unwrap_or_default()
            .iter()
            .map(map_roster_entry)
            .collect();
        let coaches = results.coaches.unwrap_or_default();
        Ok((roster, coaches))
    }

    async fn get_json(&self, url: &str) -> ApiResult<Value> {
        self.client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Resolution and mapping: loosely-typed wire records → clean domain types
// ---------------------------------------------------------------------------

/// Look up one team in a scanned collection by identifier.
///
/// Comparison is string-normalized: the provider sometimes carries
/// identifiers as JSON numbers, and `1610612738` must match `"1610612738"`.
pub fn resolve_team(collection: &[Value], team_id: &str) -> Option<Team> {
    collection
        .iter()
        .find(|record| record_id(record, TEAM_ID_FIELDS).as_deref() == Some(team_id))
        .map(map_team)
}

const TEAM_ID_FIELDS: &[&str] = &["tid", "teamId", "id"];
const PLAYER_ID_FIELDS: &[&str] = &["id", "personId", "playerId"];

fn map_team(record: &Value) -> Team {
    Team {
        id: record_id(record, TEAM_ID_FIELDS).unwrap_or_default(),
        city: string_field(record, &["city"]).unwrap_or_default(),
        name: string_field(record, &["name", "fullName"]).unwrap_or_default(),
        abbreviation: string_field(record, &["abbr", "abbreviation", "tricode"])
            .unwrap_or_default(),
        slug: string_field(record, &["slug", "urlName"]).unwrap_or_default(),
        colors: map_colors(record.get("colors")),
    }
}

fn map_colors(value: Option<&Value>) -> Option<TeamColors> {
    let colors = value?;
    let primary = string_field(colors, &["primary"])?;
    let secondary = string_field(colors, &["secondary"]).unwrap_or_default();
    Some(TeamColors { primary, secondary })
}

fn map_roster_entry(record: &Value) -> RosterEntry {
    RosterEntry {
        id: record_id(record, PLAYER_ID_FIELDS).unwrap_or_default(),
        first_name: string_field(record, &["firstName"]),
        last_name: string_field(record, &["lastName"]),
        display_name: string_field(record, &["displayName"]),
        name: string_field(record, &["name"]),
        jersey_number: string_field(record, &["number", "jersey", "jerseyNumber"]),
        position: string_field(record, &["position", "pos"]),
        height: string_field(record, &["height"]),
        weight: string_field(record, &["weight"]),
        age: u32_field(record, &["age"]),
        experience: u32_field(record, &["experience", "yearsPro"]),
    }
}

/// First present identifier field, normalized to a string.
fn record_id(record: &Value, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|field| scalar_string(record.get(field)?))
}

fn string_field(record: &Value, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|field| scalar_string(record.get(field)?))
}

fn u32_field(record: &Value, candidates: &[&str]) -> Option<u32> {
    candidates.iter().find_map(|field| {
        let value = record.get(field)?;
        value
            .as_u64()
            .map(|n| n as u32)
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
    })
}

/// Accept both string and numeric scalars; jersey numbers and identifiers
/// arrive as either depending on the deployment.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
