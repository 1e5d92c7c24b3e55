//! Wire types for the content API roster endpoint.
//! Endpoint: `{base}/teams/{teamId}/roster`, returning
//! `{"results": {"roster": [...], "coaches": [...]}}`.
//!
//! Only the envelope is typed. The roster and coach elements stay as raw
//! values: player fields drift between deployments (identifiers arrive as
//! numbers or strings, name fields come and go), so element mapping happens
//! field-by-field in `client.rs`, the same way the teams listing is mapped.
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Default, Debug)]
pub struct RosterResponse {
    pub results: Option<RosterResults>,
}

#[derive(Deserialize, Default, Debug)]
pub struct RosterResults {
    /// Absent on some deployments; absence is optional content, not an error.
    #[serde(default)]
    pub roster: Option<Vec<Value>>,
    #[serde(default)]
    pub coaches: Option<Vec<Value>>,
}
