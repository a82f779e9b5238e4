//! Cricsheet JSON ingestion.
//!
//! Parses straight from the text so map key order (extras) is kept, then
//! checks the match-level invariants the narrative relies on before handing
//! out a [`MatchData`]. Legacy field names are accepted through serde aliases.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{NarrativeError, Result};
use crate::models::MatchData;

/// Parse one match from JSON text.
pub fn parse_match(json: &str) -> Result<MatchData> {
    let data: MatchData = serde_json::from_str(json)?;
    validate(&data)?;

    log::debug!(
        "Parsed match {} on {} ({} innings)",
        data.info.teams.join(" v "),
        data.info.dates.first().map(|d| d.to_string()).unwrap_or_default(),
        data.innings.len()
    );
    Ok(data)
}

/// Read and parse one match file.
pub fn read_match_file(path: &Path) -> Result<MatchData> {
    let json = fs::read_to_string(path)?;
    parse_match(&json)
}

/// Match-level invariants that serde cannot express.
pub fn validate(data: &MatchData) -> Result<()> {
    let info = &data.info;

    if info.teams.len() != 2 {
        return Err(NarrativeError::MalformedSchema(format!(
            "expected exactly two teams, found {}",
            info.teams.len()
        )));
    }

    let distinct: HashSet<&str> = info.teams.iter().map(String::as_str).collect();
    if distinct.len() != 2 {
        return Err(NarrativeError::MalformedSchema(format!(
            "team names must be distinct, found {:?}",
            info.teams
        )));
    }

    if let Some(team) = info.teams.iter().find(|team| !info.players.contains_key(*team)) {
        return Err(NarrativeError::MalformedSchema(format!("no player list for team '{}'", team)));
    }

    if info.dates.is_empty() {
        return Err(NarrativeError::MalformedSchema("match has no dates".to_string()));
    }

    Ok(())
}
