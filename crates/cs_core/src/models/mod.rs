//! Match record data model.
//!
//! Mirrors the public cricsheet JSON layout. Records are populated once by
//! [`crate::ingest`] and are read-only afterwards.

pub mod delivery;
pub mod info;
pub mod innings;

pub use delivery::{
    Delivery, ExtraKind, Extras, Fielder, MatchReplacement, Replacements, Review, ReviewDecision,
    RoleReplacement, Runs, Wicket,
};
pub use info::{
    BowlOutDelivery, Event, Gender, MatchInfo, MatchType, Officials, Outcome, Toss,
    TossDecision,
};
pub use innings::{MatchInnings, MatchInningsOver, PenaltyRuns, Powerplay, Target};

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchMeta {
    pub data_version: String,
    pub created: String,
    pub revision: u32,
}

/// One complete match as read from a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchData {
    pub meta: MatchMeta,
    pub info: MatchInfo,
    #[serde(default)]
    pub innings: Vec<MatchInnings>,
}

/// Some cricsheet fields (season, event group) are strings in most files and bare numbers in others.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bowl_out_and_event_through_reexports() {
        let bowl_out: Vec<BowlOutDelivery> = serde_json::from_value(json!([
            { "bowler": "Harbhajan Singh", "outcome": "hit" },
            { "bowler": "Umar Gul", "outcome": "miss" }
        ]))
        .unwrap();
        assert_eq!(bowl_out[1].outcome, "miss");

        let event: Event = serde_json::from_value(json!({ "name": "ICC World Twenty20", "group": 4 })).unwrap();
        assert_eq!(event.group.as_deref(), Some("4"));

        let extras: Extras = serde_json::from_value(json!({ "byes": 4 })).unwrap();
        assert_eq!(extras.get(ExtraKind::Byes), Some(4));
    }
}
