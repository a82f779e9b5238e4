use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Delivery {
    pub batter: String,
    pub bowler: String,
    pub non_striker: String,
    pub runs: Runs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wickets: Vec<Wicket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacements: Option<Replacements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<Review>,
}

impl Delivery {
    /// Minimal delivery with the given runs and no other events.
    pub fn new(bowler: &str, batter: &str, non_striker: &str, runs: Runs) -> Self {
        Self {
            batter: batter.to_string(),
            bowler: bowler.to_string(),
            non_striker: non_striker.to_string(),
            runs,
            extras: None,
            wickets: Vec::new(),
            replacements: None,
            review: None,
        }
    }

    pub fn has_replacements(&self) -> bool {
        self.replacements.as_ref().is_some_and(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Runs {
    pub batter: u32,
    #[serde(default)]
    pub extras: u32,
    pub total: u32,
    /// Set when a 4 or 6 was run rather than struck to the boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_boundary: Option<bool>,
}

impl Runs {
    pub fn new(batter: u32, extras: u32) -> Self {
        Self { batter, extras, total: batter + extras, non_boundary: None }
    }
}

/// Documented extra types, keyed as in the match file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraKind {
    Wides,
    Noballs,
    Byes,
    Legbyes,
    Penalty,
}

impl ExtraKind {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "wides" => Some(ExtraKind::Wides),
            "noballs" => Some(ExtraKind::Noballs),
            "byes" => Some(ExtraKind::Byes),
            "legbyes" => Some(ExtraKind::Legbyes),
            "penalty" => Some(ExtraKind::Penalty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraKind::Wides => "wides",
            ExtraKind::Noballs => "noballs",
            ExtraKind::Byes => "byes",
            ExtraKind::Legbyes => "legbyes",
            ExtraKind::Penalty => "penalty",
        }
    }
}

/// Extras on one delivery, in the order the match file lists them.
///
/// Kinds the schema does not document are kept in `other` and never reach the remark.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extras {
    counts: Vec<(ExtraKind, u32)>,
    pub other: BTreeMap<String, serde_json::Value>,
}

impl Extras {
    /// Set the count for `kind`. A new kind goes last; an existing one keeps its place.
    pub fn with(mut self, kind: ExtraKind, count: u32) -> Self {
        self.set(kind, count);
        self
    }

    pub fn set(&mut self, kind: ExtraKind, count: u32) {
        match self.counts.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = count,
            None => self.counts.push((kind, count)),
        }
    }

    pub fn get(&self, kind: ExtraKind) -> Option<u32> {
        self.counts.iter().find(|(k, _)| *k == kind).map(|&(_, c)| c)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&(_, c)| c).sum()
    }

    /// Documented kinds as `(label, count)`, in file order.
    pub fn entries(&self) -> Vec<(&'static str, u32)> {
        self.counts.iter().map(|&(kind, count)| (kind.as_str(), count)).collect()
    }
}

impl Serialize for Extras {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len() + self.other.len()))?;
        for (kind, count) in &self.counts {
            map.serialize_entry(kind.as_str(), count)?;
        }
        for (key, value) in &self.other {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Extras {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExtrasVisitor;

        impl<'de> Visitor<'de> for ExtrasVisitor {
            type Value = Extras;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of extra type to run count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Extras, A::Error> {
                let mut extras = Extras::default();
                while let Some(key) = access.next_key::<String>()? {
                    match ExtraKind::from_key(&key) {
                        Some(kind) => {
                            let count = access.next_value::<u32>()?;
                            extras.set(kind, count);
                        }
                        None => {
                            let value = access.next_value::<serde_json::Value>()?;
                            extras.other.insert(key, value);
                        }
                    }
                }
                Ok(extras)
            }
        }

        deserializer.deserialize_map(ExtrasVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wicket {
    pub kind: String,
    pub player_out: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fielders: Vec<Fielder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fielder {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute: Option<bool>,
}

impl Fielder {
    pub fn is_substitute(&self) -> bool {
        self.substitute.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Replacements {
    #[serde(default, rename = "match", skip_serializing_if = "Vec::is_empty")]
    pub match_: Vec<MatchReplacement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<RoleReplacement>,
}

impl Replacements {
    pub fn is_empty(&self) -> bool {
        self.match_.is_empty() && self.role.is_empty()
    }
}

/// A player leaving the match (e.g. concussion substitute).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReplacement {
    #[serde(rename = "in")]
    pub player_in: String,
    #[serde(rename = "out")]
    pub player_out: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

/// A player taking over a role (batter via runner, bowler finishing an over).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleReplacement {
    #[serde(rename = "in")]
    pub player_in: String,
    #[serde(default, rename = "out", skip_serializing_if = "Option::is_none")]
    pub player_out: Option<String>,
    pub reason: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Reviewing team.
    pub by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umpire: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batter: Option<String>,
    pub decision: ReviewDecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umpires_call: Option<bool>,
    /// Dismissal the review was about, e.g. "wicket".
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Upheld,
    #[serde(rename = "struck down")]
    StruckDown,
    #[serde(other)]
    Other,
}

impl ReviewDecision {
    pub fn is_upheld(&self) -> bool {
        matches!(self, ReviewDecision::Upheld)
    }
}
