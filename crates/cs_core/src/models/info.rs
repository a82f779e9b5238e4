use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::string_or_number;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchInfo {
    pub balls_per_over: u32,
    /// Ordered match days, at least one.
    pub dates: Vec<NaiveDate>,
    pub gender: Gender,
    pub match_type: MatchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type_number: Option<u32>,
    /// Team name -> squad in batting-card order.
    pub players: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub registry: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default)]
    pub supersubs: BTreeMap<String, String>,
    pub team_type: String,
    #[serde(default)]
    pub outcome: Outcome,
    /// Exactly two names. Index 0 is reported as the away side, index 1 as home.
    pub teams: Vec<String>,
    pub toss: Toss,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowl_out: Option<Vec<BowlOutDelivery>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officials: Option<Officials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_of_match: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl MatchInfo {
    /// Team listed second in the record, reported as the home side.
    pub fn home_team(&self) -> Option<&str> {
        self.teams.get(1).map(String::as_str)
    }

    /// Team listed first in the record, reported as the away side.
    pub fn away_team(&self) -> Option<&str> {
        self.teams.first().map(String::as_str)
    }

    pub fn squad(&self, team: &str) -> Option<&[String]> {
        self.players.get(team).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum MatchType {
    Test,
    #[serde(rename = "ODI")]
    Odi,
    T20,
    #[serde(rename = "IT20")]
    It20,
    #[serde(rename = "ODM")]
    Odm,
    #[serde(rename = "MDM")]
    Mdm,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Test => "Test",
            MatchType::Odi => "ODI",
            MatchType::T20 => "T20",
            MatchType::It20 => "IT20",
            MatchType::Odm => "ODM",
            MatchType::Mdm => "MDM",
        }
    }

    /// Formats where each side bats twice.
    pub fn is_multi_day(&self) -> bool {
        matches!(self, MatchType::Test | MatchType::Mdm)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Toss {
    pub decision: TossDecision,
    pub winner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncontested: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Field,
}

impl fmt::Display for TossDecision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TossDecision::Bat => f.write_str("bat"),
            TossDecision::Field => f.write_str("field"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Outcome {
    /// Margin, e.g. `{"runs": 12}` or `{"wickets": 4}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<BTreeMap<String, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowl_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eliminator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BowlOutDelivery {
    pub bowler: String,
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_number: Option<u32>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Officials {
    #[serde(default)]
    pub match_referees: Vec<String>,
    #[serde(default)]
    pub reserve_umpires: Vec<String>,
    #[serde(default)]
    pub tv_umpires: Vec<String>,
    #[serde(default)]
    pub umpires: Vec<String>,
}
