use serde::{Deserialize, Serialize};

use super::delivery::Delivery;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchInnings {
    pub team: String,
    /// Absent when the innings was not played (forfeited, abandoned).
    #[serde(default)]
    pub overs: Vec<MatchInningsOver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(default)]
    pub super_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent_hurt: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_runs: Option<PenaltyRuns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forfeited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerplays: Option<Vec<Powerplay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miscounted_overs: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchInningsOver {
    /// Zero-based.
    pub over: u32,
    pub deliveries: Vec<Delivery>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Target {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PenaltyRuns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<u32>,
}

/// Fielding-restriction phase. Source files name the start `from`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Powerplay {
    #[serde(alias = "from")]
    pub first_delivery: f64,
    pub to: f64,
    #[serde(rename = "type")]
    pub kind: String,
}
