//! Over and innings assembly.
//!
//! Deliveries become formatted balls (one-based numbering, generated remark),
//! and overs become display rows. A row repeats the over, bowler or batter
//! label only when it differs from the row above, across over boundaries too.

use serde::Serialize;

use super::remark::create_remark;
use crate::models::{MatchInnings, MatchInningsOver, MatchType};
use crate::text::TableRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedBall {
    /// One-based position within the over, extras included.
    pub num: u32,
    pub bowler: String,
    pub batter: String,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedOver {
    /// One-based.
    pub over: u32,
    pub deliveries: Vec<FormattedBall>,
}

/// One table row. Empty labels mean "same as above".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InningsRow {
    pub over: String,
    pub bowler: String,
    pub batter: String,
    pub ball: u32,
    pub remark: String,
    /// Last ball of its over.
    pub divider: bool,
}

impl InningsRow {
    pub fn to_table_row(&self) -> TableRow {
        TableRow {
            cells: vec![
                self.over.clone(),
                self.bowler.clone(),
                self.batter.clone(),
                self.ball.to_string(),
                self.remark.clone(),
            ],
            divider: self.divider,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InningsNarrative {
    pub title: String,
    pub rows: Vec<InningsRow>,
}

pub fn create_over(over: &MatchInningsOver) -> FormattedOver {
    let deliveries = over
        .deliveries
        .iter()
        .zip(1..)
        .map(|(delivery, num)| FormattedBall {
            num,
            bowler: delivery.bowler.clone(),
            batter: delivery.batter.clone(),
            remark: create_remark(delivery),
        })
        .collect();

    FormattedOver { over: over.over + 1, deliveries }
}

/// "{team} - 1st Innings" / "- 2nd Innings" for two-innings formats, "{team} Innings" otherwise.
pub fn innings_title(index: usize, team: &str, match_type: MatchType) -> String {
    let suffix = if match_type.is_multi_day() {
        if index < 2 {
            " - 1st Innings"
        } else {
            " - 2nd Innings"
        }
    } else {
        " Innings"
    };
    format!("{}{}", team, suffix)
}

/// Rows for a sequence of formatted overs.
pub fn assemble_rows(overs: &[FormattedOver]) -> Vec<InningsRow> {
    let mut rows = Vec::with_capacity(overs.iter().map(|o| o.deliveries.len()).sum());
    let mut previous_over: Option<u32> = None;
    let mut previous_bowler: Option<&str> = None;
    let mut previous_batter: Option<&str> = None;

    for over in overs {
        let last = over.deliveries.len().saturating_sub(1);
        for (i, ball) in over.deliveries.iter().enumerate() {
            rows.push(InningsRow {
                over: label_if_changed(previous_over, over.over),
                bowler: label_if_changed(previous_bowler, ball.bowler.as_str()),
                batter: label_if_changed(previous_batter, ball.batter.as_str()),
                ball: ball.num,
                remark: ball.remark.clone(),
                divider: i == last,
            });

            previous_over = Some(over.over);
            previous_bowler = Some(ball.bowler.as_str());
            previous_batter = Some(ball.batter.as_str());
        }
    }

    rows
}

fn label_if_changed<T: PartialEq + ToString>(previous: Option<T>, current: T) -> String {
    if previous.as_ref() == Some(&current) {
        String::new()
    } else {
        current.to_string()
    }
}

pub fn create_innings(index: usize, innings: &MatchInnings, match_type: MatchType) -> InningsNarrative {
    let overs: Vec<FormattedOver> = innings.overs.iter().map(create_over).collect();
    if overs.is_empty() {
        log::debug!("Innings {} ({}) has no overs", index + 1, innings.team);
    }

    InningsNarrative {
        title: innings_title(index, &innings.team, match_type),
        rows: assemble_rows(&overs),
    }
}

pub fn create_narrative(innings: &[MatchInnings], match_type: MatchType) -> Vec<InningsNarrative> {
    innings
        .iter()
        .enumerate()
        .map(|(index, inn)| create_innings(index, inn, match_type))
        .collect()
}
