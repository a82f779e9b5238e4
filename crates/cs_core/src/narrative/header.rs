//! Match header: title, event line, description, toss, squads and umpires.

use chrono::NaiveDate;

use crate::config::LayoutConfig;
use crate::error::{NarrativeError, Result};
use crate::models::{Event, MatchInfo};
use crate::text::{title_case, wrap, WrapMode};

const DATE_FORMAT: &str = "%d %B %Y";

/// "Name, match N., Group: G, Stage: S" with absent parts left out.
pub fn create_sub_heading(event: &Event) -> String {
    let mut heading = event.name.clone();

    if let Some(number) = event.match_number {
        heading.push_str(&format!(", match {}.", number));
    }
    if let Some(group) = event.group.as_deref().filter(|g| !g.is_empty()) {
        heading.push_str(&format!(", Group: {}", group));
    }
    if let Some(stage) = event.stage.as_deref().filter(|s| !s.is_empty()) {
        heading.push_str(&format!(", Stage: {}", stage));
    }

    heading
}

/// Long date form, e.g. "01 March 2021".
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Unwrapped description sentence.
pub fn describe_match(info: &MatchInfo) -> Result<String> {
    let (home, away) = sides(info)?;

    let mut sentence = format!(
        "{} {} match between {} and {}",
        title_case(&info.team_type),
        info.match_type,
        away,
        home
    );

    if let Some(venue) = info.venue.as_deref() {
        sentence.push_str(&format!(" at {}", venue));
    }

    match info.dates.as_slice() {
        [] => {
            return Err(NarrativeError::UnexpectedState("match info has no dates".to_string()))
        }
        [only] => sentence.push_str(&format!(" on {}.", format_date(only))),
        [first, .., last] => sentence.push_str(&format!(
            " between {} and {}.",
            format_date(first),
            format_date(last)
        )),
    }

    Ok(sentence)
}

/// Full header block. Optional event and officials are omitted when absent.
pub fn create_header(info: &MatchInfo, layout: &LayoutConfig) -> Result<String> {
    let (home, away) = sides(info)?;

    let mut sections = vec![format!("{} vs {}", home.to_uppercase(), away.to_uppercase())];

    if let Some(event) = &info.event {
        sections.push(create_sub_heading(event));
    }

    sections.push(wrap(&describe_match(info)?, layout.wrap_width, WrapMode::Prose));
    sections.push(format!("{} won the toss and decided to {}.", info.toss.winner, info.toss.decision));

    for team in [home, away] {
        let squad = info.squad(team).ok_or_else(|| {
            NarrativeError::UnexpectedState(format!("no player list for team '{}'", team))
        })?;
        sections.push(format!(
            "{}\n{}",
            team.to_uppercase(),
            wrap(&squad.join(", "), layout.wrap_width, WrapMode::Names)
        ));
    }

    if let Some(umpires) = info.officials.as_ref().map(|o| &o.umpires).filter(|u| !u.is_empty()) {
        sections.push(format!("Umpires: {}.", umpires.join(", ")));
    }

    Ok(sections.join("\n\n"))
}

fn sides(info: &MatchInfo) -> Result<(&str, &str)> {
    match (info.home_team(), info.away_team(), info.teams.len()) {
        (Some(home), Some(away), 2) => Ok((home, away)),
        _ => Err(NarrativeError::UnexpectedState(format!(
            "expected two teams, found {:?}",
            info.teams
        ))),
    }
}
