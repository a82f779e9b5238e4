//! Final report text: header followed by one commentary table per innings.

use super::header::create_header;
use super::innings::{create_narrative, InningsNarrative};
use crate::config::{NarrativeConfig, TableLayout};
use crate::error::Result;
use crate::models::MatchData;
use crate::text::{AsciiTable, TableRenderer, TableRow};

/// Join a header and rendered innings tables.
pub fn compose_report(
    header: &str,
    innings: &[InningsNarrative],
    layout: &TableLayout,
    renderer: &dyn TableRenderer,
) -> String {
    let columns = layout.columns();
    let mut output = String::from(header);

    for inn in innings {
        let rows: Vec<TableRow> = inn.rows.iter().map(|row| row.to_table_row()).collect();
        let table = renderer.render(&columns, &rows);
        output.push_str(&format!("\n\n{}\n{}\n\n", inn.title, table));
    }

    output
}

/// Complete report for one match with the default table renderer.
pub fn create_match_report(data: &MatchData, config: &NarrativeConfig) -> Result<String> {
    create_match_report_with(data, config, &AsciiTable)
}

pub fn create_match_report_with(
    data: &MatchData,
    config: &NarrativeConfig,
    renderer: &dyn TableRenderer,
) -> Result<String> {
    let header = create_header(&data.info, &config.layout)?;
    let narrative = create_narrative(&data.innings, data.info.match_type);

    log::debug!(
        "Composed {} innings, {} rows",
        narrative.len(),
        narrative.iter().map(|n| n.rows.len()).sum::<usize>()
    );

    Ok(compose_report(&header, &narrative, &config.layout.table, renderer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_match;
    use crate::narrative::innings::InningsRow;
    use crate::text::ColumnSpec;
    use serde_json::json;

    /// Pipe-joined cells so assertions do not depend on table layout.
    struct PlainRenderer;

    impl TableRenderer for PlainRenderer {
        fn render(&self, columns: &[ColumnSpec], rows: &[TableRow]) -> String {
            let mut lines = vec![columns.iter().map(|c| c.header.as_str()).collect::<Vec<_>>().join("|")];
            for row in rows {
                lines.push(row.cells.join("|"));
                if row.divider {
                    lines.push("--".to_string());
                }
            }
            lines.join("\n")
        }
    }

    fn sample_match() -> MatchData {
        let value = json!({
            "meta": { "data_version": "1.1.0", "created": "2021-03-20", "revision": 1 },
            "info": {
                "balls_per_over": 6,
                "dates": ["2021-03-20"],
                "gender": "male",
                "match_type": "T20",
                "players": {
                    "England": ["JC Buttler", "JJ Roy"],
                    "India": ["RG Sharma", "V Kohli"]
                },
                "team_type": "international",
                "teams": ["England", "India"],
                "toss": { "winner": "England", "decision": "field" },
                "venue": "Narendra Modi Stadium"
            },
            "innings": [{
                "team": "India",
                "overs": [{
                    "over": 0,
                    "deliveries": [
                        { "batter": "RG Sharma", "bowler": "AU Rashid", "non_striker": "V Kohli",
                          "runs": { "batter": 6, "extras": 0, "total": 6 } },
                        { "batter": "RG Sharma", "bowler": "AU Rashid", "non_striker": "V Kohli",
                          "runs": { "batter": 0, "extras": 0, "total": 0 },
                          "wickets": [{ "kind": "caught", "player_out": "RG Sharma",
                                        "fielders": [{ "name": "JC Buttler" }] }] }
                    ]
                }]
            }]
        });
        parse_match(&value.to_string()).unwrap()
    }

    #[test]
    fn test_report_layout_with_plain_renderer() {
        let report =
            create_match_report_with(&sample_match(), &NarrativeConfig::default(), &PlainRenderer)
                .unwrap();

        let tail = "\n\nIndia Innings\n\
                    Over|Bowler|Batter|Delivery|Remarks\n\
                    1|AU Rashid|RG Sharma|1|Batter hits, umpire signals Boundary 6.\n\
                    |||2|RG Sharma given out caught JC Buttler.\n\
                    --\n\n";
        assert!(report.starts_with("INDIA vs ENGLAND\n\n"), "{}", report);
        assert!(report.ends_with(tail), "{}", report);
    }

    #[test]
    fn test_report_with_ascii_table() {
        let report = create_match_report(&sample_match(), &NarrativeConfig::default()).unwrap();
        assert!(report.contains("India Innings\n+-------+-----------------+"));
        assert!(report.contains("| Batter hits, umpire signals Boundary 6. "));
        assert!(report.ends_with("+\n\n"));
    }

    #[test]
    fn test_compose_without_innings_is_header_only() {
        let report = compose_report("HEADER", &[], &TableLayout::default(), &AsciiTable);
        assert_eq!(report, "HEADER");
    }

    #[test]
    fn test_compose_multiple_innings_in_order() {
        let innings = vec![
            InningsNarrative { title: "A Innings".to_string(), rows: vec![] },
            InningsNarrative {
                title: "B Innings".to_string(),
                rows: vec![InningsRow {
                    over: "1".to_string(),
                    bowler: "X".to_string(),
                    batter: "Y".to_string(),
                    ball: 1,
                    remark: "No incident or score.".to_string(),
                    divider: true,
                }],
            },
        ];
        let report = compose_report("H", &innings, &TableLayout::default(), &PlainRenderer);
        assert_eq!(
            report,
            "H\n\nA Innings\nOver|Bowler|Batter|Delivery|Remarks\n\n\
             \n\nB Innings\nOver|Bowler|Batter|Delivery|Remarks\n1|X|Y|1|No incident or score.\n--\n\n"
        );
    }
}
