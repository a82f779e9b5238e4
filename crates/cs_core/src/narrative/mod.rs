//! # Narrative composition
//!
//! Match record → header prose and per-innings commentary rows → report text.

pub mod header;
pub mod innings;
pub mod remark;
pub mod report;

pub use header::{create_header, create_sub_heading, describe_match, format_date};
pub use innings::{
    assemble_rows, create_innings, create_narrative, create_over, innings_title, FormattedBall,
    FormattedOver, InningsNarrative, InningsRow,
};
pub use remark::{
    compose_remark, create_remark, is_no_event, RemarkRule, NO_EVENT_REMARK, STANDARD_RULES,
};
pub use report::{compose_report, create_match_report, create_match_report_with};
