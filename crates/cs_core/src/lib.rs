//! # cs_core - Cricket Match Narrative Engine
//!
//! Converts cricsheet ball-by-ball match records into a readable report:
//! a prose header describing the match, then a commentary table per innings.
//!
//! ## Features
//! - Deterministic, side-effect-free remark generation per delivery
//! - Label deduplication across consecutive table rows
//! - Configurable wrap width and table layout (YAML or JSON)
//!
//! ```rust,no_run
//! use cs_core::{create_match_report, read_match_file, NarrativeConfig};
//! use std::path::Path;
//!
//! let data = read_match_file(Path::new("1254058.json"))?;
//! let report = create_match_report(&data, &NarrativeConfig::default())?;
//! println!("{}", report);
//! # Ok::<(), cs_core::NarrativeError>(())
//! ```

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod narrative;
pub mod text;

pub use config::{LayoutConfig, NarrativeConfig, TableLayout};
pub use error::{NarrativeError, Result};
pub use ingest::{parse_match, read_match_file};
pub use models::{Delivery, MatchData, MatchInfo, MatchInnings, MatchInningsOver, MatchType};
pub use narrative::{create_header, create_match_report, create_narrative, create_remark};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
