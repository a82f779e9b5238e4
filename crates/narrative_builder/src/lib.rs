//! Narrative Builder Library
//!
//! cricsheet JSON → match narrative text report, for one file or a folder.
//! A failing match is recorded in the [`BatchSummary`] and never stops the
//! rest of the batch.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cs_core::{create_match_report, parse_match, MatchInfo, NarrativeConfig, NarrativeError};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

pub const DEFAULT_OUTPUT_DIR: &str = "narrative_outputs";

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("Failed to read match file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build narrative for {path}: {source}")]
    Narrative {
        path: PathBuf,
        #[source]
        source: NarrativeError,
    },

    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to scan folder {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Input folder not found: {path}")]
    FolderNotFound { path: PathBuf },
}

impl BuildError {
    /// True when the match file itself is at fault.
    pub fn is_bad_input(&self) -> bool {
        match self {
            BuildError::Narrative { source, .. } => source.is_bad_input(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output_dir: PathBuf,
    /// Descend into sub-folders when scanning for `*.json`.
    pub recursive: bool,
    /// Build matches on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR), recursive: false, parallel: true }
    }
}

/// A report that was written.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes: usize,
}

/// A match that could not be reported.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FailedMatch {
    pub input: PathBuf,
    pub error: String,
    pub bad_input: bool,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct BatchSummary {
    pub built: Vec<ReportOutcome>,
    pub failed: Vec<FailedMatch>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.built.len() + self.failed.len()
    }
}

/// `{first date}_{away}_vs_{home}.txt`, spaces in team names replaced by underscores.
pub fn report_file_name(info: &MatchInfo) -> String {
    let date = info.dates.first().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let team = |i: usize| info.teams.get(i).map(|t| t.replace(' ', "_")).unwrap_or_default();
    format!("{}_{}_vs_{}.txt", date, team(0), team(1))
}

/// Parse one match file and compose its report without writing anything.
///
/// Returns the output file name and the report text.
pub fn render_report(input: &Path, config: &NarrativeConfig) -> Result<(String, String), BuildError> {
    let json = fs::read_to_string(input)
        .map_err(|source| BuildError::Read { path: input.to_path_buf(), source })?;

    let narrative_err = |source| BuildError::Narrative { path: input.to_path_buf(), source };
    let data = parse_match(&json).map_err(narrative_err)?;
    let report = create_match_report(&data, config).map_err(narrative_err)?;

    Ok((report_file_name(&data.info), report))
}

/// Build and persist the report for one match file.
pub fn build_report(
    input: &Path,
    output_dir: &Path,
    config: &NarrativeConfig,
) -> Result<ReportOutcome, BuildError> {
    let (file_name, report) = render_report(input, config)?;
    let output = output_dir.join(file_name);

    write_report(&output, &report)
        .map_err(|source| BuildError::Write { path: output.clone(), source })?;

    log::info!("Wrote {} ({} bytes)", output.display(), report.len());
    Ok(ReportOutcome { input: input.to_path_buf(), output, bytes: report.len() })
}

/// Atomic write: temp file in the target folder, then rename.
pub fn write_report(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("txt.tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
    }

    fs::rename(&temp_path, path)
}

/// `*.json` files under `folder`, sorted by path.
pub fn find_match_files(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, BuildError> {
    if !folder.is_dir() {
        return Err(BuildError::FolderNotFound { path: folder.to_path_buf() });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(folder).max_depth(max_depth) {
        let entry = entry.map_err(|source| BuildError::Scan { path: folder.to_path_buf(), source })?;
        let is_json = entry.path().extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Build a report for every match file in `folder`.
///
/// Only a missing or unreadable folder is an error; per-match failures land in the summary.
pub fn process_folder(
    folder: &Path,
    config: &NarrativeConfig,
    options: &BuildOptions,
) -> Result<BatchSummary, BuildError> {
    let files = find_match_files(folder, options.recursive)?;
    log::info!("Found {} match files in {}", files.len(), folder.display());

    let build = |path: &PathBuf| (path.clone(), build_report(path, &options.output_dir, config));
    let results: Vec<(PathBuf, Result<ReportOutcome, BuildError>)> = if options.parallel {
        files.par_iter().map(build).collect()
    } else {
        files.iter().map(build).collect()
    };

    let mut summary = BatchSummary::default();
    for (input, result) in results {
        match result {
            Ok(outcome) => summary.built.push(outcome),
            Err(err) => {
                log::warn!("Skipping {}: {}", input.display(), err);
                summary.failed.push(FailedMatch {
                    bad_input: err.is_bad_input(),
                    error: err.to_string(),
                    input,
                });
            }
        }
    }

    Ok(summary)
}
