//! High-level conversion API.
//!
//! Combines all steps of a run: existence check, parsing, timetable
//! building and template writing.
//!
//! # Example
//!
//! ```rust,no_run
//! use schedule_converter::{run_conversion, ConvertOptions};
//! use std::path::Path;
//!
//! let summary = run_conversion(Path::new("Downloaded data.csv"), &ConvertOptions::default())?;
//! println!("{} entries, {} courses", summary.schedule_entries, summary.courses);
//! # Ok::<(), schedule_converter::ConvertError>(())
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::template::write_template_file;
use super::timetable::build_timetable;
use crate::error::{ConvertError, ConvertResult};
use crate::logs::{log_error, log_info, log_info_indent, log_success, log_warning};
use crate::parser::parse_file;

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "Downloaded data.csv";

/// Appended to the input stem to name the output file.
pub const OUTPUT_SUFFIX: &str = "_converted.csv";

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Explicit output path; derived from the input when `None`
    pub output: Option<PathBuf>,

    /// Input field delimiter
    pub delimiter: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output: None,
            delimiter: b',',
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Schedule entries written
    pub schedule_entries: usize,
    /// Distinct courses written
    pub courses: usize,
    /// Rows dropped for missing course code or day
    pub skipped_rows: usize,
    /// Detected input encoding
    pub encoding: String,
}

/// Output path next to the input: extension stripped, `_converted.csv` appended.
///
/// `data/Downloaded data.csv` becomes `data/Downloaded data_converted.csv`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}

/// Convert one export file into the template layout.
///
/// The input is read completely before the output is opened, so a read
/// failure never touches the output file. A write failure leaves whatever
/// was flushed so far.
pub fn run_conversion(input: &Path, options: &ConvertOptions) -> ConvertResult<ConversionSummary> {
    if !input.exists() {
        return Err(ConvertError::MissingInputFile(input.to_path_buf()));
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));

    log_info(format!("📖 Reading {}", input.display()));
    let parsed = parse_file(input, options.delimiter)?;
    log_success(format!("Detected encoding: {}", parsed.encoding));
    log_success(format!("Read {} rows", parsed.rows.len()));

    let missing = parsed.missing_columns();
    if !missing.is_empty() && !parsed.headers.is_empty() {
        log_warning(format!("{} expected column(s) absent, read as empty:", missing.len()));
        for col in &missing {
            log_info_indent(format!("• {}", col), 1);
        }
    }

    let timetable = build_timetable(&parsed.rows);
    if timetable.skipped() > 0 {
        log_warning(format!(
            "{} rows skipped (missing Course Code or Day)",
            timetable.skipped()
        ));
    }

    log_info(format!("💾 Writing {}", output.display()));
    write_template_file(&output, &timetable)?;

    Ok(ConversionSummary {
        input: input.to_path_buf(),
        output,
        schedule_entries: timetable.schedule().len(),
        courses: timetable.courses().len(),
        skipped_rows: timetable.skipped(),
        encoding: parsed.encoding,
    })
}

/// Run a conversion and report the outcome on stdout.
///
/// Never panics on bad input: every failure is printed and turned into `false`.
pub fn convert_with_options(input: &Path, options: &ConvertOptions) -> bool {
    match run_conversion(input, options) {
        Ok(summary) => {
            log_success(format!(
                "Successfully converted {} schedule entries and {} unique courses.",
                summary.schedule_entries, summary.courses
            ));
            log_info(format!("Output saved to '{}'", summary.output.display()));
            true
        }
        Err(err) if err.is_missing_input() => {
            log_error(format!("Error: {}", err));
            false
        }
        Err(err) => {
            log_error(format!("Error during conversion: {}", err));
            false
        }
    }
}

/// Convert `input`, writing to `output` or to the derived path.
pub fn convert(input: &Path, output: Option<&Path>) -> bool {
    let options = ConvertOptions {
        output: output.map(Path::to_path_buf),
        ..ConvertOptions::default()
    };
    convert_with_options(input, &options)
}
