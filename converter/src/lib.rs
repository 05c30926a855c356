//! # Schedule Converter - course schedule export to timetable template
//!
//! Converts the CSV schedule export downloaded from the registration
//! system into the flat template the timetable planner imports.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Export CSV │────▶│   Parser    │────▶│  Timetable  │────▶│ Template CSV│
//! │ (UTF8/1252) │     │  (auto-enc) │     │ (normalize) │     │ (14 columns)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schedule_converter::convert;
//! use std::path::Path;
//!
//! if convert(Path::new("Downloaded data.csv"), None) {
//!     println!("written next to the input");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`logs`] - Console diagnostics
//! - [`models`] - Domain models (SourceRow, ScheduleEntry, CourseInfo)
//! - [`parser`] - Export decoding and reading
//! - [`transform`] - Normalization, timetable, template layout, pipeline

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, CsvError, CsvResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CourseInfo, ScheduleEntry, SessionType, SourceRow};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_encoding,
    parse_bytes,
    parse_file,
    parse_rows,
    ParseResult,
    EXPECTED_COLUMNS,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    build_timetable,
    classify_session_type,
    layout_rows,
    parse_time_slot,
    write_template,
    write_template_file,
    Timetable,
    OUTPUT_COLUMNS,
    OUTPUT_HEADER,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    convert,
    convert_with_options,
    default_output_path,
    run_conversion,
    ConversionSummary,
    ConvertOptions,
    DEFAULT_INPUT,
    OUTPUT_SUFFIX,
};
