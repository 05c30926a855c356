//! Transformation module.
//!
//! This module handles export to template conversion:
//! - Normalize: time slot splitting and session type codes
//! - Timetable: schedule entries and distinct courses
//! - Template: side-by-side layout and CSV writer
//! - Pipeline: main conversion entry points

pub mod normalize;
pub mod pipeline;
pub mod template;
pub mod timetable;

pub use normalize::{classify_session_type, parse_time_slot};
pub use pipeline::*;
pub use template::{layout_rows, write_template, write_template_file, OUTPUT_COLUMNS, OUTPUT_HEADER};
pub use timetable::{build_timetable, Timetable};
