//! Schedule converter CLI - turn a downloaded schedule export into the template
//!
//! ```bash
//! schedule-converter                         # converts "Downloaded data.csv"
//! schedule-converter export.csv              # writes export_converted.csv
//! schedule-converter export.csv -o plan.csv  # explicit output path
//! schedule-converter export.csv -d ';'       # semicolon-separated export
//! ```

use clap::Parser;
use schedule_converter::{convert_with_options, ConvertOptions, DEFAULT_INPUT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schedule-converter")]
#[command(version, about = "Convert a course schedule export to the timetable template", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file (default: <input stem>_converted.csv next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input CSV delimiter
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", value)),
    }
}

fn main() {
    let cli = Cli::parse();

    println!("Converting {} to template format...", cli.input.display());

    let options = ConvertOptions {
        output: cli.output,
        delimiter: cli.delimiter,
    };

    if convert_with_options(&cli.input, &options) {
        println!("\nConversion completed successfully!");
        println!("\nNote: Credit hours, Level, and Program fields are empty as this information");
        println!("is not available in the source data. You may need to fill these manually.");
    } else {
        println!("\nConversion failed. Please check the error messages above.");
        std::process::exit(1);
    }
}
