//! Line-oriented location picker: one numbered menu per level.
//!
//! Input per prompt: an option number, `b` to step back one level, or `q`
//! to cancel. End of input cancels.

use std::io::{BufRead, Write};

use boipara_core::{Level, LocationPicker, LocationRecord};

enum Choice {
    Option(usize),
    Back,
    Quit,
    Invalid,
}

fn parse_choice(line: &str, option_count: usize) -> Choice {
    match line.trim() {
        "q" | "Q" => Choice::Quit,
        "b" | "B" => Choice::Back,
        raw => match raw.parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => Choice::Option(n - 1),
            _ => Choice::Invalid,
        },
    }
}

/// Walks the user through every level and returns the resolved location id.
///
/// Returns `Ok(None)` when the user cancels or the final selection matches no
/// record; the latter prints the inline warning instead of failing.
///
/// # Errors
///
/// Returns an error only on I/O failure.
pub(crate) fn run_pick<R: BufRead, W: Write>(
    locations: &[LocationRecord],
    mut input: R,
    output: &mut W,
) -> anyhow::Result<Option<String>> {
    let mut picker = LocationPicker::open();
    let mut line = String::new();

    while let Some(level) = picker.selections().next_unset() {
        let options = picker.options(locations, level);
        if options.is_empty() {
            writeln!(output, "no {level} options available for {}", picker.selections())?;
            return Ok(None);
        }

        writeln!(output, "{} ({}):", capitalize(level), picker.selections())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(output, "  {:>2}) {option}", i + 1)?;
        }
        write!(output, "choose 1-{}, b = back, q = quit: ", options.len())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            picker.reset();
            return Ok(None);
        }

        match parse_choice(&line, options.len()) {
            Choice::Option(i) => picker.select(locations, level, &options[i])?,
            Choice::Back => {
                if let Some(parent) = level.parent() {
                    picker.clear(locations, parent);
                }
            }
            Choice::Quit => {
                writeln!(output, "cancelled")?;
                picker.reset();
                return Ok(None);
            }
            Choice::Invalid => writeln!(output, "'{}' is not a valid choice", line.trim())?,
        }
    }

    match picker.shop_location_id() {
        Some(id) => {
            writeln!(output, "{}: {id}", picker.selections())?;
            Ok(Some(id.to_string()))
        }
        None => {
            if let Some(warning) = picker.warning() {
                writeln!(output, "warning: {warning}")?;
            }
            Ok(None)
        }
    }
}

fn capitalize(level: Level) -> String {
    let name = level.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
