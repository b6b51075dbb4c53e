//! Human and machine formatting for catalog query results.
//!
//! The catalog never prints; everything a user sees goes through here.

use crate::domain::model::{CourseDetails, CourseSummary, LoadReport, Lookup};
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;
use std::io::Write;

pub const LIST_HEADER: &str = "Course List";
pub const UNKNOWN_TITLE: &str = "Title unknown";

pub fn write_list<W: Write>(out: &mut W, courses: &[CourseSummary], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", LIST_HEADER)?;
            writeln!(out, "{}", "-".repeat(LIST_HEADER.len()))?;
            for course in courses {
                writeln!(out, "{}, {}", course.id, course.title)?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["id", "title"])?;
            for course in courses {
                writer.write_record([&course.id, &course.title])?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, courses)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Found courses use `format`; query errors are always plain text, except in
/// JSON where the whole lookup result is serialized.
pub fn write_lookup<W: Write>(out: &mut W, lookup: &Lookup, format: OutputFormat) -> Result<()> {
    match (lookup, format) {
        (_, OutputFormat::Json) => {
            serde_json::to_writer_pretty(&mut *out, lookup)?;
            writeln!(out)?;
        }
        (Lookup::Found(details), OutputFormat::Csv) => write_details_csv(out, details)?,
        (Lookup::Found(details), OutputFormat::Text) => write_details_text(out, details)?,
        (Lookup::InvalidQuery, _) => writeln!(out, "Error: empty course ID.")?,
        (Lookup::NotFound { id }, _) => writeln!(out, "Course not found: {}", id)?,
    }
    Ok(())
}

fn write_details_text<W: Write>(out: &mut W, details: &CourseDetails) -> Result<()> {
    writeln!(out, "{}: {}", details.id, details.title)?;

    if details.prerequisites.is_empty() {
        writeln!(out, "Prerequisites: None")?;
        return Ok(());
    }

    writeln!(out, "Prerequisites:")?;
    for prereq in &details.prerequisites {
        writeln!(
            out,
            "  - {}: {}",
            prereq.id,
            prereq.title.as_deref().unwrap_or(UNKNOWN_TITLE)
        )?;
    }
    Ok(())
}

// 每個先修課程一列；沒有先修課程的課程仍輸出一列
fn write_details_csv<W: Write>(out: &mut W, details: &CourseDetails) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    writer.write_record(["id", "title", "prerequisite_id", "prerequisite_title"])?;

    if details.prerequisites.is_empty() {
        writer.write_record([details.id.as_str(), details.title.as_str(), "", ""])?;
    }
    for prereq in &details.prerequisites {
        writer.write_record([
            details.id.as_str(),
            details.title.as_str(),
            prereq.id.as_str(),
            prereq.title.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_warnings<W: Write>(out: &mut W, report: &LoadReport) -> Result<()> {
    if !report.has_warnings() {
        return Ok(());
    }
    writeln!(out, "Note: Some lines were skipped or had issues:")?;
    for warning in &report.warnings {
        writeln!(out, "  - {}", warning)?;
    }
    Ok(())
}
