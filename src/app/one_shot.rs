//! Non-interactive `--list` / `--show` runs.
//!
//! Results go to `out` in the requested format. Load warnings and query
//! errors always go to `err` as plain text.

use crate::app::render;
use crate::core::catalog::Catalog;
use crate::core::parser::FieldParser;
use crate::domain::model::Lookup;
use crate::domain::ports::{LineSource, OutputFormat};
use crate::utils::error::Result;
use std::io::Write;

pub const EXIT_OK: i32 = 0;
/// `--show` found nothing to show: unknown course or empty course ID.
pub const EXIT_NOT_FOUND: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    List,
    Show(&'a str),
}

/// Loads `file` once, answers `query` and returns the process exit code.
pub fn run<S, O, E>(
    source: &S,
    file: &str,
    parser: FieldParser,
    query: Query<'_>,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> Result<i32>
where
    S: LineSource,
    O: Write,
    E: Write,
{
    let mut catalog = Catalog::with_parser(parser);
    let report = catalog.load(source, file)?;
    render::write_warnings(err, &report)?;

    let code = match query {
        Query::List => {
            render::write_list(out, &catalog.list(), format)?;
            EXIT_OK
        }
        Query::Show(id) => {
            let lookup = catalog.lookup(id);
            if matches!(lookup, Lookup::Found(_)) {
                render::write_lookup(out, &lookup, format)?;
                EXIT_OK
            } else {
                render::write_lookup(err, &lookup, OutputFormat::Text)?;
                EXIT_NOT_FOUND
            }
        }
    };

    out.flush()?;
    err.flush()?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AdvisorError;

    struct MemorySource(&'static str);

    impl LineSource for MemorySource {
        fn read_lines(&self, path: &str) -> Result<Vec<String>> {
            if path != "courses.csv" {
                return Err(AdvisorError::source_unavailable(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                ));
            }
            Ok(self.0.lines().map(str::to_string).collect())
        }
    }

    const COURSES: MemorySource =
        MemorySource("CSCI100,Intro\nCSCI200,Data Structures,CSCI100,MATH999\nCSCI300\n");

    const FORMATS: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Json];

    fn run_query(query: Query<'_>, format: OutputFormat) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            &COURSES,
            "courses.csv",
            FieldParser::default(),
            query,
            format,
            &mut out,
            &mut err,
        )
        .unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    const WARNINGS: &str =
        "Note: Some lines were skipped or had issues:\n  - Line 3 skipped: fewer than 2 fields\n";

    #[test]
    fn test_found_goes_to_stdout_in_every_format() {
        for format in FORMATS {
            let (code, out, err) = run_query(Query::Show("csci200"), format);
            assert_eq!(code, EXIT_OK);
            assert!(out.contains("CSCI200"), "{:?}: {}", format, out);
            assert!(out.contains("MATH999"), "{:?}: {}", format, out);
            assert_eq!(err, WARNINGS);
        }
    }

    #[test]
    fn test_not_found_is_text_on_stderr_in_every_format() {
        for format in FORMATS {
            let (code, out, err) = run_query(Query::Show("MATH999"), format);
            assert_eq!(code, EXIT_NOT_FOUND);
            assert!(out.is_empty(), "{:?}: {}", format, out);
            assert_eq!(err, format!("{}Course not found: MATH999\n", WARNINGS));
        }
    }

    #[test]
    fn test_empty_query_is_text_on_stderr_in_every_format() {
        for format in FORMATS {
            let (code, out, err) = run_query(Query::Show("   "), format);
            assert_eq!(code, EXIT_NOT_FOUND);
            assert!(out.is_empty(), "{:?}: {}", format, out);
            assert_eq!(err, format!("{}Error: empty course ID.\n", WARNINGS));
        }
    }

    #[test]
    fn test_list_to_stdout() {
        let (code, out, err) = run_query(Query::List, OutputFormat::Csv);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "id,title\nCSCI100,Intro\nCSCI200,Data Structures\n");
        assert_eq!(err, WARNINGS);
    }

    #[test]
    fn test_unreadable_source_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(
            &COURSES,
            "missing.csv",
            FieldParser::default(),
            Query::List,
            OutputFormat::Text,
            &mut out,
            &mut err,
        );

        assert!(matches!(result, Err(AdvisorError::SourceUnavailable { .. })));
        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
