use crate::core::parser::FieldParser;
use crate::domain::model::{Course, CourseDetails, CourseSummary, LoadReport, Lookup, ResolvedPrerequisite};
use crate::domain::ports::LineSource;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Trim + uppercase. Catalog keys are always stored in this form.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// In-memory course graph keyed by normalized course ID.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: HashMap<String, Course>,
    parser: FieldParser,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(parser: FieldParser) -> Self {
        Self {
            courses: HashMap::new(),
            parser,
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(&normalize_id(id))
    }

    /// Reads every line from `source` first; only then is the current
    /// catalog replaced. A read failure leaves it untouched.
    pub fn load<S: LineSource>(&mut self, source: &S, path: &str) -> Result<LoadReport> {
        let lines = match source.read_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("Failed to read catalog source '{}': {}", path, e);
                return Err(e);
            }
        };

        let report = self.load_lines(lines);
        tracing::info!(
            "✅ Loaded {} courses from {} ({} warnings)",
            report.courses,
            path,
            report.warnings.len()
        );
        Ok(report)
    }

    pub fn load_str(&mut self, content: &str) -> LoadReport {
        self.load_lines(content.lines())
    }

    /// Clears the catalog and rebuilds it from `lines`. Line numbers in
    /// warnings are 1-based and count blank lines.
    pub fn load_lines<I, L>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        self.courses.clear();
        let mut report = LoadReport::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            report.lines_read = line_number;
            if let Some(warning) = self.apply_line(line_number, line.as_ref()) {
                tracing::debug!("{}", warning);
                report.warnings.push(warning);
            }
        }

        report.courses = self.courses.len();
        report
    }

    fn apply_line(&mut self, line_number: usize, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }

        let fields = self.parser.parse_line(line);
        if fields.len() < 2 {
            return Some(format!("Line {} skipped: fewer than 2 fields", line_number));
        }

        let id = normalize_id(&fields[0]);
        if id.is_empty() {
            return Some(format!("Line {} skipped: empty course ID", line_number));
        }

        let title = &fields[1];
        let warning = title
            .is_empty()
            .then(|| format!("Line {} has empty title for course {}", line_number, id));

        let prerequisites: Vec<String> = fields[2..]
            .iter()
            .map(|field| normalize_id(field))
            .filter(|prereq| !prereq.is_empty())
            .collect();

        let course = self.get_or_insert(&id);
        if !title.is_empty() {
            course.title = title.clone();
        }
        course.prerequisites.extend(prerequisites.iter().cloned());

        for prereq in prerequisites {
            self.get_or_insert(&prereq);
        }

        warning
    }

    fn get_or_insert(&mut self, id: &str) -> &mut Course {
        self.courses.entry(id.to_string()).or_insert_with(|| {
            tracing::debug!("Creating placeholder for {}", id);
            Course::placeholder(id)
        })
    }

    /// Titled courses sorted by ID. Placeholders are never listed.
    pub fn list(&self) -> Vec<CourseSummary> {
        let mut summaries: Vec<CourseSummary> = self
            .courses
            .values()
            .filter(|course| !course.is_placeholder())
            .map(|course| CourseSummary {
                id: course.id.clone(),
                title: course.title.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        summaries
    }

    pub fn lookup(&self, query: &str) -> Lookup {
        let id = normalize_id(query);
        if id.is_empty() {
            return Lookup::InvalidQuery;
        }

        let course = match self.courses.get(&id) {
            Some(course) if !course.is_placeholder() => course,
            _ => return Lookup::NotFound { id },
        };

        let prerequisites = course
            .prerequisites
            .iter()
            .map(|prereq_id| ResolvedPrerequisite {
                id: prereq_id.clone(),
                title: self
                    .courses
                    .get(prereq_id)
                    .filter(|prereq| !prereq.is_placeholder())
                    .map(|prereq| prereq.title.clone()),
            })
            .collect();

        Lookup::Found(CourseDetails {
            id: course.id.clone(),
            title: course.title.clone(),
            prerequisites,
        })
    }
}
