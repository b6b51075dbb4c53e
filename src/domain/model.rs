use serde::Serialize;

/// A catalog entry. An empty `title` marks a placeholder that so far has only
/// been referenced as a prerequisite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            prerequisites: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.title.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
}

/// A prerequisite ID paired with its title, or `None` when the title is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrerequisite {
    pub id: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetails {
    pub id: String,
    pub title: String,
    pub prerequisites: Vec<ResolvedPrerequisite>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    Found(CourseDetails),
    NotFound { id: String },
    InvalidQuery,
}

/// Outcome of a successful load: course count plus soft issues, one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines_read: usize,
    pub courses: usize,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
