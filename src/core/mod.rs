pub mod catalog;
pub mod parser;

pub use crate::domain::model::{Course, CourseDetails, CourseSummary, LoadReport, Lookup};
pub use crate::domain::ports::{ConfigProvider, LineSource};
pub use crate::utils::error::Result;
