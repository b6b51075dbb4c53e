pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::session::Session;
pub use crate::config::{cli::LocalStorage, Settings};
pub use crate::core::{catalog::Catalog, parser::FieldParser};
pub use crate::domain::model::{Course, CourseDetails, CourseSummary, LoadReport, Lookup, ResolvedPrerequisite};
pub use crate::utils::error::{AdvisorError, Result};
