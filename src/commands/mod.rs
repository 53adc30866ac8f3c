//! Command implementations

pub mod archive;
pub mod check;
pub mod dev_date;
pub mod results;
pub mod simple;
pub mod stats;

pub use archive::{ArchiveEntry, ArchiveSummary, DayStatus, MonthGroup, build_archive, day_status};
pub use check::{CheckFailure, CheckReport, run_check};
pub use dev_date::{DevDateAction, run_dev_date};
pub use results::{ResultsView, results_for};
pub use simple::run_simple;
pub use stats::{AuthorShare, AuthorStatistics, author_statistics};
