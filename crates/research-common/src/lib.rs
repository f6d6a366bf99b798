pub mod context;
pub mod error;
pub mod runmeta;
pub mod telemetry;

pub use context::RepoContext;
pub use error::{ReportError, Result};
pub use runmeta::RunMeta;
