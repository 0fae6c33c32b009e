//! Workflow modules for svnflow.
//!
//! This module organizes the workflow implementations:
//! - `validate`: tracked-path validity rule
//! - `init`: bootstrap the canonical layout
//! - `health`: read-only layout check behind `svnflow test`
//! - `feature`: start, finish and list feature branches

pub mod feature;
pub mod health;
pub mod init;
pub mod validate;

use crate::error::Result;
use crate::tools::svn::SvnAdapter;

// Re-export workflow functions
pub use feature::{finish_feature, list_features, start_feature};
pub use health::{CheckStatus, HealthReport, PathCheck, check_layout};
pub use init::{InitSummary, init_layout};
pub use validate::{assert_exists, assert_path_valid};

fn commit_and_log(svn: &dyn SvnAdapter, message: &str) -> Result<()> {
    svn.commit(message)?;
    tracing::info!("{}", message);
    Ok(())
}
