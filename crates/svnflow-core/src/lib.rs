//! svnflow core - workflow engine for branching on top of Subversion.
//!
//! This crate enforces a canonical svn repository layout (trunk, tags and
//! develop/feature/release/hotfix branches) and automates creating and
//! merging feature branches by driving the `svn` client.
//!
//! # Architecture
//!
//! - [`error`]: Error types and result type alias
//! - [`config`]: Configuration loaded from `.svnflow.toml`
//! - [`layout`]: Canonical directory layout
//! - [`tools`]: svn gateway and file system adapters, real and mock
//! - [`workflows`]: Validation, init, health check and feature workflows
//! - [`runtime`]: `FlowRuntime`, binding config and tools together
//!
//! # Example
//!
//! ```rust,ignore
//! use svnflow_core::{FlowConfig, FlowRuntime};
//! use std::path::PathBuf;
//!
//! let runtime = FlowRuntime::new(FlowConfig::load(PathBuf::from("/path/to/wc"))?);
//!
//! runtime.init()?;
//! let report = runtime.check_layout();
//! assert!(report.passed());
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod runtime;
pub mod tools;
pub mod workflows;

// Re-export core types for convenience
pub use config::{FlowConfig, SvnConfig};
pub use error::{FlowError, InvalidPathReason, Result};
pub use layout::Layout;
pub use runtime::FlowRuntime;
pub use tools::ToolRegistry;
pub use workflows::{CheckStatus, HealthReport, InitSummary, PathCheck};
