//! # Treecat
//!
//! `treecat` walks a directory tree to a bounded depth, decides for every
//! file and subdirectory whether it is included, and concatenates the content
//! of every surviving file into a single stream (stdout or an output file),
//! each file framed by delimiter lines.
//!
//! Selection is driven by an ordered list of exclusion patterns (bare names,
//! relative paths, basename globs, `dir/*` children, `dir/**` subtrees, and
//! `!path` negations that re-include), an extension exclude list, and a
//! binary-content gate.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treecat::{TreecatBuilder, treecat};
//!
//! let options = TreecatBuilder::new(".")
//!     .file_type("rs")
//!     .max_depth(3)
//!     .exclude_patterns(vec!["target/**".into(), "!target/doc".into()])
//!     .build();
//!
//! let report = treecat(&options).expect("walk failed");
//! if !report.found() {
//!     eprintln!("nothing matched");
//! }
//! ```

mod binary;
mod engine;
mod error;
mod filter;
mod matcher;
mod options;
pub mod output;
mod types;

pub use binary::is_binary;
pub use engine::{treecat, treecat_with_sink};
pub use error::TreecatError;
pub use filter::is_type_excluded;
pub use matcher::ExcludeMatcher;
pub use options::{BinaryDetection, TreecatBuilder, TreecatOptions};
pub use output::Sink;
pub use types::{Candidate, PathKind, TreecatReport};
