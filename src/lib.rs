//! Paragraph normalizer: read a text file, normalize it, write the result.
//!
//! This crate wraps the pure [`normalize`] core with the pieces a runnable
//! tool needs:
//!
//! - [`TextStore`] / [`FsStore`]: reading and writing UTF-8 text files
//! - [`StatusSink`] / [`ConsoleSink`]: `[INFO]`/`[OK]`/`[WARN]`/`[ERROR]` lines
//! - [`Controller`]: read → normalize → write, aborting on the first failure
//! - [`AppConfig`]: defaults, `textnorm.toml`, `TEXTNORM__*` overrides
//!
//! ```no_run
//! use std::path::Path;
//! use textnorm::{ConsoleSink, Controller, FsStore};
//!
//! let mut controller = Controller::new(FsStore, ConsoleSink::stdio(true));
//! let document = controller.run(Path::new("input.txt"), Path::new("output.txt"))?;
//! println!("{:?}", document.normalized_content());
//! # Ok::<(), textnorm::PipelineError>(())
//! ```

pub mod config;
mod controller;
mod document;
mod error;
#[cfg(feature = "cli")]
pub mod logging;
mod status;
mod store;

pub use normalize::{
    NormalizedDocument, Stage, StageSnapshot, normalize, normalize_batch, normalize_document,
    normalize_traced,
};

pub use crate::config::AppConfig;
pub use crate::controller::Controller;
pub use crate::document::TextDocument;
pub use crate::error::PipelineError;
pub use crate::status::{ConsoleSink, StatusLevel, StatusSink, format_status};
pub use crate::store::{FsStore, TextStore};
