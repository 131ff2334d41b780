//! Command Line Interface (CLI) layer for pdfimages-rs.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! extraction. It wires user-provided flags into `ExtractParams` and hands
//! them to the library.
//!
//! If you are embedding this into another application, use the library
//! (`pdfimages::Command` or `pdfimages::api`) instead of the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
