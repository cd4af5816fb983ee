//! # mve-twiddle - rearranged twiddle tables for the CMSIS-DSP MVE FFTs
//!
//! The Helium (MVE) radix-4 kernels in CMSIS-DSP do not walk the usual
//! full-circle twiddle table. They read three stage-major tables per
//! transform size, holding `W^k`, `W^2k` and `W^3k` for every butterfly of
//! every stage, plus offset tables that locate each stage. This crate
//! computes those tables and writes them as `arm_mve_tables.c` /
//! `arm_mve_tables.h`.
//!
//! ## Pipeline
//!
//! 1. [`twiddle::twiddle`] - interleaved `cos`/`sin` of `2πk/n`
//! 2. [`reorder::rearrange`] - split into the three stride tables
//! 3. [`sink::DualSink`] - definitions and `extern` declarations in lock step
//! 4. [`output::write_tables`] - both files on disk (`std` only)
//!
//! ## Cargo Features
//!
//! - `std` (default): file output and BLAKE3 digests of the written files.
//!   Without it the crate is `no_std` + `alloc` and can still render the
//!   text in memory with [`generate::render`].
//!
//! ## Example
//!
//! ```
//! use mve_twiddle::{render, TransformSize};
//!
//! let text = render(&[TransformSize::N16]).unwrap();
//! assert!(text
//!     .declarations
//!     .contains("extern float32_t rearranged_twiddle_stride1_16[8];"));
//! ```

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod boilerplate;
pub mod emit;
pub mod error;
pub mod generate;
pub mod num;
pub mod reorder;
pub mod sink;
pub mod size;
pub mod twiddle;

/// File output for generator runs.
#[cfg(feature = "std")]
pub mod output;

pub use error::TwiddleError;
pub use generate::{render, render_all, RenderedTables};
pub use reorder::{rearrange, StrideTables};
pub use sink::{DualSink, TableSink};
pub use size::TransformSize;

#[cfg(feature = "std")]
pub use output::{write_tables, write_tables_for, GenerationReport, OutputPaths};
