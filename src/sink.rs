//! Lock-step output to the definitions and declarations files.
//!
//! Every table is written twice: once with its values into the `.c` file and
//! once as an `extern` declaration into the `.h` file. [`TableSink`] is the
//! structured interface the generator talks to; [`DualSink`] fans each call
//! out to the two text targets.

use core::fmt::{self, Write};

use crate::boilerplate;
use crate::emit::{self, CElement};
use crate::size::TransformSize;

/// Receiver of the generator's output, one call per logical record.
pub trait TableSink {
    /// Fixed text that differs between the two files (headers and footers).
    fn preamble(&mut self, definitions: &str, declarations: &str) -> fmt::Result;

    /// Open the conditional block for `size` in both files.
    fn begin_size(&mut self, size: TransformSize) -> fmt::Result;

    /// Offset table: values in the definitions, `extern` in the declarations.
    fn offset_table(&mut self, name: &str, values: &[u32]) -> fmt::Result;

    /// Coefficient table: values in the definitions, `extern` in the
    /// declarations.
    fn coefficient_table(&mut self, name: &str, values: &[f64]) -> fmt::Result;

    /// Close the block opened by [`TableSink::begin_size`].
    fn end_size(&mut self) -> fmt::Result;
}

/// [`TableSink`] writing definitions to `D` and declarations to `H`.
#[derive(Debug)]
pub struct DualSink<D, H> {
    definitions: D,
    declarations: H,
}

impl<D: Write, H: Write> DualSink<D, H> {
    pub fn new(definitions: D, declarations: H) -> Self {
        Self {
            definitions,
            declarations,
        }
    }

    /// Give back the two targets.
    pub fn into_inner(self) -> (D, H) {
        (self.definitions, self.declarations)
    }

    fn table<T: CElement>(&mut self, name: &str, values: &[T]) -> fmt::Result {
        emit::write_array(&mut self.definitions, name, values)?;
        emit::write_extern::<_, T>(&mut self.declarations, name, values.len())
    }
}

impl<D: Write, H: Write> TableSink for DualSink<D, H> {
    fn preamble(&mut self, definitions: &str, declarations: &str) -> fmt::Result {
        self.definitions.write_str(definitions)?;
        self.declarations.write_str(declarations)
    }

    fn begin_size(&mut self, size: TransformSize) -> fmt::Result {
        boilerplate::write_size_guard(&mut self.definitions, size)?;
        boilerplate::write_size_guard(&mut self.declarations, size)
    }

    fn offset_table(&mut self, name: &str, values: &[u32]) -> fmt::Result {
        self.table(name, values)
    }

    fn coefficient_table(&mut self, name: &str, values: &[f64]) -> fmt::Result {
        self.table(name, values)
    }

    fn end_size(&mut self) -> fmt::Result {
        self.definitions.write_str(boilerplate::SIZE_GUARD_END)?;
        self.declarations.write_str(boilerplate::SIZE_GUARD_END)
    }
}
