//! C initializer-list formatting.
//!
//! Arrays are written as `TYPE name[LEN]={` followed by the element literals,
//! each carrying its trailing comma, and closed by `};` plus a blank line.
//! Elements are packed onto lines of at most [`COLUMN_LIMIT`] characters:
//! the running width is advanced by an element's text first, and only if it
//! then exceeds the limit is a newline inserted before that element.

use alloc::string::String;
use core::fmt::{self, Write};

/// Widest array-body line, in characters, before a wrap is forced.
pub const COLUMN_LIMIT: usize = 80;

/// Digits after the decimal point in floating-point literals.
pub const FLOAT_DIGITS: usize = 20;

/// Element type that can be written into a C table.
pub trait CElement {
    /// C type name used in definitions and `extern` declarations.
    const C_TYPE: &'static str;

    /// Write the literal for `self` without the trailing comma.
    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result;
}

impl CElement for u32 {
    const C_TYPE: &'static str = "uint32_t";

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{self}")
    }
}

/// Coefficients are computed in double precision and stored as
/// `float32_t`; the literal keeps the full `f64` expansion and lets the C
/// compiler round it.
impl CElement for f64 {
    const C_TYPE: &'static str = "float32_t";

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{:.*}f", FLOAT_DIGITS, self)
    }
}

/// Definition of `name` with the values of `values`.
pub fn write_array<W: Write, T: CElement>(out: &mut W, name: &str, values: &[T]) -> fmt::Result {
    writeln!(out, "{} {}[{}]={{", T::C_TYPE, name, values.len())?;

    let mut width = 0usize;
    let mut literal = String::new();
    for value in values {
        literal.clear();
        value.write_literal(&mut literal)?;
        literal.push(',');

        width += literal.len();
        if width > COLUMN_LIMIT {
            out.write_char('\n')?;
            width = literal.len();
        }
        out.write_str(&literal)?;
    }

    out.write_str("};\n\n")
}

/// `extern` declaration matching [`write_array`] for a table of `len`
/// elements.
pub fn write_extern<W: Write, T: CElement>(out: &mut W, name: &str, len: usize) -> fmt::Result {
    writeln!(out, "extern {} {}[{}];", T::C_TYPE, name, len)
}
