//! Drives twiddle computation, rearrangement and emission for a run.

use alloc::format;
use alloc::string::String;

use crate::boilerplate;
use crate::error::TwiddleError;
use crate::reorder::{StrideTables, STRIDES};
use crate::sink::{DualSink, TableSink};
use crate::size::TransformSize;

/// Name of the offset table for stride multiplier `stride` at length `size`.
pub fn offset_table_name(stride: usize, size: TransformSize) -> String {
    format!("rearranged_twiddle_tab_stride{stride}_arr_{size}")
}

/// Name of the coefficient table for stride multiplier `stride` at length
/// `size`.
pub fn coefficient_table_name(stride: usize, size: TransformSize) -> String {
    format!("rearranged_twiddle_stride{stride}_{size}")
}

/// Emit the guarded block for one transform size: the three offset tables,
/// then the three coefficient tables.
pub fn emit_size<S: TableSink>(sink: &mut S, tables: &StrideTables) -> Result<(), TwiddleError> {
    let size = tables.size;
    sink.begin_size(size)?;
    for (t, &stride) in STRIDES.iter().enumerate() {
        sink.offset_table(&offset_table_name(stride, size), &tables.offsets[t])?;
    }
    for (t, &stride) in STRIDES.iter().enumerate() {
        sink.coefficient_table(&coefficient_table_name(stride, size), &tables.coefficients[t])?;
    }
    sink.end_size()?;
    Ok(())
}

/// Write the complete pair of files for `sizes` into `sink`.
pub fn generate<S: TableSink>(sink: &mut S, sizes: &[TransformSize]) -> Result<(), TwiddleError> {
    sink.preamble(boilerplate::SOURCE_HEADER, boilerplate::HEADER_HEADER)?;
    for &size in sizes {
        let tables = StrideTables::new(size);
        log::debug!(
            "n={}: {} stages, {} coefficients per stride table",
            size,
            size.num_stages(),
            size.array_size()
        );
        emit_size(sink, &tables)?;
    }
    sink.preamble(boilerplate::SOURCE_FOOTER, boilerplate::HEADER_FOOTER)?;
    Ok(())
}

/// Text of the definitions (`.c`) and declarations (`.h`) files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTables {
    pub definitions: String,
    pub declarations: String,
}

/// Render both files in memory.
pub fn render(sizes: &[TransformSize]) -> Result<RenderedTables, TwiddleError> {
    let mut sink = DualSink::new(String::new(), String::new());
    generate(&mut sink, sizes)?;
    let (definitions, declarations) = sink.into_inner();
    Ok(RenderedTables {
        definitions,
        declarations,
    })
}

/// Render the tables for every supported size, as shipped.
pub fn render_all() -> Result<RenderedTables, TwiddleError> {
    render(&TransformSize::ALL)
}
