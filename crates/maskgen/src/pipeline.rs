//! Table-to-report pipeline.
//!
//! 1. **Join**: register rows are paired with address entries by position;
//!    both tables must have the same length.
//! 2. **Classify**: the selected reset pattern of every row is turned into
//!    a [`MaskSet`].
//! 3. **Render**: masks become aligned literals in a [`ReportRow`].
//!
//! The first failure aborts the run, so a returned [`Report`] always covers
//! every input row.

use mask_core::MaskSet;
use tracing::{debug, info};

use crate::errors::{MaskgenError, MaskgenErrorKind, MaskgenResult, RowLocation};
use crate::report::{Report, ReportRow};
use crate::settings::Settings;
use crate::source::{AddressEntry, AddressTable, RegisterRow, RegisterTable};

/// A register row joined with its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterRecord<'a> {
    /// 0-indexed row position.
    pub index: usize,
    /// The register row.
    pub row: &'a RegisterRow,
    /// Address at the same position.
    pub address: AddressEntry,
}

/// Pairs register rows with addresses by position.
///
/// # Errors
///
/// Returns [`MaskgenErrorKind::RowCountMismatch`] if the tables differ in
/// length.
pub fn join_tables<'a>(
    registers: &'a RegisterTable,
    addresses: &AddressTable,
) -> MaskgenResult<Vec<RegisterRecord<'a>>> {
    if registers.rows.len() != addresses.entries.len() {
        return Err(MaskgenError::new(MaskgenErrorKind::RowCountMismatch {
            rows: registers.rows.len(),
            addresses: addresses.entries.len(),
        }));
    }

    Ok(registers
        .rows
        .iter()
        .zip(&addresses.entries)
        .enumerate()
        .map(|(index, (row, &address))| RegisterRecord {
            index,
            row,
            address,
        })
        .collect())
}

fn row_location(registers: &RegisterTable, record: &RegisterRecord<'_>) -> RowLocation {
    RowLocation::new(&registers.origin, record.row.line).with_row(record.index, &record.row.name)
}

/// Compiles one joined record into a report row.
///
/// # Errors
///
/// Returns [`MaskgenErrorKind::MissingPattern`] if the row has no pattern
/// in the configured column, [`MaskgenErrorKind::MisalignedPattern`] if a
/// half-token is not one nibble wide, otherwise classification and
/// rendering errors, all located at the row.
pub fn compile_record(
    registers: &RegisterTable,
    record: &RegisterRecord<'_>,
    settings: &Settings,
) -> MaskgenResult<ReportRow> {
    let column = settings.table.reset_column;
    let locate = |e: MaskgenError| e.with_location(row_location(registers, record));

    let pattern = record
        .row
        .reset_pattern(column)
        .map_err(|kind| locate(MaskgenError::new(kind)))?;
    let masks =
        MaskSet::derive(&pattern, &settings.masks).map_err(|e| locate(MaskgenError::from(e)))?;

    debug!(
        name = %record.row.name,
        address = record.address.value,
        pattern = %pattern,
        initial = masks.initial(),
        unimplemented = masks.unimplemented(),
        unknown = masks.unknown(),
        depends_on_condition = masks.depends_on_condition(),
        "classified register"
    );

    ReportRow::from_masks(
        &record.row.name,
        record.address.value,
        &masks,
        &settings.masks.literal,
    )
    .map_err(|e| locate(MaskgenError::from(e)))
}

/// Compiles both tables into a report.
///
/// # Errors
///
/// Returns the first join, classification or rendering error.
pub fn compile(
    registers: &RegisterTable,
    addresses: &AddressTable,
    settings: &Settings,
) -> MaskgenResult<Report> {
    let records = join_tables(registers, addresses)?;
    let rows = records
        .iter()
        .map(|record| compile_record(registers, record, settings))
        .collect::<MaskgenResult<Vec<_>>>()?;

    info!(
        registers = rows.len(),
        condition_dependent = rows
            .iter()
            .filter(|r| r.depends_on_condition.is_some())
            .count(),
        column = settings.table.reset_column,
        "compiled reset masks"
    );

    Ok(Report {
        layout: settings.report.clone(),
        rows,
    })
}
