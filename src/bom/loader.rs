use std::fs::File;
use std::io::{BufReader,Read};
use std::path::{Path,PathBuf};
use log::{debug,info,warn};

use crate::bom::columns::{ColumnSpec,LogicalColumn,MissingColumn};
use crate::bom::table::{PartTable,QuantityMismatch};

/// Log target for quantity mismatch warnings.  These must always be shown, so
/// the binary never filters this target below `Warn`.
pub const MISMATCH_LOG_TARGET : &str = module_path!();

#[derive(thiserror::Error,Debug)]
pub enum LoadError {
    #[error("Unable to open '{path:?}'")]
    Io { path : PathBuf, #[source] source : std::io::Error },
    #[error("File missing header row: '{0}'")]
    EmptyFile(String),
    #[error("{file}: {source}")]
    MissingColumn { file : String, #[source] source : MissingColumn },
    #[error("{file} line {row}: quantity '{value}' is not an integer")]
    BadQuantity { file : String, row : usize, value : String },
    #[error("{file} line {row}: no {column} column in this row")]
    MissingCell { file : String, row : usize, column : LogicalColumn },
    #[error("{file}: malformed CSV data")]
    Csv { file : String, #[source] source : csv::Error }
}

/// Load the BOM at `file_path`, aggregating designators by part number
///
/// The file is closed before this returns, whether or not loading succeeded.
pub fn load_parts(file_path : &Path) -> Result<PartTable, LoadError> {
    let f = File::open(file_path).map_err(|source| LoadError::Io { path : file_path.to_path_buf(), source })?;
    let reader = BufReader::new(f);
    load_parts_from_reader(&file_path.display().to_string(), reader)
}

/// Load a BOM from any reader; `name` is only used for warnings and errors
pub fn load_parts_from_reader<R : Read>(name : &str, reader : R) -> Result<PartTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let csv_err = |source| LoadError::Csv { file : name.to_owned(), source };

    let header = read_header(&mut csv_reader).map_err(csv_err)?;
    if header.is_empty() {
        return Err(LoadError::EmptyFile(name.to_owned()));
    }
    let spec = ColumnSpec::resolve(&header)
        .map_err(|source| LoadError::MissingColumn { file : name.to_owned(), source })?;
    debug!("{}: quantity in column {}, designators in column {}, part number in column {}",
           name, spec.quantity, spec.designator, spec.identifier);

    let mut parts = PartTable::new();
    let mut records = 0;
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(csv_err)?;
        // The header is row 1
        let row = idx + 2;
        let cell = |column : LogicalColumn, index : usize| {
            record.get(index).ok_or_else(|| LoadError::MissingCell { file : name.to_owned(), row, column })
        };

        let raw_quantity = cell(LogicalColumn::Quantity, spec.quantity)?;
        let quantity = parse_quantity(raw_quantity).ok_or_else(|| LoadError::BadQuantity {
            file : name.to_owned(),
            row,
            value : raw_quantity.to_owned()
        })?;
        let designators = split_designators(cell(LogicalColumn::Designator, spec.designator)?);
        let identifier = cell(LogicalColumn::Identifier, spec.identifier)?.trim().to_owned();

        if quantity != designators.len() as i64 {
            let mismatch = QuantityMismatch {
                file : name.to_owned(),
                row,
                quantity,
                designators : designators.len()
            };
            warn!(target: MISMATCH_LOG_TARGET, "{}", mismatch);
            parts.record_warning(mismatch);
        }

        parts.append(identifier, designators);
        records += 1;
    }

    info!("{}: loaded {} records covering {} part numbers", name, records, parts.len());
    Ok(parts)
}

/// Read the header record with every cell trimmed.  An empty vector means the
/// input had no header at all.
///
/// A leading UTF-8 byte order mark is removed from the first cell on purpose;
/// plain whitespace trimming would leave it attached and `Quantity` (or
/// whichever column comes first) would then fail to match.
fn read_header<R : Read>(csv_reader : &mut csv::Reader<R>) -> Result<Vec<String>, csv::Error> {
    let header = csv_reader.headers()?;
    Ok(header.iter().enumerate().map(|(i, h)| {
        let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
        h.trim().to_owned()
    }).collect())
}

fn parse_quantity(cell : &str) -> Option<i64> {
    cell.trim().parse::<i64>().ok()
}

/// Split a designator list cell like `"R1, R2,R3"` into its trimmed entries
///
/// An empty cell yields a single empty designator; that is what the exports we
/// compare against have always produced, so it is kept.
pub fn split_designators(cell : &str) -> Vec<String> {
    cell.split(',').map(|d| d.trim().to_owned()).collect()
}
