use std::fmt;

/// Header names accepted for the quantity column, highest priority first
pub const QUANTITY_ALIASES : &[&str] = &["Quantity", "Q"];
/// Header names accepted for the designator list column
pub const DESIGNATOR_ALIASES : &[&str] = &["Designator", "RefDes", "Ref"];
/// Header names accepted for the manufacturer part number column
pub const IDENTIFIER_ALIASES : &[&str] = &["Manufacturer Part Number 1", "MPN", "Part Number"];

/// The columns of a BOM export that the diff actually cares about
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum LogicalColumn {
    Quantity,
    Designator,
    Identifier
}

impl LogicalColumn {
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            LogicalColumn::Quantity => { QUANTITY_ALIASES }
            LogicalColumn::Designator => { DESIGNATOR_ALIASES }
            LogicalColumn::Identifier => { IDENTIFIER_ALIASES }
        }
    }
}

impl fmt::Display for LogicalColumn {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalColumn::Quantity => { write!(f, "quantity") }
            LogicalColumn::Designator => { write!(f, "designator") }
            LogicalColumn::Identifier => { write!(f, "part number") }
        }
    }
}

#[derive(thiserror::Error,Debug,PartialEq,Eq)]
#[error("Header not found: {}", .aliases.join(", "))]
pub struct MissingColumn {
    pub column : LogicalColumn,
    pub aliases : Vec<String>
}

/// Find the index of the first alias (in alias order, not header order) that
/// appears verbatim in the header
pub fn resolve_column<S : AsRef<str>>(header : &[S], aliases : &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| {
        header.iter().position(|h| h.as_ref() == *alias)
    })
}

/// Column indices for one particular file
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct ColumnSpec {
    pub quantity : usize,
    pub designator : usize,
    pub identifier : usize
}

impl ColumnSpec {
    /// Resolve all three logical columns against an already-trimmed header
    pub fn resolve<S : AsRef<str>>(header : &[S]) -> Result<ColumnSpec, MissingColumn> {
        let lookup = |column : LogicalColumn| {
            resolve_column(header, column.aliases()).ok_or_else(|| MissingColumn {
                column,
                aliases : column.aliases().iter().map(|a| a.to_string()).collect()
            })
        };
        Ok(ColumnSpec {
            quantity : lookup(LogicalColumn::Quantity)?,
            designator : lookup(LogicalColumn::Designator)?,
            identifier : lookup(LogicalColumn::Identifier)?
        })
    }
}
