/// Error types for indicator tables
use thiserror::Error;

use crate::Indicator;

/// Structural problems found while reading indicator records.
///
/// Any of these is fatal at startup: no partial dataset is served.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A record has a blank region
    #[error("{indicator} record {record}: missing region")]
    MissingRegion { indicator: Indicator, record: usize },

    /// A record has a blank year
    #[error("{indicator} record {record}: missing year")]
    MissingYear { indicator: Indicator, record: usize },

    /// A record has a year that is not an integer
    #[error("{indicator} record {record}: invalid year {value:?}")]
    InvalidYear {
        indicator: Indicator,
        record: usize,
        value: String,
    },

    /// The same (region, year) appears twice within one family
    #[error("{indicator}: duplicate key ({region}, {year})")]
    DuplicateKey {
        indicator: Indicator,
        region: String,
        year: i32,
    },

    /// The CSV header is not `Region,Year,<indicator key>`
    #[error("{indicator} CSV header must be Region,Year,{indicator}, found {found:?}")]
    UnexpectedHeader { indicator: Indicator, found: String },

    /// The same family was supplied more than once to a merge
    #[error("{indicator} table supplied more than once")]
    DuplicateFamily { indicator: Indicator },

    /// Failed to parse CSV data
    #[error("failed to parse {indicator} CSV: {source}")]
    Csv {
        indicator: Indicator,
        #[source]
        source: csv::Error,
    },
}

/// An indicator key outside the known set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown indicator: {0:?}")]
pub struct UnknownIndicator(pub String);
