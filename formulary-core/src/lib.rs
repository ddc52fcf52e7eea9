//! Compound formula tables backed by Excel/ODS files
//!
//! Loads a spreadsheet of compound names and formulas, rewrites formula
//! digits as Unicode subscripts and answers exact-name lookups.

pub mod error;
pub mod normalize;
pub mod reader;
pub mod table;

pub use error::LoadError;
pub use normalize::to_subscript;
pub use reader::{ReadOptions, read_compound_table, table_from_range};
pub use table::{
    ColumnNames, CompoundRecord, CompoundTable, DEFAULT_FORMULA_COLUMN, DEFAULT_NAME_COLUMN,
    LookupResult,
};
