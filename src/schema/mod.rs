pub mod builtin;
pub mod store;
pub mod types;

pub use builtin::{BLC_SCHEMA, MCA_SCHEMA};
pub use store::SchemaCatalog;
pub use types::{ColumnSpec, ConstantColumn, LenderSchema, DEFAULT_KEY_HEADER};
