pub mod instances;
pub mod list;
