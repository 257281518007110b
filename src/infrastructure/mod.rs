pub mod embedding;
pub mod observability;
pub mod persistence;
