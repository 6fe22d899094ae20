pub mod api;
pub mod dart_types;
pub mod simple;
