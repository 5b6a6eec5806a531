pub mod json;

pub use json::JsonGraphFormatter;
