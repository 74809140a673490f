pub mod json_file;

pub use json_file::{JsonFileStore, StoreError};
