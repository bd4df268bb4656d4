/// Catalog source adapters
mod builtin_source;
mod catalog_file;
mod file_source;

pub use builtin_source::BuiltinCatalogSource;
pub use catalog_file::{parse_catalog_file, CatalogFileData};
pub use file_source::FileCatalogSource;
