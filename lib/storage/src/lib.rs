pub mod manager;
pub mod source;
pub mod store;

pub use manager::ModelManager;
pub use source::{CatalogSource, JsonFileSource, StaticSource};
pub use store::{ModelStore, SnapshotInfo};
