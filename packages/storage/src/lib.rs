pub mod files;

pub use object_store;
pub use object_store::path::Path;
