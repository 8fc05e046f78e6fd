pub mod filter;
pub mod fragment_store;
pub mod loader;
pub mod util;

pub use filter::FragmentFilter;
pub use fragment_store::FragmentStore;
pub use loader::{load, CatalogSource, DirectoryLoader};
pub use util::{FragmentId, FragmentNaming, StoreConfig, METASTORE_DIR_ENV};
