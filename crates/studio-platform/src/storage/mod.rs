pub mod memory;
pub mod local;
pub mod auto;

pub use memory::MemoryStore;
pub use local::LocalStorageStore;
pub use auto::{auto_detect_store, open_store};
