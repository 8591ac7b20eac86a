mod averager;
mod error;
mod key;
mod store;
mod window;

pub use averager::{Average, update};
pub use error::HistoryError;
pub use key::HistoryKey;
#[cfg(test)]
pub use store::MemoryHistoryStore;
pub use store::{FileHistoryStore, HistoryStore};
