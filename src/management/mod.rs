mod endpoint;
mod error;
mod model;
mod provider;


pub use endpoint::queue_url;
pub use error::FetchError;
pub use model::QueueStatus;
#[cfg(test)]
pub use provider::ScriptedProvider;
pub use provider::{HttpQueueStatusProvider, QueueStatusProvider};
