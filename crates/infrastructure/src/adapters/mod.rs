//! Port adapters.

mod file_resources;
mod reqwest_client;
mod system_clock;

pub use file_resources::FileResourceLoader;
pub use reqwest_client::ReqwestHttpClient;
pub use system_clock::SystemClock;
