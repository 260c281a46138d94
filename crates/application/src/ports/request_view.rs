//! Request view port

use async_trait::async_trait;

use crate::error::HostResult;

/// Opens the request management/detail view owned by another provider.
#[async_trait]
pub trait RequestViewOpener: Send + Sync {
    /// Opens (or reveals) the request view.
    ///
    /// # Errors
    ///
    /// Returns `HostError::RequestView` if the view cannot be shown.
    async fn open_request_view(&self) -> HostResult<()>;
}
