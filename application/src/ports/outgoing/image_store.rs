use std::sync::Arc;

use crate::error::AppResult;

/// A single well-known image file. Every write replaces the previous content.
#[async_trait::async_trait]
pub trait ImageStorePort: Send + Sync {
    async fn write_image(&self, png_data: &[u8]) -> AppResult<()>;

    async fn read_image(&self) -> AppResult<Vec<u8>>;

    fn location(&self) -> String;
}

pub type DynImageStorePort = Arc<dyn ImageStorePort>;
