use crate::error::Result;
use crate::models::Listing;
use async_trait::async_trait;

/// Common trait for anything that can hand out the full listings table
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch every listing in one round trip
    async fn fetch_all(&self) -> Result<Vec<Listing>>;

    /// Get the name of the backing store
    fn source_name(&self) -> &'static str;
}
