use std::time::Duration;

use crate::HarvestError;

/// Handle on a single rendered browser page.
///
/// The page is a session with one current location, so every method takes
/// `&mut self`: navigation and reads are strictly sequential and the handle is
/// never shared between tasks.
#[async_trait::async_trait]
pub trait PageRenderer: Send {
    /// Navigate to `url` and wait until the DOM content has loaded.
    async fn open(&mut self, url: &str) -> Result<(), HarvestError>;

    /// Wait until `selector` matches something, or fail after `timeout`.
    async fn wait_for_selector(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), HarvestError>;

    /// Current rendered HTML of the page.
    async fn content(&mut self) -> Result<String, HarvestError>;

    /// Click the first element matching `selector`.
    async fn click(&mut self, selector: &str) -> Result<(), HarvestError>;
}
