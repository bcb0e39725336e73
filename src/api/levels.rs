//! Game-master endpoints: starting and controlling level instances.

use super::StockfighterClient;
use crate::domain::level::wire::{LevelResponse, LevelStatusResponse};
use crate::domain::level::{level_name, LevelInfo, LevelStatus};
use crate::error::ApiResult;
use crate::http::{HttpRequest, Transport};

impl<T: Transport> StockfighterClient<T> {
    fn instance_url(&self, instance_id: u64, action: Option<&str>) -> String {
        match action {
            Some(action) => format!("{}/instances/{}/{}", self.gm_url, instance_id, action),
            None => format!("{}/instances/{}", self.gm_url, instance_id),
        }
    }

    /// Start a level by number.
    ///
    /// Fails with [`ApiError::UnknownLevel`](crate::error::ApiError::UnknownLevel)
    /// before any I/O if the number has no known name.
    pub async fn start_level(&self, level: u32) -> ApiResult<LevelInfo> {
        let name = level_name(level)?;
        let url = format!("{}/levels/{}", self.gm_url, name);
        let request = self.authenticated(HttpRequest::post(url))?;
        tracing::info!(level, level_name = name, "Starting level");
        self.fetch::<LevelResponse, _>(request).await
    }

    /// Restart an instance with a fresh assignment.
    pub async fn restart_level(&self, instance_id: u64) -> ApiResult<LevelInfo> {
        let url = self.instance_url(instance_id, Some("restart"));
        let request = self.authenticated(HttpRequest::post(url))?;
        self.fetch::<LevelResponse, _>(request).await
    }

    /// Stop an instance.
    pub async fn stop_level(&self, instance_id: u64) -> ApiResult<()> {
        let url = self.instance_url(instance_id, Some("stop"));
        let request = self.authenticated(HttpRequest::post(url))?;
        self.round_trip(request).await?;
        Ok(())
    }

    /// Resume a stopped instance.
    pub async fn resume_level(&self, instance_id: u64) -> ApiResult<LevelInfo> {
        let url = self.instance_url(instance_id, Some("resume"));
        let request = self.authenticated(HttpRequest::post(url))?;
        self.fetch::<LevelResponse, _>(request).await
    }

    /// Get the status of an instance. A stopped instance reports an error.
    pub async fn get_level_status(&self, instance_id: u64) -> ApiResult<LevelStatus> {
        let url = self.instance_url(instance_id, None);
        let request = self.authenticated(HttpRequest::get(url))?;
        self.fetch::<LevelStatusResponse, _>(request).await
    }
}
