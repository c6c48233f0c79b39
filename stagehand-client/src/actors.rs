//! Actor and account API endpoints
//!
//! Pass-through reads: validate a credential, list available actors, fetch a
//! single actor's metadata and input schema.

use tracing::debug;

use crate::PlatformClient;
use crate::error::Result;
use stagehand_core::domain::actor::{ActorDetail, ActorPage};
use stagehand_core::domain::user::UserInfo;

impl PlatformClient {
    /// Validate a credential by fetching the account it belongs to.
    ///
    /// A rejected credential surfaces as `ClientError::Auth`.
    pub async fn validate_token(&self, token: &str) -> Result<UserInfo> {
        let url = format!("{}/v2/users/me", self.base_url());
        debug!("Validating platform credential");

        let response = self.http().get(&url).bearer_auth(token).send().await?;

        self.handle_enveloped(response).await
    }

    /// List actors available to the credential's account.
    ///
    /// # Arguments
    /// * `token` - Bearer credential
    /// * `limit` - Maximum number of actors to return
    pub async fn list_actors(&self, token: &str, limit: u32) -> Result<ActorPage> {
        let url = format!("{}/v2/acts", self.base_url());
        debug!(limit, "Listing actors");

        let response = self
            .http()
            .get(&url)
            .bearer_auth(token)
            .query(&[("limit", limit)])
            .send()
            .await?;

        self.handle_enveloped(response).await
    }

    /// Get a single actor's metadata, including its declared input schema.
    pub async fn get_actor(&self, actor_id: &str, token: &str) -> Result<ActorDetail> {
        let url = format!("{}/v2/acts/{}", self.base_url(), actor_id);
        debug!(actor_id, "Fetching actor detail");

        let response = self.http().get(&url).bearer_auth(token).send().await?;

        self.handle_enveloped(response).await
    }
}
