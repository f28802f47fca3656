// Site endpoints
//
// Sites are "groups" in the controller's inventory model, filtered by
// groupType=SITE.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::Site;

impl ApiClient {
    /// List all sites.
    ///
    /// `GET /api/v1/group/?groupType=SITE`
    pub async fn list_sites(&self) -> Result<Vec<Site>, Error> {
        debug!("listing sites");
        self.get_enveloped("/api/v1/group/?groupType=SITE").await
    }
}
