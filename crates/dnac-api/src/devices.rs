// Network device endpoints
//
// Inventory listing, hostname lookup, per-device interfaces, and
// site-membership assignment.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Interface, NetworkDevice};

impl ApiClient {
    /// List all network devices in the inventory.
    ///
    /// `GET /api/v1/network-device`
    pub async fn list_devices(&self) -> Result<Vec<NetworkDevice>, Error> {
        debug!("listing network devices");
        self.get_enveloped("/api/v1/network-device").await
    }

    /// Look up a single device by hostname.
    ///
    /// `GET /api/v1/network-device?hostname={hostname}` -- the inventory
    /// filter returns at most one record for an exact hostname.
    pub async fn device_by_hostname(&self, hostname: &str) -> Result<NetworkDevice, Error> {
        debug!(hostname, "looking up device by hostname");
        let devices: Vec<NetworkDevice> = self
            .get_enveloped(&format!("/api/v1/network-device?hostname={hostname}"))
            .await?;
        devices.into_iter().next().ok_or_else(|| Error::NotFound {
            resource: "device",
            identifier: hostname.to_owned(),
        })
    }

    /// List the interfaces of a device.
    ///
    /// `GET /api/v1/interface/network-device/{id}`
    pub async fn list_interfaces(&self, device_id: &str) -> Result<Vec<Interface>, Error> {
        debug!(device_id, "listing interfaces");
        self.get_enveloped(&format!("/api/v1/interface/network-device/{device_id}"))
            .await
    }

    /// Assign a device to a site.
    ///
    /// `POST /api/v1/group/{site}/member` with a `networkdevice` member
    /// list; no validation that either id exists.
    pub async fn assign_device_site(
        &self,
        device_id: &str,
        site_id: &str,
    ) -> Result<Value, Error> {
        debug!(device_id, site_id, "assigning device to site");
        let body = json!({ "networkdevice": [device_id] });
        self.post(&format!("/api/v1/group/{site_id}/member"), &body)
            .await
    }

    /// Unassign a device from a site.
    ///
    /// `DELETE /api/v1/group/{site}/member/{device}`
    pub async fn unassign_device_site(
        &self,
        device_id: &str,
        site_id: &str,
    ) -> Result<Value, Error> {
        debug!(device_id, site_id, "unassigning device from site");
        self.delete(&format!("/api/v1/group/{site_id}/member/{device_id}"))
            .await
    }
}
