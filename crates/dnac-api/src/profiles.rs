// Site profile endpoints
//
// Profiles bundle wireless attributes (SSID, interface, VLAN) and get
// assigned to sites. Creation POSTs a fixed nested body the controller
// expects verbatim; assignment is a path join of profile and site ids
// with no body and no existence validation of either id.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Profile, ProfileDetail, ProfileRecord};

impl ApiClient {
    /// List all site profiles, resolving each profile's assigned sites
    /// with a secondary per-profile fetch.
    ///
    /// `GET /api/v1/siteprofile`, then
    /// `GET /api/v1/siteprofile/{id}?includeSites=true` per profile.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, Error> {
        debug!("listing site profiles");
        let records: Vec<ProfileRecord> = self.get_enveloped("/api/v1/siteprofile").await?;

        let mut profiles = Vec::with_capacity(records.len());
        for record in records {
            let detail: ProfileDetail = self
                .get_enveloped(&format!(
                    "/api/v1/siteprofile/{}?includeSites=true",
                    record.id
                ))
                .await?;
            profiles.push(Profile {
                id: record.id,
                name: record.name,
                namespace: record.namespace,
                sites: detail.sites,
            });
        }
        Ok(profiles)
    }

    /// Create a wireless site profile.
    ///
    /// `POST /api/v1/siteprofile` with the fixed wireless attribute body
    /// the controller expects: one `wireless.ssid` profile attribute
    /// carrying the interface name and VLAN id.
    pub async fn create_profile(
        &self,
        name: &str,
        interface_name: &str,
        vlan_id: &str,
    ) -> Result<Value, Error> {
        debug!(name, "creating site profile");
        let body = json!({
            "attributesList": [],
            "groupTypeList": [],
            "id": "",
            "interfaceList": [],
            "lastUpdatedBy": "",
            "lastUpdatedDatetime": 0,
            "name": name,
            "namespace": "wlan",
            "namingPrefix": "",
            "primaryDeviceType": "",
            "secondaryDeviceType": "",
            "profileAttributes": [
                {
                    "key": "wireless.ssid",
                    "value": name,
                    "attribs": [
                        { "key": "wireless.fabric", "value": false },
                        { "key": "wireless.flexConnect", "value": false },
                        { "key": "wireless.authMode", "value": "central" },
                        { "key": "wireless.trafficSwitchingMode", "value": "fabric" },
                        { "key": "wireless.interfaceName", "value": interface_name },
                        { "key": "wireless.vlanId", "value": vlan_id }
                    ]
                }
            ],
            "siteAssociationId": "",
            "siteProfileType": "",
            "siteProfileUuid": "",
            "status": "",
            "version": 0
        });
        self.post("/api/v1/siteprofile", &body).await
    }

    /// Delete a site profile by id.
    ///
    /// `DELETE /api/v1/siteprofile/{id}`
    pub async fn delete_profile(&self, id: &str) -> Result<Value, Error> {
        debug!(id, "deleting site profile");
        self.delete(&format!("/api/v1/siteprofile/{id}")).await
    }

    /// Assign a site to a profile.
    ///
    /// `POST /api/v1/siteprofile/{profile}/site/{site}` (empty body)
    pub async fn assign_profile_site(
        &self,
        profile_id: &str,
        site_id: &str,
    ) -> Result<Value, Error> {
        debug!(profile_id, site_id, "assigning site to profile");
        self.post_empty(&format!("/api/v1/siteprofile/{profile_id}/site/{site_id}"))
            .await
    }

    /// Unassign a site from a profile.
    ///
    /// `DELETE /api/v1/siteprofile/{profile}/site/{site}`
    pub async fn unassign_profile_site(
        &self,
        profile_id: &str,
        site_id: &str,
    ) -> Result<Value, Error> {
        debug!(profile_id, site_id, "unassigning site from profile");
        self.delete(&format!("/api/v1/siteprofile/{profile_id}/site/{site_id}"))
            .await
    }
}
