// WLAN (SSID) endpoints
//
// SSIDs live in the `wlan` common-setting collection. The listing mixes
// record types; only `instanceType == "wlan"` entries carry an SSID,
// decoded from the first element of the record's `value` array. Deletion
// is by setting key (`wlan.info.<ssid>`), not by server-issued id.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::{ApiClient, decode};
use crate::error::Error;
use crate::models::{Wlan, WlanRecord};

const SETTING_PATH: &str = "/api/v1/commonsetting/wlan/-1";

impl ApiClient {
    /// List all WLANs.
    ///
    /// `GET /api/v1/commonsetting/wlan/-1`, keeping only records with
    /// `instanceType == "wlan"`. A wlan record whose `value` carries no
    /// SSID fails the whole listing.
    pub async fn list_wlans(&self) -> Result<Vec<Wlan>, Error> {
        debug!("listing wlans");
        let records: Vec<Value> = self.get_enveloped(SETTING_PATH).await?;

        let mut wlans = Vec::new();
        for raw in records {
            if raw.get("instanceType").and_then(Value::as_str) != Some("wlan") {
                continue;
            }
            let record: WlanRecord = decode(raw)?;
            let ssid = record
                .value
                .into_iter()
                .next()
                .ok_or_else(|| Error::Deserialization {
                    message: format!("wlan record '{}' has an empty value list", record.key),
                    body: String::new(),
                })?
                .ssid;
            wlans.push(Wlan {
                ssid,
                key: record.key,
            });
        }
        Ok(wlans)
    }

    /// Create a WLAN with the controller's enterprise defaults.
    ///
    /// `POST /api/v1/commonsetting/wlan/-1` with a single-element
    /// `wlan.setting` record keyed `wlan.info.<ssid>`.
    pub async fn create_wlan(&self, ssid: &str) -> Result<Value, Error> {
        debug!(ssid, "creating wlan");
        let body = json!([
            {
                "instanceType": "wlan",
                "namespace": "wlan",
                "type": "wlan.setting",
                "key": format!("wlan.info.{ssid}"),
                "value": [
                    {
                        "ssid": ssid,
                        "profileName": "",
                        "wlanType": "Enterprise",
                        "authType": "wpa2_enterprise",
                        "authServer": "auth_ise",
                        "authSecServer": "",
                        "redirectUrl": "",
                        "peerIp": "",
                        "isEnabled": true,
                        "isEmailReqd": false,
                        "isFabric": true,
                        "fabricId": null,
                        "isFastLaneEnabled": false,
                        "isMacFilteringEnabled": false,
                        "trafficType": "voicedata",
                        "radioPolicy": 0,
                        "wlanBandSelectEnable": false,
                        "scalableGroupTag": "",
                        "passphrase": "",
                        "portalType": "",
                        "portalName": "",
                        "redirectUrlType": "",
                        "externalAuthIpAddress": "",
                        "isBroadcastSSID": true,
                        "fastTransition": "ADAPTIVE"
                    }
                ],
                "groupUuid": "-1"
            }
        ]);
        self.post(SETTING_PATH, &body).await
    }

    /// Delete a WLAN by its setting key.
    ///
    /// `DELETE /api/v1/commonsetting/wlan/-1/{key}`
    pub async fn delete_wlan(&self, key: &str) -> Result<Value, Error> {
        debug!(key, "deleting wlan");
        self.delete(&format!("{SETTING_PATH}/{key}")).await
    }
}
