// Wireless VLAN endpoints
//
// Wireless VLANs live as one list-valued global common setting
// (`interface.info`). There is no per-element resource: create and delete
// both read the current list, edit it in memory, and POST the full
// replacement back. No optimistic-concurrency check is performed, so two
// clients editing concurrently can silently lose updates.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::WirelessVlan;

const SETTING_PATH: &str = "/api/v1/commonsetting/global/-1?key=interface.info";

/// One record of the `interface.info` setting; the VLAN list is its value.
#[derive(Debug, Deserialize)]
struct InterfaceSettingRecord {
    value: Vec<WirelessVlan>,
}

impl ApiClient {
    /// List all wireless VLANs.
    ///
    /// `GET /api/v1/commonsetting/global/-1?key=interface.info`, decoding
    /// the first response record's `value` list.
    pub async fn list_wireless_vlans(&self) -> Result<Vec<WirelessVlan>, Error> {
        debug!("listing wireless vlans");
        let mut records: Vec<InterfaceSettingRecord> = self.get_enveloped(SETTING_PATH).await?;
        if records.is_empty() {
            return Err(Error::Deserialization {
                message: "interface.info setting has no records".into(),
                body: "[]".into(),
            });
        }
        Ok(records.remove(0).value)
    }

    /// Create a wireless VLAN: fetch the current list, append the new
    /// element, and POST the full replacement.
    pub async fn create_wireless_vlan(&self, vlan: WirelessVlan) -> Result<Value, Error> {
        debug!(vlan_id = %vlan.vlan_id, "creating wireless vlan");
        let current = self.list_wireless_vlans().await?;
        let replacement = append_vlan(current, vlan);
        self.replace_wireless_vlans(&replacement).await
    }

    /// Delete wireless VLAN(s) by VLAN id: fetch the current list, drop
    /// every element matching the id by string comparison, and POST the
    /// remainder.
    pub async fn delete_wireless_vlan(&self, vlan_id: &str) -> Result<Value, Error> {
        debug!(vlan_id, "deleting wireless vlan");
        let current = self.list_wireless_vlans().await?;
        let replacement = remove_vlan(current, vlan_id);
        self.replace_wireless_vlans(&replacement).await
    }

    /// Replace the entire server-held VLAN list.
    ///
    /// `POST /api/v1/commonsetting/global/-1?key=interface.info` with the
    /// fixed `interface.setting` envelope.
    pub async fn replace_wireless_vlans(&self, vlans: &[WirelessVlan]) -> Result<Value, Error> {
        let body = interface_setting_body(vlans);
        self.post(SETTING_PATH, &body).await
    }
}

/// Append a VLAN to the list, preserving existing order.
pub fn append_vlan(mut vlans: Vec<WirelessVlan>, vlan: WirelessVlan) -> Vec<WirelessVlan> {
    vlans.push(vlan);
    vlans
}

/// Remove every VLAN whose id string-matches, leaving the others untouched.
pub fn remove_vlan(vlans: Vec<WirelessVlan>, vlan_id: &str) -> Vec<WirelessVlan> {
    vlans
        .into_iter()
        .filter(|v| !v.vlan_id.matches(vlan_id))
        .collect()
}

/// Build the replacement-list POST body.
fn interface_setting_body(vlans: &[WirelessVlan]) -> Value {
    json!([
        {
            "instanceType": "interface",
            "namespace": "global",
            "type": "interface.setting",
            "key": "interface.info",
            "value": vlans,
            "groupUuid": "-1",
            "inheritedGroupUuid": "",
            "inheritedGroupName": ""
        }
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::VlanId;

    fn vlan(interface_name: &str, vlan_id: u64) -> WirelessVlan {
        WirelessVlan {
            interface_name: interface_name.into(),
            vlan_id: VlanId::Number(vlan_id),
        }
    }

    fn vlan_text(interface_name: &str, vlan_id: &str) -> WirelessVlan {
        WirelessVlan {
            interface_name: interface_name.into(),
            vlan_id: VlanId::Text(vlan_id.into()),
        }
    }

    #[test]
    fn append_preserves_prior_elements_and_order() {
        let stored = vec![vlan("A", 10)];
        let result = append_vlan(stored, vlan("B", 20));
        assert_eq!(result, vec![vlan("A", 10), vlan("B", 20)]);
    }

    #[test]
    fn remove_drops_only_matching_elements() {
        let stored = vec![vlan("A", 10), vlan("B", 20), vlan("C", 10)];
        let result = remove_vlan(stored, "10");
        assert_eq!(result, vec![vlan("B", 20)]);
    }

    #[test]
    fn remove_matches_number_and_string_ids_alike() {
        // CLI-written lists hold string ids, UI-written lists hold
        // numbers; a delete for "87" must drop both forms.
        let stored = vec![vlan_text("A", "87"), vlan("B", 87), vlan("C", 10)];
        let result = remove_vlan(stored, "87");
        assert_eq!(result, vec![vlan("C", 10)]);
    }

    #[test]
    fn remove_with_no_match_is_identity() {
        let stored = vec![vlan("A", 10), vlan("B", 20)];
        let result = remove_vlan(stored.clone(), "99");
        assert_eq!(result, stored);
    }

    #[test]
    fn setting_body_wraps_list_in_interface_envelope() {
        let body = interface_setting_body(&[vlan("A", 10)]);
        assert_eq!(body[0]["key"], "interface.info");
        assert_eq!(body[0]["instanceType"], "interface");
        assert_eq!(body[0]["value"][0]["interfaceName"], "A");
        assert_eq!(body[0]["value"][0]["vlanId"], 10);
    }

    #[test]
    fn setting_body_round_trips_string_ids_unchanged() {
        let body = interface_setting_body(&[vlan_text("A", "87")]);
        assert_eq!(body[0]["value"][0]["vlanId"], "87");
    }
}
