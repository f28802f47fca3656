// DNA Center response types
//
// Models for the northbound v1 JSON API. Fields the CLI surfaces are
// required; a record missing one fails the whole collection decode
// (matching the controller's all-or-nothing listing contract). Everything
// else is either `#[serde(default)]` or dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Site ─────────────────────────────────────────────────────────────

/// A site (group) from `/api/v1/group/?groupType=SITE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(rename = "groupNameHierarchy")]
    pub group_name_hierarchy: String,
}

// ── Profile ──────────────────────────────────────────────────────────

/// Wire record from `/api/v1/siteprofile`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileRecord {
    #[serde(rename = "siteProfileUuid")]
    pub id: String,
    pub name: String,
    pub namespace: String,
}

/// A wireless site profile, with its assigned sites resolved by a
/// secondary per-profile fetch.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub namespace: String,
    pub sites: Vec<ProfileSite>,
}

/// One site assignment on a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSite {
    pub name: String,
    pub uuid: String,
}

/// Detail payload from `/api/v1/siteprofile/{id}?includeSites=true`.
/// `sites` is absent entirely when the profile has no assignments.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileDetail {
    #[serde(default)]
    pub sites: Vec<ProfileSite>,
}

// ── Wireless VLAN ────────────────────────────────────────────────────

/// One element of the list-valued `interface.info` global setting.
///
/// Identity is positional within the server-held list; there is no
/// server-issued key. Create/delete therefore replace the entire list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirelessVlan {
    #[serde(rename = "interfaceName")]
    pub interface_name: String,
    #[serde(rename = "vlanId")]
    pub vlan_id: VlanId,
}

/// VLAN id as stored on the controller.
///
/// Lists written through the web UI hold numbers while lists written by
/// CLI clients hold the raw strings they were invoked with; both appear
/// in the wild, sometimes in the same list. Matching is by string
/// comparison of the rendered value, and serialization round-trips each
/// element unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VlanId {
    Number(u64),
    Text(String),
}

impl VlanId {
    /// Build from a CLI-supplied value: numeric strings become numbers,
    /// anything else is kept verbatim.
    pub fn from_arg(raw: &str) -> Self {
        raw.parse()
            .map_or_else(|_| Self::Text(raw.to_owned()), Self::Number)
    }

    /// String-compare against a CLI-supplied value; `"87"` matches both
    /// the number `87` and the string `"87"`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Number(n) => n.to_string() == raw,
            Self::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ── WLAN ─────────────────────────────────────────────────────────────

/// An SSID decoded from the `wlan` common-setting collection.
#[derive(Debug, Clone, Serialize)]
pub struct Wlan {
    pub ssid: String,
    /// The setting key (`wlan.info.<ssid>`), used to delete the record.
    pub key: String,
}

/// Raw record from `/api/v1/commonsetting/wlan/-1`. Only records with
/// `instanceType == "wlan"` carry SSID payloads in `value`.
#[derive(Debug, Deserialize)]
pub(crate) struct WlanRecord {
    pub key: String,
    pub value: Vec<WlanValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WlanValue {
    pub ssid: String,
}

// ── Network device ───────────────────────────────────────────────────

/// Inventory record from `/api/v1/network-device`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDevice {
    pub id: String,
    pub hostname: String,
    #[serde(rename = "managementIpAddress")]
    pub management_ip_address: String,
    pub family: String,
}

/// Port record from `/api/v1/interface/network-device/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    #[serde(rename = "portName")]
    pub port_name: String,
    #[serde(rename = "adminStatus", default)]
    pub admin_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "vlanId", default)]
    pub vlan_id: Option<String>,
    #[serde(rename = "voiceVlan", default)]
    pub voice_vlan: Option<String>,
}

// ── Template ─────────────────────────────────────────────────────────

/// Summary record from `/api/v1/template-programmer/template`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TemplateSummary {
    #[serde(rename = "templateId")]
    pub id: String,
    pub name: String,
}

/// Detail payload from `/api/v1/template-programmer/template/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(rename = "templateParams", default)]
    pub params: Vec<TemplateParam>,
    #[serde(rename = "templateContent", default)]
    pub content: String,
    #[serde(rename = "deviceTypes", default)]
    pub device_types: Vec<TemplateDeviceType>,
}

/// One declared parameter of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateParam {
    #[serde(rename = "parameterName")]
    pub parameter_name: String,
}

/// A device family a template applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDeviceType {
    #[serde(rename = "productFamily")]
    pub product_family: String,
}

// ── Deployment / task ────────────────────────────────────────────────

/// Status of a template deployment, polled by deployment id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub devices: Vec<DeviceDeploymentStatus>,
}

/// Per-device status within a deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceDeploymentStatus {
    pub status: String,
    #[serde(rename = "ipAddress", default)]
    pub ip_address: Option<String>,
}
