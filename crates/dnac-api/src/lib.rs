// dnac-api: Async Rust client for the Cisco DNA Center northbound REST API

pub mod client;
pub mod devices;
pub mod error;
pub mod models;
pub mod profiles;
pub mod sites;
pub mod tasks;
pub mod templates;
pub mod transport;
pub mod wireless_vlans;
pub mod wlans;

pub use client::ApiClient;
pub use error::Error;
pub use models::{
    DeploymentStatus, DeviceDeploymentStatus, Interface, NetworkDevice, Profile, ProfileSite,
    Site, Template, TemplateDeviceType, TemplateParam, VlanId, WirelessVlan, Wlan,
};
pub use transport::{TlsMode, TransportConfig};
