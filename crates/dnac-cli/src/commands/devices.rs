//! Network device command handlers.

use dnac_api::{ApiClient, Interface, NetworkDevice};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::params::ParamMap;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Hostname")]
    hostname: String,
    #[tabled(rename = "Management IP")]
    management_ip: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&NetworkDevice> for DeviceRow {
    fn from(d: &NetworkDevice) -> Self {
        Self {
            hostname: d.hostname.clone(),
            management_ip: d.management_ip_address.clone(),
            family: d.family.clone(),
            id: d.id.clone(),
        }
    }
}

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Port Name")]
    port_name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "VLAN")]
    vlan: String,
    #[tabled(rename = "Voice VLAN")]
    voice_vlan: String,
}

impl From<&Interface> for InterfaceRow {
    fn from(i: &Interface) -> Self {
        Self {
            port_name: i.port_name.clone(),
            status: format!(
                "{}/{}",
                i.admin_status.as_deref().unwrap_or("-"),
                i.status.as_deref().unwrap_or("-")
            ),
            description: i.description.clone().unwrap_or_default(),
            vlan: i.vlan_id.clone().unwrap_or_default(),
            voice_vlan: i.voice_vlan.clone().unwrap_or_default(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn device_list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Retrieving the devices.");
    }
    let devices = client.list_devices().await?;
    let out = output::render_list(
        &global.output,
        &devices,
        |d| DeviceRow::from(d),
        |d| d.id.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn interface_list(
    client: &ApiClient,
    device: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Retrieving the interfaces for {device}.");
    }
    let found = client.device_by_hostname(device).await?;
    let interfaces = client.list_interfaces(&found.id).await?;
    let out = output::render_list(
        &global.output,
        &interfaces,
        |i| InterfaceRow::from(i),
        |i| i.port_name.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn assign_device_site(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting device/site assignment.");
    }
    let params = ParamMap::parse(parameters)?;
    let device_id = params.require("deviceid")?;
    let site_id = params.require("siteid")?;
    let result = client.assign_device_site(device_id, site_id).await;
    output::print_status("Assignment Status", result);
    Ok(())
}

pub async fn unassign_device_site(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting device/site unassignment.");
    }
    let params = ParamMap::parse(parameters)?;
    let device_id = params.require("deviceid")?;
    let site_id = params.require("siteid")?;
    let result = client.unassign_device_site(device_id, site_id).await;
    output::print_status("Unassignment Status", result);
    Ok(())
}
