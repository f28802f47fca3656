//! Wireless VLAN command handlers.

use dnac_api::{ApiClient, VlanId, WirelessVlan};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::params::ParamMap;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "Interface Name")]
    interface_name: String,
    #[tabled(rename = "VLAN ID")]
    vlan_id: String,
}

impl From<&WirelessVlan> for VlanRow {
    fn from(v: &WirelessVlan) -> Self {
        Self {
            interface_name: v.interface_name.clone(),
            vlan_id: v.vlan_id.to_string(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn wireless_vlan_list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Retrieving the wireless vlans.");
    }
    let vlans = client.list_wireless_vlans().await?;
    let out = output::render_list(
        &global.output,
        &vlans,
        |v| VlanRow::from(v),
        |v| v.vlan_id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn create_wireless_vlan(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting wireless vlan creation.");
    }
    let params = ParamMap::parse(parameters)?;
    let vlan = WirelessVlan {
        interface_name: params.require("interfaceName")?.to_owned(),
        vlan_id: VlanId::from_arg(params.require("vlanId")?),
    };
    let result = client.create_wireless_vlan(vlan).await;
    output::print_status("Create Status", result);
    Ok(())
}

pub async fn delete_wireless_vlan(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting wireless vlan deletion.");
    }
    let params = ParamMap::parse(parameters)?;
    let vlan_id = params.require("vlanId")?;
    let result = client.delete_wireless_vlan(vlan_id).await;
    output::print_status("Delete Status", result);
    Ok(())
}
