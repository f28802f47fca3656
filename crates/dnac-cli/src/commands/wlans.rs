//! WLAN (SSID) command handlers.

use dnac_api::{ApiClient, Wlan};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::params::ParamMap;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct WlanRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Key")]
    key: String,
}

impl From<&Wlan> for WlanRow {
    fn from(w: &Wlan) -> Self {
        Self {
            ssid: w.ssid.clone(),
            key: w.key.clone(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn wlan_list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Retrieving the wlans.");
    }
    let wlans = client.list_wlans().await?;
    let out = output::render_list(&global.output, &wlans, |w| WlanRow::from(w), |w| w.ssid.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn create_wlan(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting wlan creation.");
    }
    let params = ParamMap::parse(parameters)?;
    let ssid = params.require("ssid")?;
    let result = client.create_wlan(ssid).await;
    output::print_status("Create Status", result);
    Ok(())
}

pub async fn delete_wlan(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting wlan deletion.");
    }
    let params = ParamMap::parse(parameters)?;
    let key = params.require("key")?;
    let result = client.delete_wlan(key).await;
    output::print_status("Delete Status", result);
    Ok(())
}
