//! Site profile command handlers.

use dnac_api::{ApiClient, Profile};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::params::ParamMap;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Assigned Sites")]
    assigned_sites: String,
}

impl From<&Profile> for ProfileRow {
    fn from(p: &Profile) -> Self {
        Self {
            name: p.name.clone(),
            namespace: p.namespace.clone(),
            id: p.id.clone(),
            assigned_sites: p
                .sites
                .iter()
                .map(|s| format!("name: {}\nsiteid: {}\n", s.name, s.uuid))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn profile_list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Retrieving the profiles.");
    }
    let profiles = client.list_profiles().await?;
    let out = output::render_list(&global.output, &profiles, |p| ProfileRow::from(p), |p| p.id.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn create_profile(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting profile creation.");
    }
    let params = ParamMap::parse(parameters)?;
    let name = params.require("name")?;
    let interface_name = params.require("interfaceName")?;
    let vlan_id = params.require("vlanId")?;
    let result = client.create_profile(name, interface_name, vlan_id).await;
    output::print_status("Create Status", result);
    Ok(())
}

pub async fn delete_profile(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting profile deletion.");
    }
    let params = ParamMap::parse(parameters)?;
    let id = params.require("id")?;
    let result = client.delete_profile(id).await;
    output::print_status("Delete Status", result);
    Ok(())
}

pub async fn assign_profile_site(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting profile/site assignment.");
    }
    let params = ParamMap::parse(parameters)?;
    let profile_id = params.require("profileid")?;
    let site_id = params.require("siteid")?;
    let result = client.assign_profile_site(profile_id, site_id).await;
    output::print_status("Assignment Status", result);
    Ok(())
}

pub async fn unassign_profile_site(
    client: &ApiClient,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting profile/site unassignment.");
    }
    let params = ParamMap::parse(parameters)?;
    let profile_id = params.require("profileid")?;
    let site_id = params.require("siteid")?;
    let result = client.unassign_profile_site(profile_id, site_id).await;
    output::print_status("Unassignment Status", result);
    Ok(())
}
