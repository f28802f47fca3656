//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod devices;
pub mod profiles;
pub mod sites;
pub mod templates;
pub mod wireless_vlans;
pub mod wlans;

use clap::CommandFactory;
use dnac_api::ApiClient;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

/// Write shell completions for the given shell to stdout.
pub fn generate_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "wlanmgmt", &mut std::io::stdout());
}

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &ApiClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::DeviceList => devices::device_list(client, global).await,
        Command::InterfaceList { device } => {
            devices::interface_list(client, &device, global).await
        }
        Command::AssignDeviceSite { parameters } => {
            devices::assign_device_site(client, &parameters, global).await
        }
        Command::UnassignDeviceSite { parameters } => {
            devices::unassign_device_site(client, &parameters, global).await
        }

        Command::TemplateList => templates::template_list(client, global).await,
        Command::Deploy {
            template,
            target,
            parameters,
        } => templates::deploy(client, &template, &target, &parameters, global).await,

        Command::WirelessVlanList => wireless_vlans::wireless_vlan_list(client, global).await,
        Command::CreateWirelessVlan { parameters } => {
            wireless_vlans::create_wireless_vlan(client, &parameters, global).await
        }
        Command::DeleteWirelessVlan { parameters } => {
            wireless_vlans::delete_wireless_vlan(client, &parameters, global).await
        }

        Command::SiteList => sites::site_list(client, global).await,

        Command::ProfileList => profiles::profile_list(client, global).await,
        Command::CreateProfile { parameters } => {
            profiles::create_profile(client, &parameters, global).await
        }
        Command::DeleteProfile { parameters } => {
            profiles::delete_profile(client, &parameters, global).await
        }
        Command::AssignProfileSite { parameters } => {
            profiles::assign_profile_site(client, &parameters, global).await
        }
        Command::UnassignProfileSite { parameters } => {
            profiles::unassign_profile_site(client, &parameters, global).await
        }

        Command::WlanList => wlans::wlan_list(client, global).await,
        Command::CreateWlan { parameters } => wlans::create_wlan(client, &parameters, global).await,
        Command::DeleteWlan { parameters } => wlans::delete_wlan(client, &parameters, global).await,

        // Normally handled before a client is built; still a complete
        // handler so no dispatch path can panic.
        Command::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use dnac_api::TransportConfig;
    use secrecy::SecretString;

    use super::*;
    use crate::cli::OutputFormat;

    #[tokio::test]
    async fn completions_dispatch_without_controller_round_trip() {
        // The client is never contacted; completions must succeed even
        // when the configured controller is unreachable.
        let client = ApiClient::new(
            url::Url::parse("https://203.0.113.1").unwrap(),
            "admin".into(),
            SecretString::from("password".to_owned()),
            &TransportConfig::default(),
        )
        .unwrap();
        let global = GlobalOpts {
            controller: None,
            username: None,
            password: None,
            output: OutputFormat::Table,
            verbose: 0,
            quiet: false,
            timeout: 30,
        };

        let cmd = Command::Completions {
            shell: clap_complete::Shell::Bash,
        };
        dispatch(cmd, &client, &global).await.unwrap();
    }
}
