//! Clap derive structures for the `wlanmgmt` CLI.
//!
//! One verb per resource operation, named exactly as the original tool
//! spells them (`device_list`, `create_wireless_vlan`, ...). Mutating
//! verbs take trailing `KEY=VALUE` tokens.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wlanmgmt -- command-line tool for deploying templates and managing
/// wireless configuration on Cisco DNA Center
#[derive(Debug, Parser)]
#[command(
    name = "wlanmgmt",
    version,
    about = "Manage DNA Center wireless configuration from the command line",
    long_about = "Command line tool for deploying templates to DNA Center.\n\n\
        Controller address and credentials are read from the DNAC_IP,\n\
        DNAC_USERNAME, and DNAC_PASSWORD environment variables.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// DNA Center host or IP (a bare host is normalized to https://)
    #[arg(long, short = 'c', env = "DNAC_IP", global = true)]
    pub controller: Option<String>,

    /// DNA Center username
    #[arg(long, short = 'u', env = "DNAC_USERNAME", global = true)]
    pub username: Option<String>,

    /// DNA Center password
    #[arg(long, env = "DNAC_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(long, short = 'o', env = "DNAC_OUTPUT", default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "DNAC_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Command Enum ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List network devices (hostname, management IP, family)
    #[command(name = "device_list")]
    DeviceList,

    /// List the interfaces of a device
    #[command(name = "interface_list")]
    InterfaceList {
        /// Hostname of the device
        device: String,
    },

    /// List the deployment templates that are available
    #[command(name = "template_list")]
    TemplateList,

    /// Deploy a template to a target device
    #[command(name = "deploy")]
    Deploy {
        /// Name of the template to deploy
        #[arg(long)]
        template: String,

        /// Hostname of the target network device
        #[arg(long)]
        target: String,

        /// Template parameters as PARAM=VALUE tokens
        #[arg(value_name = "PARAM=VALUE")]
        parameters: Vec<String>,
    },

    /// List wireless VLANs (interface name, VLAN id)
    #[command(name = "wireless_vlan_list")]
    WirelessVlanList,

    /// Create a wireless VLAN (vlanId=N interfaceName=S)
    #[command(name = "create_wireless_vlan")]
    CreateWirelessVlan {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Delete a wireless VLAN (vlanId=N)
    #[command(name = "delete_wireless_vlan")]
    DeleteWirelessVlan {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// List sites
    #[command(name = "site_list")]
    SiteList,

    /// List site profiles with their assigned sites
    #[command(name = "profile_list")]
    ProfileList,

    /// Create a profile (name=S interfaceName=S vlanId=N)
    #[command(name = "create_profile")]
    CreateProfile {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Delete a profile (id=ID)
    #[command(name = "delete_profile")]
    DeleteProfile {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Assign a site to a profile (profileid=P siteid=S)
    #[command(name = "assign_profile_site")]
    AssignProfileSite {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Unassign a site from a profile (profileid=P siteid=S)
    #[command(name = "unassign_profile_site")]
    UnassignProfileSite {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// List WLANs (SSID, setting key)
    #[command(name = "wlan_list")]
    WlanList,

    /// Create a WLAN (ssid=S)
    #[command(name = "create_wlan")]
    CreateWlan {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Delete a WLAN (key=K)
    #[command(name = "delete_wlan")]
    DeleteWlan {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Assign a device to a site (deviceid=D siteid=S)
    #[command(name = "assign_device_site")]
    AssignDeviceSite {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Unassign a device from a site (deviceid=D siteid=S)
    #[command(name = "unassign_device_site")]
    UnassignDeviceSite {
        #[arg(value_name = "KEY=VALUE")]
        parameters: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
