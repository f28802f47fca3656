//! Site command handlers.

use dnac_api::{ApiClient, Site};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "groupNameHierarchy")]
    group_name_hierarchy: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "id")]
    id: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            group_name_hierarchy: s.group_name_hierarchy.clone(),
            name: s.name.clone(),
            id: s.id.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn site_list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Retrieving the sites.");
    }
    let sites = client.list_sites().await?;
    let out = output::render_list(&global.output, &sites, |s| SiteRow::from(s), |s| s.id.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}
