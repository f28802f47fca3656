//! Template command handlers: listing and deployment.

use dnac_api::{ApiClient, Template};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::params::ParamMap;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "Template Name")]
    name: String,
    #[tabled(rename = "Parameters")]
    parameters: String,
    #[tabled(rename = "Deploy Command")]
    deploy_command: String,
    #[tabled(rename = "Content")]
    content: String,
    #[tabled(rename = "Device Types")]
    device_types: String,
}

impl From<&Template> for TemplateRow {
    fn from(t: &Template) -> Self {
        Self {
            name: t.name.clone(),
            parameters: t
                .params
                .iter()
                .map(|p| p.parameter_name.clone())
                .collect::<Vec<_>>()
                .join("\n"),
            deploy_command: deploy_command(t),
            content: t.content.clone(),
            device_types: t
                .device_types
                .iter()
                .map(|d| d.product_family.clone())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Build the copy-pasteable deploy invocation shown in `template_list`.
fn deploy_command(template: &Template) -> String {
    let mut cmd = format!(
        "wlanmgmt deploy \\\n --template {} \\\n --target DEVICE",
        template.name
    );
    for param in &template.params {
        cmd.push_str(&format!(" \\\n \"{}=VALUE\"", param.parameter_name));
    }
    cmd
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn template_list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Retrieving the templates available");
    }
    let templates = client.list_templates().await?;
    let out = output::render_list(
        &global.output,
        &templates,
        |t| TemplateRow::from(t),
        |t| t.name.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Deploy a template: resolve the target hostname to its management IP
/// and the template name to its id, POST the deployment, then fetch the
/// status exactly once and print the first device's status.
pub async fn deploy(
    client: &ApiClient,
    template: &str,
    target: &str,
    parameters: &[String],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Attempting deployment.");
    }
    let params = ParamMap::parse(parameters)?;

    let device = client.device_by_hostname(target).await?;
    let resolved = client.template_by_name(template).await?;

    let outcome = async {
        let deployment_id = client
            .deploy_template(&resolved.id, &device.management_ip_address, &params.to_json())
            .await?;
        client.deployment_status(&deployment_id).await
    }
    .await;

    match outcome {
        Ok(status) => {
            let line = status
                .devices
                .first()
                .map(|d| d.status.clone())
                .or(status.status)
                .unwrap_or_else(|| "UNKNOWN".into());
            println!("Deployment Status: {line}");
        }
        Err(err) => println!("Deployment Status: {err}"),
    }
    Ok(())
}
