// Template programmer endpoints
//
// Template listing, name resolution, deployment, and single-shot
// deployment status. Unlike the rest of the v1 surface, these endpoints
// return bare JSON without the `{ response: ... }` envelope.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{DeploymentStatus, Template, TemplateSummary};

impl ApiClient {
    /// List all deployment templates, fetching each template's detail
    /// (parameters, content, device types) with a secondary request.
    ///
    /// `GET /api/v1/template-programmer/template`, then
    /// `GET /api/v1/template-programmer/template/{id}` per template.
    pub async fn list_templates(&self) -> Result<Vec<Template>, Error> {
        debug!("listing templates");
        let summaries: Vec<TemplateSummary> = self
            .get_bare("/api/v1/template-programmer/template")
            .await?;

        let mut templates = Vec::with_capacity(summaries.len());
        for summary in summaries {
            templates.push(self.template_detail(&summary.id).await?);
        }
        Ok(templates)
    }

    /// Fetch one template's full detail by id.
    pub async fn template_detail(&self, id: &str) -> Result<Template, Error> {
        self.get_bare(&format!("/api/v1/template-programmer/template/{id}"))
            .await
    }

    /// Resolve a template name to its full detail.
    pub async fn template_by_name(&self, name: &str) -> Result<Template, Error> {
        let summaries: Vec<TemplateSummary> = self
            .get_bare("/api/v1/template-programmer/template")
            .await?;
        let summary = summaries
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::NotFound {
                resource: "template",
                identifier: name.to_owned(),
            })?;
        self.template_detail(&summary.id).await
    }

    /// Deploy a template against a device management IP, returning the
    /// deployment id.
    ///
    /// `POST /api/v1/template-programmer/template/deploy` with a single
    /// `MANAGED_DEVICE_IP` target carrying the template parameters.
    pub async fn deploy_template(
        &self,
        template_id: &str,
        target_device_ip: &str,
        params: &Value,
    ) -> Result<String, Error> {
        debug!(template_id, target_device_ip, "deploying template");
        let body = json!({
            "templateId": template_id,
            "targetInfo": [
                {
                    "id": target_device_ip,
                    "type": "MANAGED_DEVICE_IP",
                    "params": params
                }
            ]
        });
        let resp = self
            .post("/api/v1/template-programmer/template/deploy", &body)
            .await?;

        let raw = resp
            .get("deploymentId")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Deserialization {
                message: "deploy response has no deploymentId".into(),
                body: resp.to_string(),
            })?;

        // Some controller versions wrap the id in prose
        // ("Deployment of Template ... Template Deployment Id: <uuid>");
        // the id itself is always the last token.
        let id = raw
            .split_whitespace()
            .next_back()
            .unwrap_or(raw)
            .trim_end_matches('.');
        Ok(id.to_owned())
    }

    /// Fetch the status of a deployment. Called exactly once per deploy;
    /// there is no polling loop, backoff, or timeout.
    ///
    /// `GET /api/v1/template-programmer/template/deploy/status/{id}`
    pub async fn deployment_status(&self, deployment_id: &str) -> Result<DeploymentStatus, Error> {
        debug!(deployment_id, "fetching deployment status");
        self.get_bare(&format!(
            "/api/v1/template-programmer/template/deploy/status/{deployment_id}"
        ))
        .await
    }
}
