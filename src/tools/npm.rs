//! NPM registry lookup tool.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ToolError;

use super::{Tool, parse_arguments};

const REGISTRY_BASE: &str = "https://registry.npmjs.org";

const HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NpmParams {
    name: String,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    "latest".to_string()
}

/// Subset of the registry's version document worth reporting.
#[derive(Debug, Deserialize)]
struct PackageInfo {
    name: String,
    version: String,
    #[serde(default)]
    description: Option<String>,
    /// A string in modern packages, an object in some legacy ones.
    #[serde(default)]
    license: Option<Value>,
    #[serde(default)]
    homepage: Option<String>,
}

/// Looks up a package's published metadata on the NPM registry.
pub struct NpmPackageInfo;

impl Tool for NpmPackageInfo {
    fn name(&self) -> &'static str {
        "npm_package_info"
    }

    fn description(&self) -> &'static str {
        "Look up a package on the NPM registry and report its version, \
         description, license, and homepage."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Package name, scoped names included (e.g. @types/node)."
                },
                "version": {
                    "type": "string",
                    "description": "Version or dist-tag to look up. Defaults to latest."
                }
            },
            "required": ["name"]
        })
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let params: NpmParams = parse_arguments(arguments)?;
        if params.name.trim().is_empty() {
            return Err(ToolError::InvalidInput("name must not be empty".to_string()));
        }

        let url = package_url(&params.name, &params.version);
        debug!("querying {url}");
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        let response = client.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ToolError::Registry(format!(
                "package {}@{} not found",
                params.name, params.version
            )));
        }
        let info: PackageInfo = response.error_for_status()?.json()?;
        Ok(summarize(&info))
    }
}

/// Version-document URL. The slash in a scoped name is percent-encoded
/// for the registry's path routing.
fn package_url(name: &str, version: &str) -> String {
    format!("{REGISTRY_BASE}/{}/{version}", name.replace('/', "%2F"))
}

fn summarize(info: &PackageInfo) -> String {
    let mut text = format!("{} {}", info.name, info.version);
    if let Some(description) = &info.description {
        text.push('\n');
        text.push_str(description);
    }
    if let Some(license) = license_text(info.license.as_ref()) {
        text.push_str(&format!("\nlicense: {license}"));
    }
    if let Some(homepage) = &info.homepage {
        text.push_str(&format!("\nhomepage: {homepage}"));
    }
    text
}

fn license_text(license: Option<&Value>) -> Option<String> {
    match license {
        Some(Value::String(spdx)) => Some(spdx.clone()),
        Some(Value::Object(fields)) => fields
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
