//! Rendering rows for inspection

use crate::config::Config;
use anyhow::{Context, Result};
use cosmic_ext_call_log::{
    AccessibleText, CallLogInteraction, CallLogRow, ContactInteraction, DisplayContext, Icon,
    Intent, ResourceId,
};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Everything the contact card shows for one call log row
#[derive(Debug, Clone, Serialize)]
pub struct RenderedCall {
    pub header: Option<String>,
    pub body: Option<String>,
    pub footer: Option<String>,
    pub icon: Option<Icon>,
    pub icon_resource_id: ResourceId,
    pub footer_icon: Option<Icon>,
    pub content_description: AccessibleText,
    pub intent: Intent,
}

/// Read a row from a JSON file, or stdin for `-`
pub fn read_row(path: &Path) -> Result<CallLogRow> {
    if path.as_os_str() == "-" {
        return CallLogRow::from_reader(std::io::stdin().lock())
            .context("Failed to read row from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open row file {}", path.display()))?;
    CallLogRow::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read row file {}", path.display()))
}

/// Build the interaction, classifying plugin rows known to the config
pub fn interaction(
    row: CallLogRow,
    config: &Config,
    ctx: &DisplayContext,
) -> Result<CallLogInteraction> {
    let mut call = CallLogInteraction::new(row);

    let Some(component) = call.plugin_package_name().filter(|c| !c.is_empty()) else {
        return Ok(call);
    };

    match config.plugin(&component) {
        Some(plugin) => {
            call.set_plugin_info(ctx, plugin.icon_resource(), plugin.name.clone())
                .with_context(|| format!("Failed to classify plugin call from {}", component))?;
            info!("Classified row as {} call", plugin.name);
        }
        None => debug!("Plugin {} not configured, rendering without plugin info", component),
    }

    Ok(call)
}

pub fn render(call: &CallLogInteraction, ctx: &DisplayContext) -> RenderedCall {
    RenderedCall {
        header: call.view_header(ctx),
        body: call.view_body(ctx),
        footer: call.view_footer(ctx),
        icon: call.icon(ctx),
        icon_resource_id: call.icon_resource_id(),
        footer_icon: call.footer_icon(ctx),
        content_description: call.content_description(ctx),
        intent: call.intent(ctx),
    }
}

fn describe_icon(icon: &Option<Icon>) -> String {
    match icon {
        None => "-".to_string(),
        Some(icon) => {
            let mut text = format!("resource {:#x}", icon.resource_id().0);
            if icon.rotation_degrees != 0.0 {
                text.push_str(&format!(", rotated {}°", icon.rotation_degrees));
            }
            if let Some(filter) = &icon.color_filter {
                text.push_str(&format!(", tint {}", filter.color));
            }
            text
        }
    }
}

impl fmt::Display for RenderedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".to_string());

        writeln!(f, "Header:       {}", or_dash(&self.header))?;
        writeln!(f, "Body:         {}", or_dash(&self.body))?;
        writeln!(f, "Footer:       {}", or_dash(&self.footer))?;
        writeln!(f, "Icon:         {}", describe_icon(&self.icon))?;
        writeln!(f, "Footer icon:  {}", describe_icon(&self.footer_icon))?;
        writeln!(f, "Description:  {}", self.content_description.text)?;
        match (&self.intent.action, &self.intent.data) {
            (Some(action), Some(data)) => writeln!(f, "Action:       {} {}", action, data),
            _ => writeln!(
                f,
                "Action:       plugin call {}",
                serde_json::to_string(&self.intent.extras).map_err(|_| fmt::Error)?
            ),
        }
    }
}
