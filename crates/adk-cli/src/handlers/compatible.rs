//! `adk compatible` handler.

use std::fmt::Write as _;

use adk_core::{AdkError, CompatibilityResolver, Version};
use anyhow::Result;
use serde::Serialize;

use super::Outcome;
use crate::commands::CompatibleArgs;
use crate::context::CliContext;
use crate::error::CliError;
use crate::presentation::{BOLD, GREEN, RESET, print_json, print_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibleReport {
    pub driver_version: String,
    pub os_name: Option<String>,
    pub npu_type: Option<String>,
    pub compatible_cann_versions: Vec<String>,
    pub recommended: Option<String>,
}

pub fn execute(ctx: &CliContext, args: &CompatibleArgs) -> Result<Outcome> {
    let resolver = ctx.resolver()?;
    let report = build_report(&resolver, args).map_err(CliError::from)?;

    if args.json {
        print_json(&report)?;
    } else {
        print_text(&render(&report))?;
    }
    Ok(Outcome::from_success(!report.compatible_cann_versions.is_empty()))
}

/// Run the search, rejecting a driver string that is not a version.
pub fn build_report(
    resolver: &CompatibilityResolver,
    args: &CompatibleArgs,
) -> Result<CompatibleReport, AdkError> {
    Version::parse(&args.driver)?;

    let os = args.os.as_deref();
    let npu = args.npu.as_deref();
    let versions = resolver.find_compatible_cann(&args.driver, os, npu);

    Ok(CompatibleReport {
        driver_version: args.driver.clone(),
        os_name: args.os.clone(),
        npu_type: args.npu.clone(),
        recommended: versions.first().cloned(),
        compatible_cann_versions: versions,
    })
}

pub fn render(report: &CompatibleReport) -> String {
    let mut filters = format!("driver {}", report.driver_version);
    if let Some(os) = &report.os_name {
        let _ = write!(filters, ", OS {os}");
    }
    if let Some(npu) = &report.npu_type {
        let _ = write!(filters, ", NPU {npu}");
    }

    if report.compatible_cann_versions.is_empty() {
        return format!("No compatible CANN versions found for {filters}\n");
    }

    let mut out = format!("{BOLD}Compatible CANN versions for {filters}:{RESET}\n");
    for version in &report.compatible_cann_versions {
        let _ = writeln!(out, "  - {version}");
    }
    if let Some(recommended) = &report.recommended {
        let _ = writeln!(out, "\n{GREEN}Recommended:{RESET} {recommended}");
    }
    out
}
