//! `adk query` handlers.

use std::fmt::Write as _;

use adk_core::{
    CannRequirements, CompatibilityResolver, CpuArch, FrameworkDetails, FrameworkKind,
    QueryResult,
};
use anyhow::Result;
use serde::Serialize;

use super::Outcome;
use crate::context::CliContext;
use crate::error::CliError;
use crate::presentation::{
    BOLD, RESET, YELLOW, format_optional, join_or, print_json, print_text,
};

/// JSON payload for the version listing.
#[derive(Debug, Serialize)]
pub struct VersionList {
    pub cann_versions: Vec<String>,
    pub include_deprecated: bool,
}

/// Execute `adk query cann`.
pub fn execute_cann(
    ctx: &CliContext,
    version: Option<&str>,
    all: bool,
    json: bool,
) -> Result<Outcome> {
    let resolver = ctx.resolver()?;

    let Some(version) = version else {
        let versions = resolver.list_cann_versions(all);
        if json {
            print_json(&VersionList {
                cann_versions: versions,
                include_deprecated: all,
            })?;
        } else {
            print_text(&render_version_list(&versions, all))?;
        }
        return Ok(Outcome::Success);
    };

    let result = resolver.get_cann_requirements(version);
    finish(result, json, render_requirements)
}

/// Execute `adk query framework`.
pub fn execute_framework(
    ctx: &CliContext,
    cann_version: &str,
    framework: FrameworkKind,
    python: Option<&str>,
    arch: Option<CpuArch>,
    json: bool,
) -> Result<Outcome> {
    let resolver = ctx.resolver()?;
    let result = framework_details(&resolver, cann_version, framework, python, arch)?;
    finish(result, json, render_framework)
}

/// Framework query, with the wheel URL rendered when an architecture is given.
///
/// A requested interpreter is checked against the framework whether or not
/// an architecture is given.
pub fn framework_details(
    resolver: &CompatibilityResolver,
    cann_version: &str,
    framework: FrameworkKind,
    python: Option<&str>,
    arch: Option<CpuArch>,
) -> Result<QueryResult<FrameworkDetails>, CliError> {
    let mut result = resolver.find_framework_config(cann_version, framework.as_str());

    if !result.success || (python.is_none() && arch.is_none()) {
        return Ok(result);
    }

    let config = resolver.get_framework(cann_version, framework.as_str())?;
    let python = config.select_python(framework.as_str(), python)?;
    if let (Some(arch), Some(details)) = (arch, result.data.as_mut()) {
        details.whl_url = config.render_whl_url(python, arch);
    }

    Ok(result)
}

fn finish<T: Serialize>(
    result: QueryResult<T>,
    json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<Outcome> {
    if json {
        print_json(&result)?;
        return Ok(Outcome::from_success(result.success));
    }

    let data = result.into_result().map_err(CliError::from)?;
    print_text(&render(&data))?;
    Ok(Outcome::Success)
}

pub fn render_version_list(versions: &[String], include_deprecated: bool) -> String {
    let mut out = format!("{BOLD}Available CANN Versions:{RESET}\n");
    for version in versions {
        let _ = writeln!(out, "  - {version}");
    }
    if !include_deprecated {
        out.push_str("\n(Use --all to include deprecated versions)\n");
    }
    out
}

pub fn render_requirements(req: &CannRequirements) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BOLD}CANN Version:{RESET} {}", req.cann_version);
    let _ = writeln!(out, "Min Driver: {}", req.min_driver_version);
    let _ = writeln!(
        out,
        "Max Driver: {}",
        format_optional(req.max_driver_version.as_ref(), "none")
    );
    let _ = writeln!(out, "Supported OS: {}", join_or(&req.supported_os, "none"));
    let _ = writeln!(out, "Supported NPU: {}", join_or(&req.supported_npu, "none"));
    let _ = writeln!(out, "Architectures: {}", join_or(&req.supported_arch, "none"));
    let _ = writeln!(out, "Frameworks: {}", join_or(&req.frameworks, "none"));
    if req.deprecated {
        let _ = writeln!(out, "{YELLOW}Status: DEPRECATED{RESET}");
    }
    out
}

pub fn render_framework(details: &FrameworkDetails) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BOLD}Framework:{RESET} {}", details.framework);
    let _ = writeln!(out, "Version: {}", details.version);
    if let Some(torch_npu) = &details.torch_npu_version {
        let _ = writeln!(out, "torch_npu: {torch_npu}");
    }
    let _ = writeln!(
        out,
        "Python Versions: {}",
        join_or(&details.python_versions, "none")
    );
    if let Some(url) = &details.whl_url {
        let _ = writeln!(out, "Wheel URL: {url}");
    }
    if let Some(command) = &details.install_command {
        let _ = writeln!(out, "Install Command: {command}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::resolver;

    #[test]
    fn test_version_list_hint() {
        let versions = vec!["8.0.0".to_string(), "7.0.0".to_string()];
        let text = render_version_list(&versions, false);
        assert!(text.contains("  - 8.0.0\n  - 7.0.0\n"));
        assert!(text.contains("--all"));
        assert!(!render_version_list(&versions, true).contains("--all"));
    }

    #[test]
    fn test_requirements_text() {
        let req = resolver()
            .get_cann_requirements("7.0.0")
            .into_result()
            .unwrap();
        let text = render_requirements(&req);
        assert!(text.contains("Min Driver: 23.0.3"));
        assert!(text.contains("Max Driver: 24.1.0"));
        assert!(text.contains("Supported NPU: 910A, 910B"));
        assert!(text.contains("Frameworks: none"));
        assert!(!text.contains("DEPRECATED"));

        let old = resolver()
            .get_cann_requirements("6.3.0")
            .into_result()
            .unwrap();
        assert!(render_requirements(&old).contains("DEPRECATED"));
    }

    #[test]
    fn test_framework_template_kept_without_arch() {
        let result =
            framework_details(&resolver(), "8.0.0", FrameworkKind::PyTorch, None, None).unwrap();
        let details = result.data.unwrap();
        assert!(details.whl_url.unwrap().contains("{py_version}"));
    }

    #[test]
    fn test_framework_url_rendered_for_arch() {
        let result = framework_details(
            &resolver(),
            "8.0.0",
            FrameworkKind::PyTorch,
            Some("3.10"),
            Some(CpuArch::Aarch64),
        )
        .unwrap();
        let details = result.data.unwrap();
        assert_eq!(
            details.whl_url.as_deref(),
            Some("https://example.invalid/torch_npu-2.4.0.post2-cp310-aarch64.whl")
        );

        let text = render_framework(&details);
        assert!(text.contains("torch_npu: 2.4.0.post2"));
        assert!(text.contains("Python Versions: 3.9, 3.10, 3.11"));
        assert!(text.contains("Install Command: pip install"));
    }

    #[test]
    fn test_framework_unsupported_python() {
        let err = framework_details(
            &resolver(),
            "8.0.0",
            FrameworkKind::PyTorch,
            Some("2.7"),
            Some(CpuArch::X86_64),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.suggestions().iter().any(|s| s.contains("3.11")));
    }

    #[test]
    fn test_unsupported_python_rejected_without_arch() {
        let err = framework_details(
            &resolver(),
            "8.0.0",
            FrameworkKind::PyTorch,
            Some("3.99"),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Adk(adk_core::AdkError::PythonNotSupported { .. })
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_supported_python_without_arch_keeps_template() {
        let result = framework_details(
            &resolver(),
            "8.0.0",
            FrameworkKind::PyTorch,
            Some("3.9"),
            None,
        )
        .unwrap();
        assert!(result.success);
        assert!(result.data.unwrap().whl_url.unwrap().contains("{py_version}"));
    }

    #[test]
    fn test_missing_framework_is_failed_result() {
        let result = framework_details(
            &resolver(),
            "8.0.0",
            FrameworkKind::MindSpore,
            None,
            Some(CpuArch::X86_64),
        )
        .unwrap();
        assert!(!result.success);
        assert_eq!(result.suggestions, vec!["Available frameworks: pytorch"]);
    }
}
