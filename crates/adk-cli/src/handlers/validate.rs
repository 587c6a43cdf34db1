//! `adk validate` handler.
//!
//! Without `--cann` the environment is checked against every matrix entry.
//! With `--cann` each predicate is asserted separately against one entry so
//! the output says which one failed and why.

use std::fmt::Write as _;

use adk_core::{AdkResult, CompatibilityResolver, EnvironmentInfo, ValidationResult};
use anyhow::Result;
use serde::Serialize;

use super::Outcome;
use crate::commands::ValidateArgs;
use crate::context::CliContext;
use crate::error::CliError;
use crate::presentation::{BOLD, GREEN, RED, RESET, YELLOW, print_json, print_text};

/// JSON payload for a whole-matrix validation.
#[derive(Debug, Serialize)]
pub struct EnvironmentReport {
    pub environment: EnvironmentInfo,
    #[serde(flatten)]
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub status: CheckStatus,
    pub message: String,
}

impl Check {
    const fn ok(message: String) -> Self {
        Self {
            status: CheckStatus::Ok,
            message,
        }
    }

    const fn fail(message: String) -> Self {
        Self {
            status: CheckStatus::Fail,
            message,
        }
    }

    fn from_result(result: AdkResult<()>, passed: String) -> Self {
        match result {
            Ok(()) => Self::ok(passed),
            Err(err) => Self::fail(err.message()),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checks {
    pub driver: Check,
    pub os: Check,
    pub npu: Check,
    pub arch: Check,
}

impl Checks {
    fn labelled(&self) -> [(&'static str, &Check); 4] {
        [
            ("DRIVER", &self.driver),
            ("OS", &self.os),
            ("NPU", &self.npu),
            ("ARCH", &self.arch),
        ]
    }
}

/// JSON payload for a single-version check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CannCheckReport {
    pub cann_version: String,
    pub environment: EnvironmentInfo,
    pub checks: Checks,
    pub compatible: bool,
}

pub fn execute(ctx: &CliContext, args: &ValidateArgs) -> Result<Outcome> {
    let resolver = ctx.resolver()?;
    let env = environment(args);

    if let Some(cann_version) = args.cann.as_deref() {
        let report = check_against(&resolver, &env, cann_version).map_err(CliError::from)?;
        if args.json {
            print_json(&report)?;
        } else {
            print_text(&render_checks(&report))?;
        }
        return Ok(Outcome::from_success(report.compatible));
    }

    let report = EnvironmentReport {
        result: resolver.validate_environment(&env),
        environment: env,
    };
    if args.json {
        print_json(&report)?;
    } else {
        print_text(&render_validation(&report))?;
    }
    Ok(Outcome::from_success(report.result.valid))
}

pub fn environment(args: &ValidateArgs) -> EnvironmentInfo {
    let env = EnvironmentInfo::new(&args.driver, &args.os, &args.npu, args.arch.as_str())
        .with_npu_count(args.npu_count);
    match &args.firmware {
        Some(firmware) => env.with_firmware(firmware),
        None => env,
    }
}

/// Assert each predicate of `cann_version` against `env`.
///
/// An unknown toolkit version is an error rather than a failed check.
pub fn check_against(
    resolver: &CompatibilityResolver,
    env: &EnvironmentInfo,
    cann_version: &str,
) -> AdkResult<CannCheckReport> {
    let entry = resolver.get_cann_entry(cann_version)?;

    let arch = if entry.supports_arch(&env.arch) {
        Check::ok(format!("{} is supported", env.arch))
    } else {
        Check::fail(format!(
            "Architecture '{}' is not supported by CANN {cann_version}. Supported: {}",
            env.arch,
            entry.supported_arch.join(", ")
        ))
    };

    let checks = Checks {
        driver: Check::from_result(
            resolver.check_driver_compatibility(&env.driver_version, cann_version),
            format!("Driver {} is within the supported range", env.driver_version),
        ),
        os: Check::from_result(
            resolver.check_os_compatibility(&env.os_name, cann_version),
            format!("{} is supported", env.os_name),
        ),
        npu: Check::from_result(
            resolver.check_npu_compatibility(&env.npu_type, cann_version),
            format!("{} is supported", env.npu_type),
        ),
        arch,
    };
    let compatible = checks.labelled().iter().all(|(_, check)| check.passed());

    Ok(CannCheckReport {
        cann_version: cann_version.to_string(),
        environment: env.clone(),
        checks,
        compatible,
    })
}

fn describe(env: &EnvironmentInfo) -> String {
    let mut out = format!(
        "driver {}, OS {}, NPU {} x{}, arch {}",
        env.driver_version, env.os_name, env.npu_type, env.npu_count, env.arch
    );
    if let Some(firmware) = &env.firmware_version {
        let _ = write!(out, ", firmware {firmware}");
    }
    out
}

pub fn render_validation(report: &EnvironmentReport) -> String {
    let result = &report.result;
    let mut out = format!("{BOLD}Environment:{RESET} {}\n", describe(&report.environment));

    if result.valid {
        let _ = writeln!(out, "Result: {GREEN}VALID{RESET}");
        let _ = writeln!(
            out,
            "Compatible CANN versions: {}",
            result.compatible_cann_versions.join(", ")
        );
        if let Some(recommended) = result.recommended() {
            let _ = writeln!(out, "Recommended: {recommended}");
        }
    } else {
        let _ = writeln!(out, "Result: {RED}INVALID{RESET}");
    }

    for warning in &result.warnings {
        let _ = writeln!(out, "{YELLOW}Warning:{RESET} {warning}");
    }
    for error in &result.errors {
        let _ = writeln!(out, "  - {error}");
    }
    out
}

pub fn render_checks(report: &CannCheckReport) -> String {
    let mut out = format!(
        "{BOLD}Checking CANN {} against:{RESET} {}\n",
        report.cann_version,
        describe(&report.environment)
    );
    for (label, check) in report.checks.labelled() {
        if check.passed() {
            let _ = writeln!(out, "  [{label}] {GREEN}PASS{RESET}");
        } else {
            let _ = writeln!(out, "  [{label}] {RED}FAIL{RESET}: {}", check.message);
        }
    }
    let verdict = if report.compatible {
        format!("{GREEN}COMPATIBLE{RESET}")
    } else {
        format!("{RED}INCOMPATIBLE{RESET}")
    };
    let _ = writeln!(out, "\nResult: {verdict}");
    out
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use adk_core::CpuArch;

    use super::*;
    use crate::handlers::test_support::resolver;

    fn args(driver: &str, os: &str, npu: &str, arch: CpuArch) -> ValidateArgs {
        ValidateArgs {
            driver: driver.to_string(),
            os: os.to_string(),
            npu: npu.to_string(),
            arch,
            firmware: None,
            npu_count: NonZeroU32::MIN,
            cann: None,
            json: false,
        }
    }

    #[test]
    fn test_environment_from_args() {
        let mut a = args("24.1.0", "ubuntu22.04", "910B", CpuArch::Aarch64);
        a.firmware = Some("7.5.0.1.129".to_string());
        a.npu_count = NonZeroU32::new(8).unwrap();

        let env = environment(&a);
        assert_eq!(env.arch, "aarch64");
        assert_eq!(env.firmware_version.as_deref(), Some("7.5.0.1.129"));
        assert_eq!(env.npu_count.get(), 8);
    }

    #[test]
    fn test_all_checks_pass() {
        let env = environment(&args("24.1.0", "ubuntu22.04", "910B", CpuArch::X86_64));
        let report = check_against(&resolver(), &env, "8.0.0").unwrap();
        assert!(report.compatible);
        assert!(render_checks(&report).contains("[DRIVER]"));
    }

    #[test]
    fn test_failed_checks_are_reported_individually() {
        let env = environment(&args("24.2.0", "kylinV10", "910B", CpuArch::X86_64));
        let report = check_against(&resolver(), &env, "7.0.0").unwrap();

        assert!(!report.compatible);
        assert_eq!(report.checks.driver.status, CheckStatus::Fail);
        assert!(report.checks.driver.message.contains("24.2.0"));
        assert_eq!(report.checks.os.status, CheckStatus::Fail);
        assert_eq!(report.checks.npu.status, CheckStatus::Ok);
        assert_eq!(report.checks.arch.status, CheckStatus::Fail);

        let text = render_checks(&report);
        assert!(text.contains("[NPU]"));
        assert!(text.contains("FAIL"));
        assert!(text.contains("INCOMPATIBLE"));
    }

    #[test]
    fn test_invalid_driver_is_failed_check() {
        let env = environment(&args("garbage", "ubuntu22.04", "910B", CpuArch::X86_64));
        let report = check_against(&resolver(), &env, "8.0.0").unwrap();
        assert_eq!(report.checks.driver.status, CheckStatus::Fail);
        assert!(!report.compatible);
    }

    #[test]
    fn test_unknown_cann_is_error() {
        let env = environment(&args("24.1.0", "ubuntu22.04", "910B", CpuArch::X86_64));
        let err = check_against(&resolver(), &env, "99.0.0").unwrap_err();
        assert_eq!(err.kind(), "version_not_found");
    }

    #[test]
    fn test_check_report_json_shape() {
        let env = environment(&args("24.1.0", "ubuntu22.04", "910B", CpuArch::X86_64));
        let report = check_against(&resolver(), &env, "8.0.0").unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["cann_version"], "8.0.0");
        assert_eq!(value["checks"]["driver"]["status"], "ok");
        assert_eq!(value["environment"]["npu_count"], 1);
        assert_eq!(value["compatible"], true);
    }

    #[test]
    fn test_validation_report_flattens_result() {
        let env = environment(&args("23.0.3", "ubuntu20.04", "910A", CpuArch::Aarch64));
        let report = EnvironmentReport {
            result: resolver().validate_environment(&env),
            environment: env,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["environment"]["os_name"], "ubuntu20.04");

        let text = render_validation(&report);
        assert!(text.contains("VALID"));
        assert!(text.contains("Recommended: 7.0.0"));
        assert!(text.contains("deprecated"));
    }

    #[test]
    fn test_invalid_environment_lists_errors() {
        let env = environment(&args("10.0.0", "ubuntu20.04", "910A", CpuArch::X86_64));
        let report = EnvironmentReport {
            result: resolver().validate_environment(&env),
            environment: env,
        };
        let text = render_validation(&report);
        assert!(text.contains("INVALID"));
        assert!(text.contains("No compatible CANN versions found"));
    }
}
