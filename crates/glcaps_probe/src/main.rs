//! GL Capability Probe
//!
//! Replays a recorded driver report through capability inspection and
//! checks it against version and extension requirements.

use std::path::PathBuf;
use std::rc::{Rc, Weak};

use anyhow::{bail, Context, Result};
use clap::Parser;
use glcaps_core::{
    CapabilityProvider, CapabilitySupport, CapsSettings, DriverVersion, NativeExtensions, PlatformFilter,
    RecordedDriver, TracingSink,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glcaps-probe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recorded driver report (JSON)
    report: PathBuf,

    /// Settings file (JSON)
    #[arg(long, env = "GLCAPS_SETTINGS")]
    settings: Option<PathBuf>,

    /// Extension filter: standard or web-embedded
    #[arg(long)]
    platform: Option<PlatformFilter>,

    /// Minimum driver version, as major.minor
    #[arg(long = "require-version", value_name = "M.m", value_parser = parse_requirement)]
    require_version: Vec<DriverVersion>,

    /// Extension that must be available
    #[arg(long = "require-extension", value_name = "NAME")]
    require_extension: Vec<String>,

    /// Print every collected extension
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("glcaps v{}", glcaps_core::VERSION);
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match &cli.settings {
        Some(path) => CapsSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => CapsSettings::for_target(),
    };
    if let Some(platform) = cli.platform {
        settings = settings.with_platform(platform);
    }

    let driver = RecordedDriver::load(&cli.report)
        .with_context(|| format!("loading driver report {}", cli.report.display()))?;
    let native = Rc::new(NativeExtensions::new(driver.native_extensions.iter().cloned()));

    let caps = CapabilitySupport::initialise(&driver, Rc::downgrade(&native) as Weak<dyn CapabilityProvider>, &settings, &TracingSink)
        .context("capability initialization failed")?;

    println!("version:    {}", caps.version());
    println!("vendor:     {}", caps.vendor());
    println!("renderer:   {}", caps.renderer());
    println!("extensions: {} ({} filter)", caps.extensions().len(), settings.platform);
    if !native.is_empty() {
        println!("native:     {}", native.len());
    }

    if cli.list {
        for name in caps.extensions().iter() {
            println!("  {name}");
        }
    }

    let mut missing = 0usize;
    for required in &cli.require_version {
        let ok = caps.has_min_version(required.major, required.minor);
        println!("{} version >= {required}", status(ok));
        missing += usize::from(!ok);
    }
    for name in &cli.require_extension {
        let ok = caps.has_extension(name);
        println!("{} {name}", status(ok));
        missing += usize::from(!ok);
    }

    if missing > 0 {
        bail!("{missing} requirement(s) not met");
    }
    Ok(())
}

/// Requirements are typed by hand, so only `M` or `M.m` is accepted.
fn parse_requirement(s: &str) -> std::result::Result<DriverVersion, String> {
    let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let (major, minor) = match s.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (s, "0"),
    };
    if !is_number(major) || !is_number(minor) {
        return Err(format!("expected a version like 3 or 3.1, got '{s}'"));
    }
    let major = major.parse().map_err(|e| format!("bad major version '{major}': {e}"))?;
    let minor = minor.parse().map_err(|e| format!("bad minor version '{minor}': {e}"))?;
    Ok(DriverVersion::new(major, minor))
}

fn status(ok: bool) -> &'static str {
    if ok {
        "ok     "
    } else {
        "missing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_requirements() {
        let cli = Cli::try_parse_from([
            "glcaps-probe",
            "reports/adreno_740.json",
            "--platform",
            "web-embedded",
            "--require-version",
            "3.1",
            "--require-version",
            "2.0",
            "--require-extension",
            "GL_OES_texture_3D",
            "--list",
        ])
        .unwrap();
        assert_eq!(cli.platform, Some(PlatformFilter::WebEmbedded));
        assert_eq!(
            cli.require_version,
            vec![DriverVersion::new(3, 1), DriverVersion::new(2, 0)]
        );
        assert_eq!(cli.require_extension, vec!["GL_OES_texture_3D"]);
        assert!(cli.list);
    }

    #[test]
    fn rejects_unknown_platform() {
        let result = Cli::try_parse_from(["glcaps-probe", "r.json", "--platform", "desktop"]);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_requirements_are_rejected() {
        for bad in ["banana", "3,1", "", "3.", ".1", "3.1.2", "-1.0", "3.x"] {
            let result =
                Cli::try_parse_from(["glcaps-probe", "r.json", "--require-version", bad]);
            assert!(result.is_err(), "{bad:?} should be rejected");
        }
        assert_eq!(parse_requirement("3").unwrap(), DriverVersion::new(3, 0));
        assert_eq!(parse_requirement("10.15").unwrap(), DriverVersion::new(10, 15));
    }

    fn adreno(args: &[&str]) -> Cli {
        let report = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("reports/adreno_740.json");
        let mut argv = vec!["glcaps-probe".to_string(), report.display().to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn met_requirements_succeed() {
        let cli = adreno(&[
            "--require-version",
            "3.2",
            "--require-extension",
            "GL_OES_texture_3D",
        ]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn unmet_version_fails() {
        let err = run(adreno(&["--require-version", "3.3"])).unwrap_err();
        assert!(err.to_string().contains("1 requirement(s) not met"));
    }

    #[test]
    fn native_extension_satisfies_requirement() {
        assert!(run(adreno(&["--require-extension", "EGL_KHR_fence_sync"])).is_ok());
    }

    #[test]
    fn unmet_extension_fails() {
        let cli = adreno(&[
            "--require-extension",
            "GL_NV_fence",
            "--require-extension",
            "EGL_KHR_image_base",
        ]);
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("1 requirement(s) not met"));
    }

    #[test]
    fn missing_report_fails() {
        let cli = Cli::try_parse_from(["glcaps-probe", "/no/such/report.json"]).unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn bundled_reports_load() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("reports");
        for name in ["adreno_740.json", "webgl2_chromium.json"] {
            let driver = RecordedDriver::load(dir.join(name)).unwrap();
            assert!(driver.version.is_some());
            assert!(driver.extensions.is_some());
        }
    }
}
