//! CLI argument parsing module for scanup

use clap::Parser;
use std::path::PathBuf;

/// Apply dependency updates from a security scan report to package.json
#[derive(Parser, Debug, Clone)]
#[command(
    name = "scanup",
    version,
    about = "Apply dependency updates from security scan reports to package.json"
)]
pub struct CliArgs {
    /// Path to a file containing the scan report (default: read stdin)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Path to package.json (default: ./package.json)
    #[arg(short = 'p', long = "package-json")]
    pub package_json: Option<PathBuf>,

    /// Skip running npm install after updating package.json
    #[arg(long)]
    pub skip_install: bool,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output a machine-readable run summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Resolve the manifest path, defaulting to ./package.json
    pub fn manifest_path(&self) -> PathBuf {
        self.package_json
            .clone()
            .unwrap_or_else(|| PathBuf::from("package.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["scanup"]);
        assert!(args.file.is_none());
        assert!(args.package_json.is_none());
        assert!(!args.skip_install);
        assert!(!args.dry_run);
        assert!(!args.json);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_file_short_flag() {
        let args = CliArgs::parse_from(["scanup", "-f", "scan.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("scan.txt")));
    }

    #[test]
    fn test_file_long_flag() {
        let args = CliArgs::parse_from(["scanup", "--file", "out/report.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("out/report.txt")));
    }

    #[test]
    fn test_package_json_flag() {
        let args = CliArgs::parse_from(["scanup", "-p", "app/package.json"]);
        assert_eq!(args.package_json, Some(PathBuf::from("app/package.json")));
        assert_eq!(args.manifest_path(), PathBuf::from("app/package.json"));
    }

    #[test]
    fn test_manifest_path_default() {
        let args = CliArgs::parse_from(["scanup"]);
        assert_eq!(args.manifest_path(), PathBuf::from("package.json"));
    }

    #[test]
    fn test_skip_install_flag() {
        let args = CliArgs::parse_from(["scanup", "--skip-install"]);
        assert!(args.skip_install);
    }

    #[test]
    fn test_dry_run_flags() {
        let args = CliArgs::parse_from(["scanup", "-n"]);
        assert!(args.dry_run);

        let args = CliArgs::parse_from(["scanup", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_json_flag() {
        let args = CliArgs::parse_from(["scanup", "--json"]);
        assert!(args.json);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["scanup", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["scanup", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "scanup",
            "--file",
            "scan.txt",
            "--package-json",
            "web/package.json",
            "--skip-install",
            "-n",
            "--verbose",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("scan.txt")));
        assert_eq!(args.package_json, Some(PathBuf::from("web/package.json")));
        assert!(args.skip_install);
        assert!(args.dry_run);
        assert!(args.verbose);
    }
}
