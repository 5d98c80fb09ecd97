//! Pipeline coordinating the linear update workflow
//!
//! parse → relationships → filter → patch → (optional) npm install
//!
//! Owns all human-readable progress output; machine-readable output is
//! handled by the caller through the returned [`RunSummary`].

use crate::cli::CliArgs;
use crate::domain::UpdateRecord;
use crate::error::{AppError, InstallError, ManifestError};
use crate::installer::InstallRunner;
use crate::manifest::{self, AppliedUpdate, PatchResult};
use crate::progress::Progress;
use crate::report::{parse_relationships, parse_report};
use crate::update::{partition_updates, TransitiveUpdate};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of security advisory lines echoed after a run
const MAX_SECURITY_FIXES_SHOWN: usize = 5;

/// Display truncation width for advisory lines
const SECURITY_FIX_WIDTH: usize = 100;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Path to the package.json to patch
    pub manifest_path: PathBuf,
    /// Never run npm install
    pub skip_install: bool,
    /// Compute everything but write nothing
    pub dry_run: bool,
    /// Suppress informational output
    pub quiet: bool,
    /// Extra diagnostics on stderr
    pub verbose: bool,
}

impl PipelineOptions {
    /// Build options from parsed CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            manifest_path: args.manifest_path(),
            skip_install: args.skip_install,
            dry_run: args.dry_run,
            // json output must not be interleaved with progress text
            quiet: args.quiet || args.json,
            verbose: args.verbose,
        }
    }
}

/// Machine-readable summary of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Total dependency changes found in the report
    pub updates_found: usize,
    /// Records classified for direct application
    pub direct: Vec<UpdateRecord>,
    /// Records arriving transitively through parent packages
    pub transitive: Vec<TransitiveUpdate>,
    /// Rewrites applied to the manifest
    pub applied: Vec<AppliedUpdate>,
    /// Platform-specific "add" packages skipped
    pub skipped_platform: Vec<String>,
    /// "add" packages that may appear as indirect dependencies
    pub indirect: Vec<String>,
    /// Whether the manifest was (or in dry-run, would be) modified
    pub modified: bool,
    /// Whether npm install was executed
    pub install_ran: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Advisory lines collected from the report
    pub security_fixes: Vec<String>,
}

/// Run the full update pipeline over raw report text
pub fn run(
    report_text: &str,
    options: &PipelineOptions,
    installer: &dyn InstallRunner,
) -> Result<RunSummary, AppError> {
    let say = |line: String| {
        if !options.quiet {
            println!("{}", line);
        }
    };

    say(format!("🚀 {}\n", "scanup dependency updater".bold()));
    say("📋 Parsing scan report...".to_string());

    let report = parse_report(report_text);
    let relationships = parse_relationships(report_text);

    if report.is_empty() {
        say("  ℹ️  No dependency updates found in report".to_string());
        return Ok(RunSummary {
            updates_found: 0,
            direct: Vec::new(),
            transitive: Vec::new(),
            applied: Vec::new(),
            skipped_platform: Vec::new(),
            indirect: Vec::new(),
            modified: false,
            install_ran: false,
            dry_run: options.dry_run,
            security_fixes: report.security_fixes,
        });
    }

    let updates_found = report.updates.len();
    say(format!("  📦 Found {} dependency changes\n", updates_found));
    say("🔍 Analyzing dependency relationships...".to_string());

    let outcome = partition_updates(report.updates, &relationships);
    for transitive in &outcome.transitive {
        say(format!(
            "  ℹ️  {} will be updated transitively through: {}",
            transitive.package,
            transitive.chain_display()
        ));
    }
    say(format!(
        "  📦 {} direct dependencies to update\n",
        outcome.direct.len()
    ));

    say(format!(
        "📝 Updating {}...",
        options.manifest_path.display()
    ));
    let patch = patch(options, &outcome.direct)?;
    report_patch(options, &patch, &say);

    let mut install_ran = false;
    if patch.modified() && !options.dry_run && !options.skip_install {
        run_install(options, installer, &say)?;
        install_ran = true;
    }

    if patch.modified() {
        if options.dry_run {
            say(format!("\n{} no files were changed", "(dry-run)".cyan()));
        } else {
            say("\n✨ Update complete!".to_string());
        }
        if !options.quiet {
            print_security_fixes(&report.security_fixes);
        }
    } else {
        say("\n  ℹ️  No updates were necessary".to_string());
    }

    Ok(RunSummary {
        updates_found,
        direct: outcome.direct,
        transitive: outcome.transitive,
        modified: patch.modified(),
        applied: patch.applied,
        skipped_platform: patch.skipped_platform,
        indirect: patch.indirect,
        install_ran,
        dry_run: options.dry_run,
        security_fixes: report.security_fixes,
    })
}

/// Patch the manifest, or compute the patch without writing in dry-run
fn patch(options: &PipelineOptions, direct: &[UpdateRecord]) -> Result<PatchResult, ManifestError> {
    let path = &options.manifest_path;
    if options.dry_run {
        let content =
            fs::read_to_string(path).map_err(|e| ManifestError::read_error(path.clone(), e))?;
        manifest::patch_manifest(&content, direct)
            .map_err(|e| ManifestError::parse_error(path.clone(), e.to_string()))
    } else {
        manifest::apply_to_file(path, direct)
    }
}

fn report_patch(options: &PipelineOptions, patch: &PatchResult, say: &impl Fn(String)) {
    let verb = if options.dry_run {
        "Would update"
    } else {
        "Updated"
    };
    for applied in &patch.applied {
        say(format!(
            "  ✅ {} {}: {} → {}",
            verb,
            applied.package,
            applied.old_range,
            applied.new_range.green()
        ));
    }
    for package in &patch.skipped_platform {
        say(format!(
            "  ⏭️  Skipping platform-specific package: {}",
            package
        ));
    }
    for package in &patch.indirect {
        say(format!(
            "  ℹ️  New package {} may be added as transitive dependency",
            package
        ));
    }
}

/// Run npm install in the manifest's directory; non-zero exit is fatal
fn run_install(
    options: &PipelineOptions,
    installer: &dyn InstallRunner,
    say: &impl Fn(String),
) -> Result<(), InstallError> {
    say("\n🔄 Running npm install to update dependencies...".to_string());

    let working_dir = options
        .manifest_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut progress = Progress::new(!options.quiet);
    progress.spinner("npm install");
    let outcome = installer.run_install(working_dir);
    progress.finish();

    if !outcome.success {
        return Err(InstallError::CommandFailed {
            stderr: outcome.stderr,
        });
    }

    if outcome.has_warnings() {
        say(format!("  ⚠️  npm install warnings: {}", outcome.stderr));
    }
    if options.verbose && !outcome.stdout.is_empty() {
        eprintln!("{}", outcome.stdout);
    }
    say("  ✅ Dependencies updated successfully".to_string());
    Ok(())
}

/// Echo up to five unique CVE lines, truncated for display
fn print_security_fixes(fixes: &[String]) {
    let mut unique: Vec<&String> = Vec::new();
    for fix in fixes {
        if fix.contains("CVE-") && !unique.contains(&fix) {
            unique.push(fix);
        }
    }
    if unique.is_empty() {
        return;
    }

    println!("\n🔒 Security fixes applied:");
    for fix in unique.into_iter().take(MAX_SECURITY_FIXES_SHOWN) {
        let truncated: String = fix.chars().take(SECURITY_FIX_WIDTH).collect();
        if truncated.len() < fix.len() {
            println!("  • {}...", truncated);
        } else {
            println!("  • {}", truncated);
        }
    }
}
