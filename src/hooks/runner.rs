//! Hook execution utilities.
//!
//! Provides environment variable building and command execution for build hooks.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;
use std::process::{Command, Output};

/// A resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    /// Log prefix (e.g. `css`).
    pub name: &'static str,
    /// Program followed by its arguments; may contain `$DOCSMITH_*` variables.
    pub command: Vec<String>,
    /// Suppress stdout/stderr on success.
    pub quiet: bool,
}

// ============================================================================
// Environment Variables
// ============================================================================

/// Build `$DOCSMITH_*` environment variables for hook execution
pub fn build_vars(config: &SiteConfig) -> FxHashMap<String, String> {
    let mut vars = FxHashMap::default();
    vars.insert("DOCSMITH_ROOT".into(), config.get_root().display().to_string());
    vars.insert(
        "DOCSMITH_OUTPUT_DIR".into(),
        config.build.output.display().to_string(),
    );
    vars.insert(
        "DOCSMITH_THEME".into(),
        config.build.css.theme.display().to_string(),
    );
    vars
}

// ============================================================================
// Command Argument Resolution
// ============================================================================

/// Resolve `$DOCSMITH_*` variables in command arguments
///
/// Longer names are replaced first so `$DOCSMITH_ROOT_X` never matches `$DOCSMITH_ROOT`.
pub fn resolve_args(args: &[String], vars: &FxHashMap<String, String>) -> Vec<String> {
    let mut keys: Vec<_> = vars.keys().collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));

    args.iter()
        .map(|arg| {
            keys.iter().fold(arg.clone(), |acc, key| {
                acc.replace(&format!("${key}"), &vars[key.as_str()])
            })
        })
        .collect()
}

// ============================================================================
// Hook Execution
// ============================================================================

/// Run a hook in the site root with `$DOCSMITH_*` set.
pub fn run_hook(hook: &Hook, config: &SiteConfig) -> Result<Output> {
    let vars = build_vars(config);
    let resolved = resolve_args(&hook.command, &vars);
    let Some((program, args)) = resolved.split_first() else {
        bail!("`{}` hook has no command", hook.name);
    };

    crate::debug!(hook.name; "running `{}`", resolved.join(" "));

    let output = Command::new(program)
        .args(args)
        .current_dir(config.get_root())
        .envs(&vars)
        .output()
        .with_context(|| format!("Failed to execute `{program}`"))?;

    if !output.status.success() {
        bail!(format_error(program, &output));
    }

    if !hook.quiet {
        for stream in [&output.stdout, &output.stderr] {
            let text = String::from_utf8_lossy(stream);
            let text = text.trim();
            if !text.is_empty() {
                crate::log!(hook.name; "{}", text);
            }
        }
    }

    Ok(output)
}

/// Format error message for failed command.
fn format_error(name: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let mut msg = format!("Command `{name}` failed with {}", output.status);
    for text in [stderr.trim(), stdout.trim()] {
        if !text.is_empty() {
            msg.push('\n');
            msg.push_str(text);
        }
    }
    msg
}
