use anyhow::Result;
use clap::Parser;
use class_loader::cli::{Cli, Commands, OutputFormat};
use class_loader::config::build_loader;
use class_loader::loader::ClassLoader;
use class_loader::scan::all_sub_dirs;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = parse_cli()?;

    match cli.command.clone() {
        Commands::Scan { path } => {
            let dirs = all_sub_dirs(&path)?;
            println!("{}", serde_json::to_string_pretty(&dirs)?);
        }
        Commands::Resolve {
            class_names,
            format,
            output,
        } => {
            let mut loader = build_loader(&cli)?;
            let report = resolve_names(&mut loader, &class_names)?;
            write_resolve_output(&loader, &report, format, output.as_deref())?;
            if report.missed > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn parse_cli() -> Result<Cli> {
    let args: Vec<String> = std::env::args().collect();
    Ok(Cli::parse_from(rewrite_args_for_implicit_resolve(args)))
}

fn rewrite_args_for_implicit_resolve(mut args: Vec<String>) -> Vec<String> {
    if args.len() <= 1 {
        return args;
    }

    let subcommands = ["resolve", "scan", "help"];
    let value_flags = ["--level", "--subdir", "--ext", "--scan-subdirs"];

    let mut idx = 1usize;
    while idx < args.len() {
        let a = args[idx].as_str();
        if a == "--" {
            idx += 1;
            break;
        }

        if value_flags.contains(&a) {
            idx += 2;
            continue;
        }

        if value_flags.iter().any(|f| a.starts_with(&format!("{f}="))) {
            idx += 1;
            continue;
        }

        if a.starts_with('-') {
            idx += 1;
            continue;
        }

        break;
    }

    if idx < args.len() {
        let token = args[idx].as_str();
        if !subcommands.contains(&token) {
            args.insert(idx, "resolve".to_string());
        }
    }

    args
}

#[derive(Debug, Serialize)]
struct ResolveOutcome {
    class_name: String,
    path: Option<String>,
    resolved: bool,
    cache_hit: bool,
    newly_loaded: bool,
    duration_ms: u64,
}

#[derive(Debug, Serialize)]
struct ResolveReport {
    resolved: usize,
    missed: usize,
    loaded_units: usize,
    duration_ms: u64,
    outcomes: Vec<ResolveOutcome>,
}

fn resolve_names(loader: &mut ClassLoader, class_names: &[String]) -> Result<ResolveReport> {
    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(class_names.len());
    let mut resolved = 0usize;
    let mut missed = 0usize;

    for class_name in class_names {
        let call_start = Instant::now();
        let cache_hit = loader.cached_path(class_name).is_some();
        let units_before = loader.loaded_units();
        let found = loader.load(class_name)?;

        if found {
            resolved += 1;
        } else {
            missed += 1;
        }
        outcomes.push(ResolveOutcome {
            class_name: class_name.clone(),
            path: loader.cached_path(class_name).map(str::to_string),
            resolved: found,
            cache_hit,
            newly_loaded: loader.loaded_units() > units_before,
            duration_ms: call_start.elapsed().as_millis() as u64,
        });
    }

    Ok(ResolveReport {
        resolved,
        missed,
        loaded_units: loader.loaded_units(),
        duration_ms: start.elapsed().as_millis() as u64,
        outcomes,
    })
}

fn write_resolve_output(
    loader: &ClassLoader,
    report: &ResolveReport,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("resolved: {}\n", report.resolved));
            out.push_str(&format!("missed: {}\n", report.missed));
            out.push_str(&format!("duration_ms: {}\n", report.duration_ms));
            for o in &report.outcomes {
                out.push_str(&format!(
                    "- class_name: {}, resolved: {}, cache_hit: {}, path: {}\n",
                    o.class_name,
                    o.resolved,
                    o.cache_hit,
                    o.path.as_deref().unwrap_or("-")
                ));
            }
            out
        }
        OutputFormat::Code => {
            let mut out = String::new();
            for o in &report.outcomes {
                if let Some(source) = loader.source(&o.class_name) {
                    out.push_str(source);
                    if !source.ends_with('\n') {
                        out.push('\n');
                    }
                }
            }
            out
        }
    };

    if let Some(path) = output {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
    } else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "class_loader_test_{}_{}_{}",
            std::process::id(),
            nanos,
            name
        ))
    }

    #[test]
    fn rewrite_args_for_implicit_resolve_skips_global_option_values() {
        let args = vec![
            "class-loader".to_string(),
            "--level".to_string(),
            "lib".to_string(),
            "--ext".to_string(),
            ".php".to_string(),
            "Foo".to_string(),
            "--debug".to_string(),
        ];

        let rewritten = rewrite_args_for_implicit_resolve(args);
        assert_eq!(rewritten[1], "--level");
        assert_eq!(rewritten[2], "lib");
        assert_eq!(rewritten[3], "--ext");
        assert_eq!(rewritten[4], ".php");
        assert_eq!(rewritten[5], "resolve");
        assert_eq!(rewritten[6], "Foo");
    }

    #[test]
    fn rewrite_args_leaves_explicit_subcommand_alone() {
        let args = vec![
            "class-loader".to_string(),
            "scan".to_string(),
            "lib".to_string(),
        ];
        assert_eq!(rewrite_args_for_implicit_resolve(args.clone()), args);
    }

    #[test]
    fn resolve_names_reports_cache_hits_on_repeats() -> Result<()> {
        let base = temp_dir("main_resolve");
        std::fs::create_dir_all(&base)?;
        std::fs::write(base.join("Foo.php"), "<?php class Foo {}\n")?;

        let mut loader = ClassLoader::new(
            vec![base.to_string_lossy().to_string()],
            Vec::new(),
            vec![".php".to_string()],
        );

        let names = vec!["Foo".to_string(), "Foo".to_string(), "Gone".to_string()];
        let report = resolve_names(&mut loader, &names)?;

        assert_eq!(report.resolved, 2);
        assert_eq!(report.missed, 1);
        assert_eq!(report.loaded_units, 1);

        assert!(report.outcomes[0].resolved);
        assert!(!report.outcomes[0].cache_hit);
        assert!(report.outcomes[0].newly_loaded);

        assert!(report.outcomes[1].resolved);
        assert!(report.outcomes[1].cache_hit);
        assert!(!report.outcomes[1].newly_loaded);

        assert!(!report.outcomes[2].resolved);
        assert_eq!(report.outcomes[2].path, None);

        let _ = std::fs::remove_dir_all(base);
        Ok(())
    }
}
