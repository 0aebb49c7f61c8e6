use std::io::{self, BufRead};

use anyhow::{bail, Context};
use colored::Colorize;
use refscope_names::{RefKind, RefName};
use serde::Serialize;

use crate::cli::*;
use crate::config::{CliConfig, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::resolve(&cli)?;
    match cli.command {
        Command::Classify(args) => cmd_classify(args, &config),
        Command::Build(args) => cmd_build(args),
        Command::Config => cmd_config(&config),
    }
}

fn cmd_classify(args: ClassifyArgs, config: &CliConfig) -> anyhow::Result<()> {
    let raw = if args.names.is_empty() {
        read_names(io::stdin().lock())?
    } else {
        args.names
    };
    let names: Vec<RefName> = raw.iter().map(|r| RefName::parse(r)).collect();

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&names, config.color)),
        OutputFormat::Json => println!("{}", render_json(&names)?),
    }

    let invalid = names.iter().filter(|n| !n.is_valid()).count();
    if config.strict && invalid > 0 {
        bail!("{invalid} of {} reference names are invalid", names.len());
    }
    Ok(())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    println!("{}", build_name(&args)?);
    Ok(())
}

fn cmd_config(config: &CliConfig) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(config).context("failed to render config")?);
    Ok(())
}

/// One name per non-blank line, surrounding whitespace kept.
fn read_names(input: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read names from stdin")?;
        if !line.trim().is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}

fn build_name(args: &BuildArgs) -> anyhow::Result<RefName> {
    let mut name = match args.kind {
        BuildKind::Branch => RefName::branch(&args.short)?,
        BuildKind::Tag => RefName::tag(&args.short)?,
    };
    // Innermost first, so the first flag ends up outermost.
    for namespace in args.namespaces.iter().rev() {
        name = name.in_namespace(namespace)?;
    }
    Ok(name)
}

#[derive(Serialize)]
struct Report<'a> {
    raw: &'a str,
    kind: RefKind,
    valid: bool,
    name: &'a str,
    shorthand: &'a str,
    scopes: &'a [String],
    namespaces: &'a [String],
}

impl<'a> From<&'a RefName> for Report<'a> {
    fn from(n: &'a RefName) -> Self {
        Self {
            raw: n.as_str(),
            kind: n.kind(),
            valid: n.is_valid(),
            name: n.name(),
            shorthand: n.shorthand(),
            scopes: n.scopes(),
            namespaces: n.namespaces(),
        }
    }
}

fn render_json(names: &[RefName]) -> anyhow::Result<String> {
    let reports: Vec<Report<'_>> = names.iter().map(Report::from).collect();
    serde_json::to_string_pretty(&reports).context("failed to render report")
}

fn paint(kind: RefKind, color: bool) -> String {
    let label = format!("{:<11}", kind.as_str());
    if !color {
        return label;
    }
    match kind {
        RefKind::Branch => label.green().to_string(),
        RefKind::Tag => label.yellow().to_string(),
        RefKind::Peculiar | RefKind::Custom => label.cyan().to_string(),
        RefKind::Invalid => label.red().bold().to_string(),
        _ => label.magenta().to_string(),
    }
}

fn render_text(names: &[RefName], color: bool) -> String {
    let mut out = String::new();
    for n in names {
        let mut line = format!("{} {:?}", paint(n.kind(), color), n.as_str());
        if n.kind().is_hierarchical() {
            line.push_str(&format!(" name={}", n.name()));
            if n.is_scoped() {
                line.push_str(&format!(" scope={}", n.scope_name()));
            }
        }
        if n.is_namespaced() {
            line.push_str(&format!(" namespace={}", n.namespace_name()));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
