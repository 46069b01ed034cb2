//! Pivot Forge - offline pivot helper for OSINT investigations
//!
//! Generates username variants, pivot links and deterministic intel buckets
//! for domains, emails, phone numbers and IP addresses.

use anyhow::Context;
use chrono::Utc;
use inquire::{Confirm, InquireError, Select, Text};
use pivot_forge::{
    cli_error,
    types::{ForgeConfig, InputKind},
    variants::VariantConfig,
    workspace::{note_line, Action, Report, Workspace},
    Result, VariantGenerator,
};
use std::env;
use std::io::{self, Write};
use std::process;

fn main() -> anyhow::Result<()> {
    pivot_forge::init().context("failed to initialize")?;

    let config = match ForgeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args, &config) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;
    // RUST_LOG wins over PIVOT_FORGE_LOG; logs go to stderr so JSON stays clean
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Parsed command line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Interactive,
    Report(Workspace),
    Note {
        finding: String,
        source: String,
        confidence: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    json: bool,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let json = args.iter().any(|a| a == "--json");
    let rest: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let command = match rest.first().copied() {
        None => Command::Interactive,
        Some("-h") | Some("--help") | Some("help") => Command::Help,
        Some("-V") | Some("--version") => Command::Version,
        Some("report") => Command::Report(parse_report_flags(&rest[1..])?),
        Some("note") => {
            if rest.len() != 4 {
                return Err(cli_error!("note expects <finding> <source> <confidence>"));
            }
            Command::Note {
                finding: rest[1].to_string(),
                source: rest[2].to_string(),
                confidence: rest[3].to_string(),
            }
        }
        Some(kind) => {
            let kind: InputKind = kind.parse()?;
            let value = rest[1..].join(" ");
            if value.trim().is_empty() {
                return Err(cli_error!("No value given for {}", kind));
            }
            Command::Report(Workspace::new().reduce(Action::SetField(kind, value)))
        }
    };

    Ok(CliArgs { json, command })
}

/// Parse `--username U --domain D ...` into a workspace
fn parse_report_flags(flags: &[&str]) -> Result<Workspace> {
    let mut workspace = Workspace::new();
    let mut iter = flags.iter();

    while let Some(flag) = iter.next() {
        let name = flag
            .strip_prefix("--")
            .ok_or_else(|| cli_error!("Unexpected argument '{}'", flag))?;
        let kind: InputKind = name.parse().map_err(|_| cli_error!("Unknown flag '{}'", flag))?;
        let value = iter
            .next()
            .ok_or_else(|| cli_error!("Missing value for '{}'", flag))?;
        workspace = workspace.reduce(Action::SetField(kind, value.to_string()));
    }

    if InputKind::ALL.iter().all(|k| workspace.field(*k).trim().is_empty()) {
        return Err(cli_error!(
            "report needs at least one of --username, --domain, --email, --phone, --ip"
        ));
    }

    Ok(workspace)
}

fn run(args: &[String], config: &ForgeConfig) -> Result<()> {
    let cli = parse_args(args)?;
    let generator = VariantGenerator::with_config(VariantConfig::from(config));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Help => print_help(&mut out)?,
        Command::Version => writeln!(out, "pivot-forge {}", pivot_forge::VERSION)?,
        Command::Report(workspace) => {
            tracing::info!(json = cli.json, "Rendering report");
            let report = workspace.report(&generator);
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                render_report(&mut out, &report)?;
            }
        }
        Command::Note {
            finding,
            source,
            confidence,
        } => writeln!(out, "{}", note_line(Utc::now(), &finding, &source, &confidence))?,
        Command::Interactive => {
            drop(out);
            run_interactive(&generator)?;
        }
    }

    Ok(())
}

/// Render a report for the terminal
fn render_report(out: &mut impl Write, report: &Report) -> Result<()> {
    if report.is_empty() {
        writeln!(out, "❌ Nothing to show. Type a value to enable pivot links.")?;
        return Ok(());
    }

    if !report.variants.is_empty() {
        writeln!(out, "👤 Username Footprint ({} variants)", report.variants.len())?;
        writeln!(out, "═══════════════════════════════════")?;
        for variant in &report.variants {
            writeln!(out, "@{}", variant.handle)?;
            for link in &variant.links {
                writeln!(out, "   🔗 {:<10} {}", link.label, link.url)?;
            }
        }
        writeln!(out)?;
    }

    for section in &report.sections {
        let title = capitalize(&section.kind.to_string());
        writeln!(out, "{} {} Intel", section_icon(section.kind), title)?;
        writeln!(out, "─────────────────────")?;
        for (name, value) in section.intel.fields() {
            writeln!(out, "   {:<16} {}", name, value)?;
        }
        for link in &section.links {
            writeln!(out, "   🔗 {:<16} {}", link.label, link.url)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "⚠️  Scores and labels are generated locally and are not real intelligence.")?;
    Ok(())
}

fn section_icon(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Username => "👤",
        InputKind::Domain => "🌐",
        InputKind::Email => "📧",
        InputKind::Phone => "📞",
        InputKind::Ip => "🛰️",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Interactive menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Field(InputKind),
    AddNote,
    ShowNotes,
    ClearNotes,
    Reset,
    Quit,
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuChoice::Field(kind) => write!(f, "{} {}", section_icon(*kind), kind),
            MenuChoice::AddNote => write!(f, "📝 add case note"),
            MenuChoice::ShowNotes => write!(f, "📒 show case notes"),
            MenuChoice::ClearNotes => write!(f, "🧹 clear case notes"),
            MenuChoice::Reset => write!(f, "♻️  reset workspace"),
            MenuChoice::Quit => write!(f, "🚪 quit"),
        }
    }
}

fn menu_choices() -> Vec<MenuChoice> {
    InputKind::ALL
        .into_iter()
        .map(MenuChoice::Field)
        .chain([
            MenuChoice::AddNote,
            MenuChoice::ShowNotes,
            MenuChoice::ClearNotes,
            MenuChoice::Reset,
            MenuChoice::Quit,
        ])
        .collect()
}

/// Prompt-driven session over a single workspace
fn run_interactive(generator: &VariantGenerator) -> Result<()> {
    println!("🔎 Pivot Forge - offline pivot helper");
    println!("═══════════════════════════════════════");
    println!("Use only for authorized investigations and compliant reporting.");
    println!();

    let mut workspace = Workspace::new();

    loop {
        let menu = Select::new("What do you want to do?", menu_choices()).prompt();
        let Some(choice) = prompt_or_quit(menu)? else {
            break;
        };

        workspace = match choice {
            MenuChoice::Field(kind) => {
                let prompt = Text::new(&format!("{}:", kind))
                    .with_initial_value(workspace.field(kind))
                    .prompt();
                let Some(value) = prompt_or_quit(prompt)? else {
                    break;
                };
                let next = workspace.reduce(Action::SetField(kind, value));
                render_report(&mut io::stdout().lock(), &next.report(generator))?;
                next
            }
            MenuChoice::AddNote => {
                let Some(line) = prompt_note()? else {
                    break;
                };
                workspace.reduce(Action::AppendNote(line))
            }
            MenuChoice::ShowNotes => {
                if workspace.notes.is_empty() {
                    println!("📒 No case notes yet.");
                } else {
                    println!("📒 Case Notes\n{}", workspace.notes);
                }
                workspace
            }
            MenuChoice::ClearNotes => {
                let confirm = Confirm::new("Clear all case notes?").with_default(false).prompt();
                match prompt_or_quit(confirm)? {
                    Some(true) => workspace.reduce(Action::ClearNotes),
                    Some(false) => workspace,
                    None => break,
                }
            }
            MenuChoice::Reset => workspace.reduce(Action::Reset),
            MenuChoice::Quit => break,
        };
        println!();
    }

    if !workspace.notes.is_empty() {
        println!("📒 Case Notes\n{}", workspace.notes);
    }
    Ok(())
}

/// Ask for the three parts of a case note; `None` when the user backs out
fn prompt_note() -> Result<Option<String>> {
    let Some(finding) = prompt_or_quit(Text::new("Finding:").prompt())? else {
        return Ok(None);
    };
    let Some(source) = prompt_or_quit(Text::new("Source URL:").prompt())? else {
        return Ok(None);
    };
    let confidence = Text::new("Confidence:").with_default("Medium").prompt();
    let Some(confidence) = prompt_or_quit(confidence)? else {
        return Ok(None);
    };
    Ok(Some(note_line(Utc::now(), &finding, &source, &confidence)))
}

/// Esc and Ctrl-C end the session like the quit entry
fn prompt_or_quit<T>(answer: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Print help information
fn print_help(out: &mut impl Write) -> Result<()> {
    let help = "\
🔎 Pivot Forge - offline pivot helper for OSINT investigations
═══════════════════════════════════════════════════════════════

USAGE:
    pivot-forge                               # Interactive session
    pivot-forge [--json] <KIND> <VALUE>       # Pivot on one value
    pivot-forge [--json] report [--KIND VALUE]...
    pivot-forge note <FINDING> <SOURCE> <CONFIDENCE>

KINDS:
    username, domain, email, phone, ip

EXAMPLES:
    pivot-forge username \"Me elad\"
    pivot-forge --json domain example.com
    pivot-forge report --email target@domain.com --ip 8.8.8.8

ENVIRONMENT VARIABLES:
    PIVOT_FORGE_MAX_VARIANTS   Variant cap, 1-100 (default: 30)
    PIVOT_FORGE_SUFFIXES       Comma-separated suffix list
    PIVOT_FORGE_LOG            Log filter (default: warn; RUST_LOG wins)

Scores and labels are generated locally and are not real intelligence.
Use only for authorized investigations and compliant reporting.";
    writeln!(out, "{}", help)?;
    Ok(())
}
