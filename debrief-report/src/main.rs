mod loader;
mod reports;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write, stdin, stdout};
use std::path::PathBuf;

use debrief_game::{DataLoader, InputAction, Screen, StatisticsEngine, StatisticsScreen};
use loader::{FileLoader, FileStorage};

#[derive(Debug, Parser)]
#[command(name = "debrief-report", version = "0.1.0")]
#[command(about = "End-of-campaign statistics for a finished Debrief save")]
struct Args {
    /// Saved campaign to summarize
    #[arg(long)]
    save: PathBuf,

    /// Ruleset override (defaults to the bundled ruleset)
    #[arg(long)]
    ruleset: Option<PathBuf>,

    /// String table override; missing keys fall back to English
    #[arg(long)]
    strings: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long)]
    no_color: bool,

    /// Wait for confirmation and return to the main menu afterwards
    #[arg(long)]
    acknowledge: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    let engine = StatisticsEngine::new(
        FileLoader::new(args.ruleset.clone(), args.strings.clone()),
        FileStorage,
    );
    let ruleset = engine.data_loader().load_ruleset()?;
    let strings = engine.data_loader().load_strings()?;

    let save_name = args.save.to_string_lossy();
    let Some(mut session) = engine.load_session(&save_name)? else {
        bail!("no saved campaign at {}", args.save.display());
    };
    let Some(screen) = session.show_statistics(&ruleset, &strings) else {
        bail!("campaign {} has no statistics to show", args.save.display());
    };

    if args.report == "console" && args.output.is_none() {
        announce_banner();
    }
    write_report(&args, screen)?;

    if args.acknowledge {
        wait_for_confirm()?;
        session.handle_input(InputAction::KeyConfirm);
        if session.screen() == &Screen::MainMenu {
            println!("{}", "Returned to main menu.".green());
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner() {
    println!("{}", "Debrief Campaign Statistics".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}

fn wait_for_confirm() -> Result<()> {
    println!("Press Enter to acknowledge...");
    let mut line = String::new();
    stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read confirmation")?;
    Ok(())
}

fn write_report(args: &Args, screen: &StatisticsScreen) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, screen)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, screen)?,
        _ => reports::generate_console_report(&mut output_target, screen)?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
