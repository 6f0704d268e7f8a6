// sortty: step-by-step sorting visualizer for the terminal

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::algorithm::Algorithm;
use sortty::config::Config;
use sortty::driver::ReplayDriver;
use sortty::generator::{generate, parse_array, validate_input};
use sortty::steps::Value;
use sortty::store::{FileStore, NewVisualization, VisualizationStore, DEFAULT_LIST_LIMIT};
use sortty::telemetry::{self, LogTarget};
use sortty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "sortty", version, about = "Watch sorting algorithms run, one step at a time")]
struct Cli {
    /// Config file; defaults to ./sortty.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive visualizer (default)
    Play(SessionArgs),
    /// Print the step log for an array as JSON
    Steps(SessionArgs),
    /// Replay a step log in text, one frame per line
    Trace(SessionArgs),
    /// List the supported algorithms
    Algorithms,
    /// Generate a step log and save it
    Save(SessionArgs),
    /// List saved visualizations, newest first
    List {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },
    /// Print a saved visualization as JSON
    Show { id: String },
    /// Delete a saved visualization
    Delete { id: String },
    /// Open a saved visualization in the visualizer
    Replay {
        id: String,
        #[arg(long)]
        speed: Option<u32>,
    },
}

#[derive(Args, Debug, Default)]
struct SessionArgs {
    /// merge, quick, bubble, selection or insertion
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Comma or space separated integers
    #[arg(long)]
    array: Option<String>,

    /// Playback speed, 1 (slow) to 20 (fast)
    #[arg(short, long)]
    speed: Option<u32>,
}

impl SessionArgs {
    fn algorithm(&self, config: &Config) -> Algorithm {
        self.algorithm.unwrap_or(config.algorithm)
    }

    fn array(&self, config: &Config) -> anyhow::Result<Vec<Value>> {
        match &self.array {
            Some(text) => parse_array(text).context("parse --array"),
            None => Ok(config.default_array.clone()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, rejected) = Config::load(cli.config.as_deref())?;
    let cmd = cli.cmd.unwrap_or(Command::Play(SessionArgs::default()));

    let interactive = matches!(cmd, Command::Play(_) | Command::Replay { .. });
    let target = if interactive {
        LogTarget::File(config.log_file.as_deref())
    } else {
        LogTarget::Stderr
    };
    telemetry::init(cli.verbose, target)?;
    for rejected in &rejected {
        tracing::warn!("{rejected}");
    }

    match cmd {
        Command::Play(args) => {
            let mut driver = ReplayDriver::new(config.default_array.clone())?;
            let algorithm = args.algorithm(&config);
            if let Some(text) = &args.array {
                let array = parse_array(text).context("parse --array")?;
                driver.load(algorithm, &array)?;
            }
            let store = open_store(&config.store_dir)?;
            let speed = args.speed.unwrap_or(config.speed);
            run_tui(App::new(driver, store, algorithm, speed))
        }
        Command::Steps(args) => {
            let array = args.array(&config)?;
            validate_input(&array)?;
            let log = generate(args.algorithm(&config), &array);
            println!("{}", serde_json::to_string_pretty(&log)?);
            Ok(())
        }
        Command::Trace(args) => trace(args.algorithm(&config), &args.array(&config)?),
        Command::Algorithms => {
            for algorithm in Algorithm::ALL {
                println!(
                    "{:<10} {:<15} {}",
                    algorithm.name(),
                    algorithm.title(),
                    algorithm.time_complexity()
                );
            }
            Ok(())
        }
        Command::Save(args) => {
            let algorithm = args.algorithm(&config);
            let array = args.array(&config)?;
            validate_input(&array)?;
            let steps = generate(algorithm, &array);
            let mut store = open_store(&config.store_dir)?;
            let saved = store
                .create(NewVisualization {
                    algorithm,
                    array,
                    steps,
                })
                .context("save visualization")?;
            println!("{}", serde_json::to_string_pretty(&saved)?);
            Ok(())
        }
        Command::List { limit } => {
            let store = open_store(&config.store_dir)?;
            for entry in store.list(limit)? {
                println!(
                    "{}  {:<10} {:>4} elements  {}",
                    entry.id,
                    entry.algorithm.name(),
                    entry.elements,
                    entry.created_at
                );
            }
            Ok(())
        }
        Command::Show { id } => {
            let store = open_store(&config.store_dir)?;
            let record = store.get(&id).with_context(|| format!("load '{id}'"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Command::Delete { id } => {
            let mut store = open_store(&config.store_dir)?;
            store.delete(&id).with_context(|| format!("delete '{id}'"))?;
            println!("deleted {id}");
            Ok(())
        }
        Command::Replay { id, speed } => {
            let store = open_store(&config.store_dir)?;
            let record = store.get(&id).with_context(|| format!("load '{id}'"))?;
            let mut driver = ReplayDriver::new(config.default_array.clone())?;
            driver.load_record(record.algorithm, record.array, Arc::new(record.steps))?;
            let speed = speed.unwrap_or(config.speed);
            run_tui(App::new(driver, store, record.algorithm, speed))
        }
    }
}

fn open_store(dir: &Path) -> anyhow::Result<Box<dyn VisualizationStore>> {
    let store =
        FileStore::open(dir).with_context(|| format!("open store at '{}'", dir.display()))?;
    Ok(Box::new(store))
}

/// Print the initial array, then one line per applied step with the touched
/// positions starred
fn trace(algorithm: Algorithm, array: &[Value]) -> anyhow::Result<()> {
    let mut driver = ReplayDriver::new(array.to_vec())?;
    driver.load(algorithm, array)?;

    let log = Arc::clone(driver.step_log());
    println!("{} over {} elements, {} steps", algorithm.title(), array.len(), log.len());
    println!("     {}", format_frame(array, &[]));

    let mut position = 0;
    let mut print_frame = |frame: &[Value], highlights: &[usize]| {
        let step = log.get(position).map(|s| s.to_string()).unwrap_or_default();
        println!("{position:>4} {}    {step}", format_frame(frame, highlights));
        position += 1;
    };
    driver.run_to_completion(&mut print_frame)?;
    Ok(())
}

fn format_frame(array: &[Value], highlights: &[usize]) -> String {
    array
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if highlights.contains(&i) {
                format!("*{v}*")
            } else {
                v.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal session failed")
}
