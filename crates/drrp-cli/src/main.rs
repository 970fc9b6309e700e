mod display;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use drrp_core::{DutyTypeResult, EngineConfig, PatternVariant, RoleMatch, Side};
use drrp_engine::{Engine, PresentActors};
use tracing::{Level, debug, info};

#[derive(Parser)]
#[command(name = "drrp")]
#[command(about = "Find duties, rights, responsibilities and powers in legislative text")]
#[command(version)]
struct Cli {
    /// JSON engine config; flags below override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Window documents longer than this many chars
    #[arg(long, global = true, env = "DRRP_WINDOW_THRESHOLD")]
    window_threshold: Option<usize>,

    /// Use the unbounded government patterns
    #[arg(long, global = true)]
    legacy_patterns: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one provision
    Classify {
        /// Provision text file (stdin when omitted)
        file: Option<PathBuf>,

        /// Law name for exported records
        #[arg(long, default_value = "")]
        law: String,

        /// Provision reference for exported records
        #[arg(long, default_value = "")]
        provision: String,

        /// Governed actor label already known for the provision (repeatable)
        #[arg(long = "governed")]
        governed: Vec<String>,

        /// Government actor label already known for the provision (repeatable)
        #[arg(long = "government")]
        government: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Card)]
        format: Format,

        /// Output file (required for ipc)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Confidence below which matches are flagged; annotations keep only those
        #[arg(long)]
        review_below: Option<f32>,
    },
    /// List the actors mentioned in a text
    Actors {
        /// Text file (stdin when omitted)
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = SideArg::Both)]
        side: SideArg,
    },
    /// List catalogue labels in evaluation order
    Catalogue {
        #[arg(long, value_enum, default_value_t = SideArg::Both)]
        side: SideArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Card,
    Json,
    Annotations,
    Ipc,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Government,
    Governed,
    Both,
}

impl SideArg {
    fn sides(self) -> &'static [Side] {
        match self {
            Self::Government => &[Side::Government],
            Self::Governed => &[Side::Governed],
            Self::Both => &[Side::Government, Side::Governed],
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    info!("drrp v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let engine = Engine::new(config);

    match cli.command {
        Commands::Classify {
            file,
            law,
            provision,
            governed,
            government,
            format,
            out,
            review_below,
        } => {
            let bytes = read_input(file.as_deref())?;
            let present = (!governed.is_empty() || !government.is_empty())
                .then(|| PresentActors { governed, government });
            let result = engine.classify_bytes(&bytes, present.as_ref());
            debug!(matches = result.all_matches().count(), "classified");

            match format {
                Format::Card => {
                    let name = card_name(&law, &provision, file.as_deref());
                    display::print_card(&name, &result, review_below);
                }
                Format::Json => {
                    let json = serde_json::to_string_pretty(&result)?;
                    emit(out.as_deref(), &json)?;
                }
                Format::Annotations => {
                    let scraped_at = chrono::Utc::now().to_rfc3339();
                    let matches: Vec<&RoleMatch> = match review_below {
                        Some(t) => result.below_confidence(t).collect(),
                        None => result.all_matches().collect(),
                    };
                    let records = drrp_core::drrp::annotations(&law, &provision, matches, &scraped_at);
                    let json = serde_json::to_string_pretty(&records)?;
                    emit(out.as_deref(), &json)?;
                }
                Format::Ipc => {
                    let Some(path) = out else {
                        bail!("--format ipc needs --out PATH");
                    };
                    let rows = write_ipc(&path, &law, &provision, &result)?;
                    println!("Wrote {rows} matches to {}", path.display());
                }
            }
        }
        Commands::Actors { file, side } => {
            let bytes = read_input(file.as_deref())?;
            let text = String::from_utf8_lossy(&bytes);
            for side in side.sides() {
                let labels = engine.extract_actors(&text, *side);
                display::print_labels(side.as_str(), &labels);
            }
        }
        Commands::Catalogue { side } => {
            for side in side.sides() {
                let labels: Vec<String> = engine
                    .catalogue(*side)
                    .entries()
                    .iter()
                    .map(|e| e.label.clone())
                    .collect();
                display::print_labels(side.as_str(), &labels);
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(n) = cli.window_threshold {
        config.window_threshold = n;
    }
    if cli.legacy_patterns {
        config.pattern_variant = PatternVariant::Legacy;
    }
    config.validate()?;
    Ok(config)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => std::fs::write(path, format!("{text}\n"))
            .with_context(|| format!("writing {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")?;
            Ok(())
        }
    }
}

fn write_ipc(path: &Path, law: &str, provision: &str, result: &DutyTypeResult) -> anyhow::Result<usize> {
    let batch = drrp_core::schema::matches_to_batch(law, provision, result.all_matches())?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = arrow::ipc::writer::FileWriter::try_new(file, &batch.schema())?;
    writer.write(&batch)?;
    writer.finish()?;
    Ok(batch.num_rows())
}

fn card_name(law: &str, provision: &str, file: Option<&Path>) -> String {
    match (law.is_empty(), provision.is_empty()) {
        (false, false) => format!("{law} {provision}"),
        (false, true) => law.to_string(),
        (true, false) => provision.to_string(),
        (true, true) => file
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string()),
    }
}
