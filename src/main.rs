//! Tubelink - download link builder
//!
//! Resolves a pasted video URL and prints the backend links to fetch for a
//! chosen video/audio format pair, optionally with subtitles.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::warn;
use tubelink::extractor::{self, FormatDescriptor, VideoMeta};
use tubelink::links::{FormatSlot, SubtitleRequest};
use tubelink::utils::{self, AppSettings};

#[derive(Parser)]
#[command(name = "tubelink", version, about = "Build download links for video URLs")]
struct Cli {
    /// Service base URL (overrides settings file and environment)
    #[arg(long, global = true)]
    base: Option<String>,

    /// Settings file to read instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a URL and print its video ID
    Resolve {
        input: String,
        #[arg(long)]
        json: bool,
    },
    /// Recognize a full watch page URL; exits with status 1 if it is not one
    Probe { input: String },
    /// Print the links to trigger, subtitle link first
    Link(LinkArgs),
    /// Summarize a saved metadata document
    Info { meta: PathBuf },
    /// Abbreviate a count, e.g. 1500 -> 1.5K
    Abbreviate { count: u128 },
}

#[derive(Args)]
struct LinkArgs {
    input: String,

    /// Video format ID
    #[arg(long)]
    video: Option<String>,

    /// Audio format ID
    #[arg(long)]
    audio: Option<String>,

    /// Metadata document to look format IDs up in
    #[arg(long)]
    meta: Option<PathBuf>,

    /// Subtitle language code, or live_chat
    #[arg(long)]
    subs: Option<String>,

    /// Subtitle container, or embed to mux into the media stream
    #[arg(long, default_value = "vtt", requires = "subs")]
    sub_format: String,

    /// File name hint passed to the backend
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match cli.command {
        Command::Resolve { input, json } => {
            let reference = extractor::resolve(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reference)?);
            } else {
                println!("{}\n{}", reference.raw, reference.id);
            }
        }
        Command::Probe { input } => match extractor::probe(&input) {
            Some(reference) => println!("{}", reference.raw),
            None => return Ok(ExitCode::FAILURE),
        },
        Command::Link(args) => {
            let settings = load_settings(cli.base, cli.config.as_deref())?;
            run_link(&settings, args)?;
        }
        Command::Info { meta } => print_info(&load_meta(&meta)?),
        Command::Abbreviate { count } => println!("{}", utils::abbreviate(count)),
    }

    Ok(ExitCode::SUCCESS)
}

fn load_settings(base: Option<String>, config: Option<&Path>) -> Result<AppSettings> {
    let settings = AppSettings::load(config)
        .context("Failed to load settings")?
        .with_base_override(base);
    settings.validate()?;
    Ok(settings)
}

fn load_meta(path: &Path) -> Result<VideoMeta> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse metadata document")
}

fn run_link(settings: &AppSettings, args: LinkArgs) -> Result<()> {
    let reference = extractor::resolve(&args.input)?;
    let meta = args.meta.as_deref().map(load_meta).transpose()?;

    let video_from = format_slot(args.video, meta.as_ref())?;
    let audio_from = format_slot(args.audio, meta.as_ref())?;

    let subtitles = args
        .subs
        .map(|language| SubtitleRequest::new(language, args.sub_format));
    if let Some(request) = &subtitles {
        if !request.is_served() {
            warn!(
                "Subtitle format {} for {} is not served by the backend",
                request.effective_format(),
                request.language
            );
        }
    }

    let links = settings.link_builder()?;
    let mut plan = links.build_download(&reference.id, &video_from, &audio_from, subtitles.as_ref())?;
    if let Some(title) = args.title.as_deref() {
        plan.with_title(title);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        for url in plan.urls() {
            println!("{}", url);
        }
    }
    Ok(())
}

/// Turn a format ID flag into a picker slot, checking it against the catalog if one was given
fn format_slot(id: Option<String>, meta: Option<&VideoMeta>) -> Result<FormatSlot> {
    let Some(id) = id else {
        return Ok(FormatSlot::None);
    };

    let format = match meta {
        Some(meta) => match meta.find_format(&id) {
            Some(format) => format.clone(),
            None => bail!("Format {} is not listed in the metadata document", id),
        },
        None => FormatDescriptor {
            id,
            note: String::new(),
            audio: None,
            video: None,
        },
    };
    Ok(FormatSlot::Format(format))
}

fn print_info(meta: &VideoMeta) {
    println!("{}", meta.title);
    println!(
        "by {} ({} subscribers)",
        utils::to_title_case(&meta.author.name),
        utils::abbreviate(meta.author.subscribers)
    );
    println!(
        "{} views, {} likes",
        utils::abbreviate(meta.views),
        utils::abbreviate(meta.likes)
    );

    println!("\nVideo formats:");
    for format in meta.video_formats() {
        println!("  {:>6}  {:<12} {}", format.id, utils::to_title_case(&format.note), format.label());
    }

    println!("\nAudio formats:");
    for format in meta.audio_formats() {
        println!("  {:>6}  {:<12} {}", format.id, utils::to_title_case(&format.note), format.label());
    }

    if !meta.subs.is_empty() {
        println!("\nSubtitles:");
        for (code, name) in &meta.subs {
            println!("  {:<10} {}", code, name);
        }
    }
}
