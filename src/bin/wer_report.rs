use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wer_rs::{build_report, Granularity, MeasureBuilder, MeasureConfig, Meta, Text};

#[path = "wer_report/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "wer_report/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GranularityChoice {
    Word,
    #[value(alias = "char")]
    Character,
}

impl GranularityChoice {
    fn granularity(self) -> Granularity {
        match self {
            Self::Word => Granularity::Word,
            Self::Character => Granularity::Character,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "wer_report")]
#[command(about = "Score hypothesis transcripts against reference transcripts")]
struct Args {
    /// Reference transcript, one sentence per line.
    #[arg(long, env = "WER_REPORT_TRUTH")]
    truth: PathBuf,
    /// Hypothesis transcript, one sentence per line.
    #[arg(long, env = "WER_REPORT_HYPOTHESIS")]
    hypothesis: PathBuf,
    /// Overrides the granularity found in --config.
    #[arg(long, env = "WER_REPORT_GRANULARITY", value_enum)]
    granularity: Option<GranularityChoice>,
    #[arg(long, env = "WER_REPORT_CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        long,
        env = "WER_REPORT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    output_format: OutputFormat,
    /// Written to stdout when absent.
    #[arg(long, env = "WER_REPORT_OUT")]
    out: Option<PathBuf>,
    #[arg(short, long, env = "WER_REPORT_VERBOSE", default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wer_rs=debug,wer_report=debug")
    } else {
        EnvFilter::new("wer_rs=info,wer_report=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let mut config = match args.config.as_ref() {
        Some(path) => MeasureConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => MeasureConfig::default(),
    };
    if let Some(choice) = args.granularity {
        config.granularity = choice.granularity();
    }

    let measurer = MeasureBuilder::from_config(&config)
        .map_err(|err| format!("Invalid transform configuration: {err}"))?
        .build();

    let truth = read_sentences(&args.truth)?;
    let hypothesis = read_sentences(&args.hypothesis)?;
    tracing::info!(
        truth = %args.truth.display(),
        hypothesis = %args.hypothesis.display(),
        truth_lines = truth.len(),
        hypothesis_lines = hypothesis.len(),
        "loaded transcripts"
    );

    let alignments = measurer
        .align_corpus(Text::Sentences(truth), Text::Sentences(hypothesis))
        .map_err(|err| format!("Failed to score transcripts: {err}"))?;

    let meta = Meta {
        generated_at: Utc::now().to_rfc3339(),
        granularity: measurer.granularity(),
        truth_pipeline: pipeline_names(measurer.truth_transform().names()),
        hypothesis_pipeline: pipeline_names(measurer.hypothesis_transform().names()),
        sentence_count: alignments.len(),
    };
    let report = build_report(meta, &alignments).map_err(|err| err.to_string())?;

    match (args.output_format, args.out.as_deref()) {
        (OutputFormat::Json, Some(path)) => {
            fs::write(path, json_report_formatter::render_report(&report)?).map_err(|err| {
                format!("Failed to write report file '{}': {err}", path.display())
            })?;
            tracing::info!(out = %path.display(), "wrote JSON report");
        }
        (OutputFormat::Json, None) => {
            print!("{}", json_report_formatter::render_report(&report)?);
        }
        (OutputFormat::Text, Some(path)) => {
            fs::write(path, text_report_formatter::render_report(&report)).map_err(|err| {
                format!("Failed to write report file '{}': {err}", path.display())
            })?;
            tracing::info!(out = %path.display(), "wrote text report");
        }
        (OutputFormat::Text, None) => {
            print!("{}", text_report_formatter::render_report(&report));
        }
    }
    Ok(())
}

fn read_sentences(path: &Path) -> Result<Vec<String>, String> {
    let data = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read transcript '{}': {err}", path.display()))?;
    Ok(data.lines().map(str::to_string).collect())
}

fn pipeline_names(names: Vec<&'static str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
