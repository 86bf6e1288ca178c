use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use wer_rs::{Granularity, MeasureBuilder, Metric, MetricsError, Text};

const DEFAULT_TOLERANCE: f64 = 1e-9;
const SUITE_NAME: &str = "reference_measures_match_known_values";

#[derive(Debug, Deserialize)]
struct ReferenceCase {
    id: String,
    metric: Metric,
    truth: CaseText,
    hypothesis: CaseText,
    #[serde(default)]
    expected: Option<ExpectedMeasure>,
    #[serde(default)]
    error: Option<ExpectedError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CaseText {
    Sentence(String),
    Sentences(Vec<String>),
}

impl From<CaseText> for Text {
    fn from(value: CaseText) -> Self {
        match value {
            CaseText::Sentence(s) => Text::Sentence(s),
            CaseText::Sentences(list) => Text::Sentences(list),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExpectedMeasure {
    rate: f64,
    hits: Option<usize>,
    substitutions: Option<usize>,
    deletions: Option<usize>,
    insertions: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ExpectedError {
    SentenceCountMismatch,
    EmptyReference,
}

fn main() {
    let args = Arguments::from_args();
    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let tolerance = env_f64("WER_IT_TOLERANCE", DEFAULT_TOLERANCE);

    let cases = match load_cases(&repo_root.join("test-data/measures.json")) {
        Ok(cases) => cases,
        Err(err) => {
            run_setup_failure(&args, err);
            return;
        }
    };
    if cases.is_empty() {
        run_setup_failure(&args, "No cases found in test-data/measures.json.".to_string());
        return;
    }

    let tests = cases
        .into_iter()
        .map(|case| {
            let test_name = format!("{SUITE_NAME}::{}::{}", case.metric.as_str(), case.id);
            Trial::test(test_name, move || {
                run_reference_case(case, tolerance).map_err(Failed::from)
            })
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}

fn run_setup_failure(args: &Arguments, message: String) {
    let test = Trial::test(format!("{SUITE_NAME}::setup"), move || {
        Err(Failed::from(message))
    });
    libtest_mimic::run(args, vec![test]).exit();
}

fn granularity_for(metric: Metric) -> Granularity {
    match metric {
        Metric::Cer => Granularity::Character,
        Metric::Wer | Metric::Mer | Metric::Wil | Metric::Wip => Granularity::Word,
    }
}

fn run_reference_case(case: ReferenceCase, tolerance: f64) -> Result<(), String> {
    let measurer = MeasureBuilder::new(granularity_for(case.metric)).build();
    let result = measurer.measures(case.truth, case.hypothesis);

    match (case.error, case.expected) {
        (Some(expected), _) => match (expected, result) {
            (ExpectedError::SentenceCountMismatch, Err(MetricsError::SentenceCountMismatch { .. }))
            | (ExpectedError::EmptyReference, Err(MetricsError::EmptyReference)) => Ok(()),
            (expected, other) => Err(format!(
                "{}: expected {expected:?}, got {other:?}",
                case.id
            )),
        },
        (None, Some(expected)) => {
            let measures = result.map_err(|err| format!("{}: measures() failed: {err}", case.id))?;
            let rate = measures.rate(case.metric);
            if (rate - expected.rate).abs() > tolerance {
                return Err(format!(
                    "{}: {} mismatch (expected {}, got {rate})",
                    case.id,
                    case.metric.as_str(),
                    expected.rate
                ));
            }
            let counts = measures.counts;
            compare_count(&case.id, "hits", expected.hits, counts.hits)?;
            compare_count(&case.id, "substitutions", expected.substitutions, counts.substitutions)?;
            compare_count(&case.id, "deletions", expected.deletions, counts.deletions)?;
            compare_count(&case.id, "insertions", expected.insertions, counts.insertions)
        }
        (None, None) => Err(format!("{}: fixture has neither expected nor error", case.id)),
    }
}

fn compare_count(id: &str, name: &str, expected: Option<usize>, observed: usize) -> Result<(), String> {
    match expected {
        Some(expected) if expected != observed => Err(format!(
            "{id}: {name} mismatch (expected {expected}, got {observed})"
        )),
        _ => Ok(()),
    }
}

fn load_cases(path: &Path) -> Result<Vec<ReferenceCase>, String> {
    if !path.exists() {
        return Err(format!("Missing measures fixture JSON: {}", path.display()));
    }
    let file = File::open(path)
        .map_err(|err| format!("Failed to open fixture '{}': {err}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format!("Failed to parse fixture '{}': {err}", path.display()))
}

fn env_f64(name: &str, default: f64) -> f64 {
    match env::var(name) {
        Ok(value) => value.trim().parse::<f64>().unwrap_or_else(|err| {
            panic!(
                "Invalid value for {}='{}' (expected f64): {}",
                name, value, err
            )
        }),
        Err(_) => default,
    }
}
