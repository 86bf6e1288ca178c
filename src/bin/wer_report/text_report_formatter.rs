use std::fmt::Write;

use wer_rs::{EditTag, Granularity, Metric, Report, SentenceReport};

pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    let separator = separator(report);
    for sentence in &report.sentences {
        write_sentence(&mut out, sentence, separator);
    }

    let aggregates = &report.aggregates;
    let counts = &aggregates.counts;
    let _ = writeln!(out, "=== {} sentences ===", report.meta.sentence_count);
    let _ = writeln!(
        out,
        "{}: {:.4}",
        aggregates.error_rate_metric.as_str(),
        aggregates.error_rate
    );
    for metric in [Metric::Mer, Metric::Wil, Metric::Wip] {
        let _ = writeln!(out, "{}: {:.4}", metric.as_str(), aggregates.rate(metric));
    }
    let _ = writeln!(
        out,
        "hits={} substitutions={} deletions={} insertions={}",
        counts.hits, counts.substitutions, counts.deletions, counts.insertions
    );
    out
}

fn separator(report: &Report) -> &'static str {
    match report.meta.granularity {
        Granularity::Word => " ",
        Granularity::Character => "",
    }
}

fn write_sentence(out: &mut String, sentence: &SentenceReport, separator: &str) {
    let rate = sentence
        .error_rate
        .map(|value| format!("{value:.4}"))
        .unwrap_or_else(|| "n/a".to_string());
    let _ = writeln!(out, "sentence {} (error rate {rate})", sentence.index);
    let _ = writeln!(out, "REF: {}", sentence.reference.join(separator));
    let _ = writeln!(out, "HYP: {}", sentence.hypothesis.join(separator));

    let mut marks = Vec::new();
    for edit in &sentence.edits {
        let mark = match edit.tag {
            EditTag::Equal => continue,
            EditTag::Substitute => 'S',
            EditTag::Delete => 'D',
            EditTag::Insert => 'I',
        };
        marks.push(format!(
            "{mark} ref[{}..{}] hyp[{}..{}]",
            edit.ref_start, edit.ref_end, edit.hyp_start, edit.hyp_end
        ));
    }
    if !marks.is_empty() {
        let _ = writeln!(out, "     {}", marks.join(", "));
    }
    let _ = writeln!(out);
}
