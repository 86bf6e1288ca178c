use wer_rs::Report;

/// Pretty-printed report with a trailing newline.
pub fn render_report(report: &Report) -> Result<String, String> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(|err| format!("Failed to serialize report JSON: {err}"))?;
    json.push('\n');
    Ok(json)
}
