//! Answer rendering for the terminal.

use samarth_protocol::{AnswerResult, ChartKind, ChartSpec, ChartValue};

/// Human-readable block for one answer.
pub fn render_text(question: &str, answer: &AnswerResult) -> String {
    let mut out = format!("Q: {question}\n{}\n", answer.text);
    if let Some(chart) = &answer.chart {
        out.push_str(&render_chart(chart));
        out.push('\n');
    }
    if !answer.sources.is_empty() {
        out.push_str("Data sources:\n");
        for source in &answer.sources {
            out.push_str(&format!("- {source}\n"));
        }
    }
    out
}

/// One JSON object per line.
pub fn render_json(answer: &AnswerResult) -> serde_json::Result<String> {
    serde_json::to_string(answer)
}

fn render_chart(chart: &ChartSpec) -> String {
    let kind = match chart.kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
        ChartKind::Scatter => "scatter",
    };
    let points: Vec<String> = chart
        .x
        .iter()
        .zip(&chart.y)
        .enumerate()
        .map(|(i, (x, y))| {
            let point = match x {
                ChartValue::Number(n) => format!("{n}: {y:.0}"),
                ChartValue::Label(l) => format!("{l}: {y:.0}"),
            };
            match chart.labels.get(i).filter(|l| !l.is_empty()) {
                Some(label) => format!("{point} ({label})"),
                None => point,
            }
        })
        .collect();
    format!(
        "[{kind} chart] {} ({} vs {}): {}",
        chart.title,
        chart.y_label,
        chart.x_label,
        points.join(", ")
    )
}
