use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::framework::Framework;
use crate::scoring::ScoreResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format an optional score to one decimal, "-" when undefined
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.1}", s),
        None => "-".to_string(),
    }
}

/// Render a score result as a category table with an overall line.
///
/// One line per category: label, score, and `answered/total` completeness.
/// The tier label is colored by its band position (lowest band red, highest
/// green, anything between yellow).
pub fn format_result(result: &ScoreResult, framework: &Framework, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let header = format!("{} ({})", framework.name, framework.edition);
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }
    lines.push(String::new());

    let label_width = result
        .categories
        .values()
        .map(|c| c.label.len())
        .max()
        .unwrap_or(0);

    // Framework order, not map order, so the table reads like the source
    for category in &framework.categories {
        let Some(entry) = result.categories.get(&category.id) else {
            continue;
        };
        let score_str = format!("{:>6}", format_score(entry.score));
        let completeness = format!("({}/{} answered)", entry.answered, entry.total);

        if use_colors && entry.score.is_some() {
            lines.push(format!(
                "  {:<width$}  {}  {}",
                entry.label,
                score_str.bold(),
                completeness.dimmed(),
                width = label_width
            ));
        } else {
            lines.push(format!(
                "  {:<width$}  {}  {}",
                entry.label,
                score_str,
                completeness,
                width = label_width
            ));
        }
    }

    lines.push(String::new());
    lines.push(overall_line(result, framework, use_colors));
    lines.join("\n")
}

fn overall_line(result: &ScoreResult, framework: &Framework, use_colors: bool) -> String {
    let (Some(overall), Some(tier)) = (result.overall, result.tier.as_deref()) else {
        // Also reached when only zero-weight categories were answered, so
        // do not claim nothing was answered.
        return "Overall: not assessed (no weighted category answered)".to_string();
    };

    if !use_colors {
        return format!("Overall: {:.1} - {}", overall, tier);
    }

    let band_index = framework.tiers.iter().position(|b| b.label == tier);
    let colored_tier = match band_index {
        Some(0) => tier.red().bold().to_string(),
        Some(i) if i + 1 == framework.tiers.len() => tier.green().bold().to_string(),
        _ => tier.yellow().bold().to_string(),
    };
    format!("Overall: {} - {}", format!("{:.1}", overall).bold(), colored_tier)
}
