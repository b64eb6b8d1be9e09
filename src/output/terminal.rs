// Colored terminal output for the survey charts.
//
// Each chart prints as a horizontal bar list: label, bar scaled to the
// largest count, count and share of the total. The main.rs commands
// delegate here.

use colored::Colorize;

use crate::db::models::SurveyResponse;
use crate::survey::distribution::{total, CategoryCount};
use crate::survey::{Dashboard, LikertChart};
use crate::topics::aggregate::ImpactSummary;
use crate::topics::classifier::{MatchSource, TopicMatch};
use crate::topics::lexicon::Lexicon;

const BAR_WIDTH: usize = 30;

/// Display the impact topic counts.
pub fn display_impacts(summary: &ImpactSummary) {
    println!(
        "\n{}",
        format!(
            "=== Impact Topics ({} answers analyzed) ===",
            summary.responses_analyzed
        )
        .bold()
    );
    println!();

    if summary.is_empty() {
        println!("  {}", "No data available.".dimmed());
        return;
    }

    let max = summary.topics.iter().map(|t| t.count).max().unwrap_or(0);
    for (i, topic) in summary.topics.iter().enumerate() {
        let share = percent(topic.count, summary.responses_analyzed);
        println!(
            "  {:>2}. {:<30} {} {:>4}  {}",
            i + 1,
            topic.name.bold(),
            bar(topic.count, max).bright_magenta(),
            topic.count,
            format!("{share:.0}%").dimmed()
        );
    }

    println!();
    println!(
        "  {} of {} answers matched at least one topic",
        summary.responses_matched, summary.responses_analyzed
    );
}

/// Display one category distribution (schedule pie or Likert bars).
pub fn display_distribution(title: &str, counts: &[CategoryCount]) {
    let sum = total(counts);
    println!("\n{}", format!("=== {title} ({sum} answers) ===").bold());
    println!();

    if counts.is_empty() {
        println!("  {}", "No data available.".dimmed());
        return;
    }

    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    for count in counts {
        println!(
            "  {:<24} {} {:>4}  {}",
            count.label,
            bar(count.count, max).bright_blue(),
            count.count,
            format!("{:.0}%", percent(count.count, sum)).dimmed()
        );
    }
}

pub fn display_likert(chart: &LikertChart) {
    display_distribution(&chart.title, &chart.counts);
}

/// Display every chart of the dashboard snapshot.
pub fn display_dashboard(dashboard: &Dashboard) {
    println!(
        "{}",
        format!(
            "Dashboard de Análise da Escala 6x1: {} responses",
            dashboard.total_responses
        )
        .bold()
    );
    display_distribution("Distribuição da Escala 6x1", &dashboard.schedule);
    for chart in &dashboard.likert {
        display_likert(chart);
    }
    display_impacts(&dashboard.impacts);
}

/// Display the topics matched by one answer.
pub fn display_match(text: &str, result: &TopicMatch) {
    println!("\n  \"{}\"", super::truncate_chars(text, 120).dimmed());
    println!();

    if result.is_empty() {
        println!("  {}", "No predefined topic matched.".yellow());
        return;
    }

    for hit in &result.hits {
        let via = match hit.source {
            MatchSource::Token => "token",
            MatchSource::Substring => "substring",
        };
        println!(
            "  {} {:<30} {} {}",
            "+".green(),
            hit.name.bold(),
            format!("[{via}]").dimmed(),
            hit.keyword
        );
    }
}

/// Display stored responses, one block per row.
pub fn display_responses(responses: &[SurveyResponse]) {
    println!(
        "\n{}",
        format!("=== Responses ({}) ===", responses.len()).bold()
    );

    if responses.is_empty() {
        println!("\n  {}", "No data available.".dimmed());
        return;
    }

    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    for response in responses {
        println!();
        println!(
            "  {} Escala6x1: {}",
            format!("#{}", response.id).bold(),
            show(&response.escala_6x1)
        );
        println!(
            "     família: {} | física: {} | mental: {}",
            show(&response.impacto_vida_familiar),
            show(&response.impacto_saude_fisica),
            show(&response.impacto_saude_mental)
        );
        if let Some(text) = response.impactos.as_deref().filter(|t| !t.trim().is_empty()) {
            println!("     {}", super::truncate_chars(text, 100).dimmed());
        }
    }
}

/// Display the topics of a lexicon.
pub fn display_lexicon(lexicon: &Lexicon) {
    println!(
        "\n{}",
        format!("=== Lexicon ({} topics) ===", lexicon.len()).bold()
    );
    println!();
    for topic in lexicon.topics() {
        println!(
            "  {:<28} {:<30} {:>3} keywords",
            topic.key().dimmed(),
            topic.name(),
            topic.keywords().len()
        );
    }
}

fn bar(count: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
    };
    format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10, 10).matches('=').count(), BAR_WIDTH);
        assert_eq!(bar(5, 10).matches('=').count(), BAR_WIDTH / 2);
        assert_eq!(bar(0, 0).matches('=').count(), 0);
    }

    #[test]
    fn test_percent_handles_zero_total() {
        assert_eq!(percent(3, 0), 0.0);
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
