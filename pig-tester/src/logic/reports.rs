use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use super::TournamentSummary;

pub fn generate_console_report(out: &mut dyn Write, summary: &TournamentSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Round-Robin Results".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;
    writeln!(
        out,
        "Strategies: {} | Games per series: {} | Games played: {} | Seed: {}",
        summary.strategies,
        summary.config.games_per_series,
        summary.games_played,
        summary.config.seed
    )?;
    writeln!(out)?;

    for row in &summary.standings {
        writeln!(out, "{}", row.report_line())?;
    }

    writeln!(out)?;
    if let Some(best) = summary.best() {
        let pct = best.win_rate.unwrap_or_default() * 100.0;
        writeln!(
            out,
            "🏆 Best: {} ({pct:.1}% of {} games)",
            best.label.green().bold(),
            summary.games_per_strategy
        )?;
    } else {
        writeln!(out, "{}", "No games were played.".yellow())?;
    }
    writeln!(out, "⏱  Elapsed: {:?}", summary.elapsed)?;
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, summary: &TournamentSummary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, summary: &TournamentSummary) -> Result<()> {
    writeln!(out, "# Pig Round-Robin Results\n")?;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Strategies**: {}", summary.strategies)?;
    writeln!(
        out,
        "- **Games per series**: {}",
        summary.config.games_per_series
    )?;
    writeln!(out, "- **Games played**: {}", summary.games_played)?;
    writeln!(out, "- **Win threshold**: {}", summary.config.win_threshold)?;
    writeln!(out, "- **Seed**: {}", summary.config.seed)?;
    if let Some(best) = summary.best() {
        writeln!(out, "- **Best**: {}", best.label.trim())?;
    }
    writeln!(out)?;

    writeln!(out, "## Standings\n")?;
    writeln!(out, "| Strategy | Wins | Losses | Win rate |")?;
    writeln!(out, "|---|---:|---:|---:|")?;
    for row in &summary.standings {
        let rate = row
            .win_rate
            .map_or_else(|| "n/a".to_string(), |rate| format!("{:.1}%", rate * 100.0));
        writeln!(
            out,
            "| {} | {} | {} | {rate} |",
            row.label.trim(),
            row.wins,
            row.losses
        )?;
    }
    Ok(())
}

pub fn generate_csv_report(out: &mut dyn Write, summary: &TournamentSummary) -> Result<()> {
    writeln!(out, "index,label,threshold,wins,losses,win_rate")?;
    for row in &summary.standings {
        let threshold = row.threshold.map(|k| k.to_string()).unwrap_or_default();
        let rate = row
            .win_rate
            .map(|rate| format!("{rate:.4}"))
            .unwrap_or_default();
        writeln!(
            out,
            "{},\"{}\",{},{},{},{}",
            row.index,
            row.label.replace('"', "\"\""),
            threshold,
            row.wins,
            row.losses,
            rate
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pig_game::{Standing, TournamentConfig};
    use std::time::Duration;

    fn sample_summary() -> TournamentSummary {
        let row = |index: usize, k: u32, wins: u64| Standing {
            index,
            label: format!("staying at k = {k:>3}"),
            threshold: Some(k),
            wins,
            losses: 4 - wins,
            win_rate: Some(f64::from(u32::try_from(wins).unwrap()) / 4.0),
        };
        TournamentSummary {
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            config: TournamentConfig::default().with_games_per_series(2),
            strategies: 3,
            games_played: 6,
            games_per_strategy: 4,
            elapsed: Duration::from_millis(3),
            standings: vec![row(0, 1, 1), row(1, 20, 3), row(2, 100, 2)],
        }
    }

    fn render(f: fn(&mut dyn Write, &TournamentSummary) -> Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf, &sample_summary()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_report_lists_every_strategy() {
        let text = render(generate_console_report);
        assert!(text.contains("Wins, losses staying at k =   1: 1/4 (25.0%), 3/4 (75.0%)"));
        assert!(text.contains("Wins, losses staying at k =  20: 3/4 (75.0%), 1/4 (25.0%)"));
        assert!(text.contains("Wins, losses staying at k = 100: 2/4 (50.0%), 2/4 (50.0%)"));
        assert!(text.contains("Best"));
    }

    #[test]
    fn json_report_round_trips() {
        let text = render(generate_json_report);
        let parsed: TournamentSummary = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.standings.len(), 3);
        assert_eq!(parsed.games_played, 6);
    }

    #[test]
    fn markdown_report_renders_table() {
        let text = render(generate_markdown_report);
        assert!(text.contains("# Pig Round-Robin Results"));
        assert!(text.contains("| staying at k =  20 | 3 | 1 | 75.0% |"));
        assert!(text.contains("- **Best**: staying at k =  20"));
    }

    #[test]
    fn csv_report_has_header_and_rows() {
        let text = render(generate_csv_report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,label,threshold,wins,losses,win_rate");
        assert_eq!(lines[2], "1,\"staying at k =  20\",20,3,1,0.7500");
        assert_eq!(lines.len(), 4);
    }
}
