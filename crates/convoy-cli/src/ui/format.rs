//! Size/duration formatting and the end-of-run summary table.

use console::Term;
use convoy_pipeline::ArtifactReport;
use owo_colors::OwoColorize;
use std::time::Duration;

/// Format a byte count with the most appropriate unit.
///
/// ```
/// use convoy_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;
    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format a duration with the most appropriate unit.
///
/// ```
/// use std::time::Duration;
/// use convoy_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the per-artifact summary table and totals to stderr.
pub fn print_run_summary(artifacts: &[ArtifactReport]) {
    let term = Term::stderr();
    let width = (term.size().1 as usize).min(80);

    eprintln!("\n{}", "Build Summary".bold().underline());
    eprintln!("{}", "─".repeat(width));

    for report in artifacts {
        eprintln!(
            "  {} {} {} {} {}",
            "▸".blue(),
            report.name.bright_white().bold(),
            report.output.display().to_string().dimmed(),
            format_size(report.size).dimmed(),
            format!("({})", format_duration(report.duration)).dimmed()
        );
    }

    eprintln!("{}", "─".repeat(width));

    let total_size: u64 = artifacts.iter().map(|r| r.size).sum();
    let total_time: Duration = artifacts.iter().map(|r| r.duration).sum();
    eprintln!(
        "  {} {} artifacts, {} in {}",
        "Total:".bold(),
        artifacts.len(),
        format_size(total_size).green(),
        format_duration(total_time).green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn sizes_pick_the_right_unit() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(2_147_483_648), "2.00 GB");
    }

    #[test]
    fn durations_pick_the_right_unit() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn summary_handles_empty_and_populated_runs() {
        print_run_summary(&[]);
        print_run_summary(&[ArtifactReport {
            name: "server".to_string(),
            output: PathBuf::from("dist/server/index.js"),
            size: 15_234,
            duration: Duration::from_millis(450),
        }]);
    }
}
