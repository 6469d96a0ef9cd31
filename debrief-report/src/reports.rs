use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use debrief_game::StatisticsScreen;

/// Width of the dotted label column in console output.
const LABEL_WIDTH: usize = 40;
/// Width of the right-aligned value column in console output.
const VALUE_WIDTH: usize = 16;

pub fn generate_console_report(out: &mut dyn Write, screen: &StatisticsScreen) -> Result<()> {
    writeln!(out)?;
    for line in screen.title.lines() {
        writeln!(out, "{}", line.bright_cyan().bold())?;
    }
    writeln!(out, "{}", "=".repeat(LABEL_WIDTH + 1 + VALUE_WIDTH).cyan())?;

    for row in &screen.rows {
        writeln!(out, "{} {}", dotted_label(&row.label), aligned_value(&row.value).bold())?;
    }

    writeln!(out)?;
    writeln!(out, "[ {} ]", screen.button.green())?;
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, screen: &StatisticsScreen) -> Result<()> {
    let json_output = serde_json::to_string_pretty(screen)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, screen: &StatisticsScreen) -> Result<()> {
    let mut title = screen.title.lines();
    if let Some(heading) = title.next() {
        writeln!(out, "# {heading}\n")?;
    }
    for line in title {
        writeln!(out, "_{line}_\n")?;
    }

    writeln!(out, "## Statistics\n")?;
    writeln!(out, "| Statistic | Value |")?;
    writeln!(out, "| --- | --- |")?;
    for row in &screen.rows {
        writeln!(
            out,
            "| {} | {} |",
            escape_cell(&row.label),
            escape_cell(&row.value)
        )?;
    }
    Ok(())
}

fn dotted_label(label: &str) -> String {
    format!("{:.<width$}", format!("{label} "), width = LABEL_WIDTH)
}

fn aligned_value(value: &str) -> String {
    format!("{value:>width$}", width = VALUE_WIDTH)
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
