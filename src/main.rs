use std::io::{self, BufRead};

use anyhow::{Context, Result};

use nanolog::config::Config;
use nanolog::{diagnostics, Severity};

/// Split "<severity>: <message>"; lines without a known prefix are logged as info
fn parse_line(line: &str) -> (Severity, &str) {
    if let Some((prefix, rest)) = line.split_once(':') {
        if let Ok(severity) = prefix.parse::<Severity>() {
            return (severity, rest.trim_start());
        }
    }
    (Severity::Info, line)
}

fn main() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    diagnostics::init(&config.diagnostics_filter).context("Failed to initialize diagnostics")?;

    let built = config.build_controller();
    let controller = built.controller;

    if let Ok(tag) = std::env::var("NANOLOG_TAG") {
        controller.register(tag);
    }

    tracing::debug!(lanes = controller.lane_count(), "Controller ready");

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let (severity, message) = parse_line(&line);
        let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        controller.log_message(message, severity, file!(), "main", line_number);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_severity() {
        assert_eq!(parse_line("warning: disk low"), (Severity::Warning, "disk low"));
        assert_eq!(parse_line("ERROR:boom"), (Severity::Error, "boom"));
    }

    #[test]
    fn test_parse_line_without_severity() {
        assert_eq!(parse_line("plain text"), (Severity::Info, "plain text"));
        assert_eq!(
            parse_line("note: not a level"),
            (Severity::Info, "note: not a level")
        );
    }
}
