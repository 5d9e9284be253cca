use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context};
use roomwalk_logic::fixtures::Fixture;
use roomwalk_logic::lint::lint_map;
use roomwalk_logic::validation::find_exit_route;
use roomwalk_logic::{load_map, save_map, validate_map, RoomId, Session};
use serde::Serialize;

use crate::play::{run_session, Outcome, READY};

/// Load, validate, and walk a map on stdin/stdout.
pub fn play(path: &Path) -> anyhow::Result<()> {
    let map = load_map(path).with_context(|| format!("cannot load {}", path.display()))?;
    let start = validate_map(&map).context("map is not playable")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", READY)?;

    let mut session = Session::new(&map, start);
    let outcome = run_session(&mut session, io::stdin().lock(), &mut out)?;
    log::info!("session ended ({:?}) after {} moves", outcome, session.moves());

    if outcome == Outcome::Lost {
        bail!(
            "walked into room #{} which does not exist in {}",
            session.current_id(),
            path.display()
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct WarningEntry {
    category: String,
    message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub path: String,
    pub rooms: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<RoomId>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningEntry>,
}

/// Build the report for a map file. Load failures are errors; an
/// unplayable map is a report with `valid == false`.
pub fn validation_report(path: &Path) -> anyhow::Result<ValidationReport> {
    let map = load_map(path).with_context(|| format!("cannot load {}", path.display()))?;

    let warnings: Vec<WarningEntry> = lint_map(&map)
        .into_iter()
        .map(|w| {
            log::warn!("{}", w);
            WarningEntry {
                category: w.category().to_string(),
                message: w.to_string(),
            }
        })
        .collect();

    let (valid, error_message, route) = match validate_map(&map) {
        Ok(start) => (true, None, find_exit_route(&map, start)),
        Err(e) => (false, Some(e.to_string()), None),
    };

    Ok(ValidationReport {
        path: path.display().to_string(),
        rooms: map.len(),
        valid,
        error_message,
        route,
        warnings,
    })
}

pub fn validate(path: &Path, json: bool) -> anyhow::Result<()> {
    let report = validation_report(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.valid {
        bail!(
            "{} is not playable: {}",
            report.path,
            report.error_message.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!("=== Map {} ({} rooms) ===", report.path, report.rooms);
    match (&report.route, &report.error_message) {
        (Some(route), _) => {
            let steps: Vec<String> = route.iter().map(|id| format!("#{id}")).collect();
            println!("  ✓ playable: {}", steps.join(" -> "));
        }
        (None, Some(e)) => println!("  ✗ {}", e),
        (None, None) => {}
    }
    for w in &report.warnings {
        println!("  ! {}: {}", w.category, w.message);
    }
    println!(
        "\n=== RESULT: {}, {} warning(s) ===",
        if report.valid { "playable" } else { "NOT playable" },
        report.warnings.len()
    );
}

pub fn fixture(name: Fixture, out: &Path) -> anyhow::Result<()> {
    let map = name.build();
    save_map(out, &map).with_context(|| format!("cannot write {} fixture", name))?;
    println!("Wrote {} map ({} rooms) to {}", name, map.len(), out.display());
    Ok(())
}
