//! Standings output: score formatting, terminal tables and JSON reports.

use crate::events::{Event, Section};
use crate::level::Level;
use crate::ranking::CompetitionStats;
use crate::types::{LevelGroup, RankedCompetitor};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

/// Scores are always shown with two decimals
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Render ranked competitors as a fixed-width table.
pub fn render_table(ranked: &[RankedCompetitor], events: &[Event]) -> String {
    let name_width = ranked
        .iter()
        .map(|r| r.competitor.name.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Name"
    let team_width = ranked
        .iter()
        .map(|r| r.competitor.team.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();

    // Header
    let _ = write!(
        out,
        "{:>4} | {:<name_width$} | {:<team_width$} | {:<8}",
        "Rank", "Name", "Team", "Level"
    );
    for event in events {
        let _ = write!(out, " | {:>5}", event.short_name);
    }
    let _ = writeln!(out, " | {:>6}", "Total");

    // Rows
    for r in ranked {
        let _ = write!(
            out,
            "{:>4} | {:<name_width$} | {:<team_width$} | {:<8}",
            r.rank,
            r.competitor.name,
            r.competitor.team,
            r.competitor.level.to_string()
        );
        for event in events {
            let _ = write!(
                out,
                " | {:>5}",
                format_score(r.competitor.score_for(&event.id))
            );
        }
        let _ = writeln!(out, " | {:>6}", format_score(r.total_score));
    }

    out
}

/// Render one table per level, each with its own ranking.
pub fn render_level_groups(groups: &[LevelGroup], events: &[Event]) -> String {
    let mut out = String::new();
    for group in groups {
        let count = group.competitors.len();
        let _ = writeln!(
            out,
            "{} ({} competitor{})",
            group.level.to_string().to_uppercase(),
            count,
            if count == 1 { "" } else { "s" }
        );
        out.push_str(&render_table(&group.competitors, events));
        out.push('\n');
    }
    out
}

/// Header shared by every JSON report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub competition: String,
    pub section: &'static str,
    pub level_filter: String,
    pub generated_at: DateTime<Utc>,
    pub statistics: CompetitionStats,
}

impl ReportMetadata {
    pub fn new(
        competition: &str,
        section: Section,
        level_filter: Option<&Level>,
        statistics: CompetitionStats,
    ) -> Self {
        Self {
            competition: competition.to_string(),
            section: section.display_name(),
            level_filter: level_filter
                .map(|l| l.to_string())
                .unwrap_or_else(|| "All Levels".to_string()),
            generated_at: crate::utils::current_timestamp(),
            statistics,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportResults {
    Ranked(Vec<RankedCompetitor>),
    ByLevel(Vec<LevelGroup>),
}

/// A complete standings report
#[derive(Debug, Serialize)]
pub struct StandingsReport {
    pub metadata: ReportMetadata,
    pub events: Vec<Event>,
    pub results: ReportResults,
}

impl StandingsReport {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
