//! Ranking engine
//!
//! Pure functions over a snapshot of competitors. Totals and ranks are always
//! recomputed from `scores`; nothing here mutates its input or fails.

use crate::level::Level;
use crate::types::{Competitor, EventId, LevelGroup, RankedCompetitor};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Sum of every recorded score. Missing events contribute nothing.
pub fn compute_total(scores: &BTreeMap<EventId, f64>) -> f64 {
    // Folding from +0.0 keeps empty and all-zero totals at +0.0
    scores.values().fold(0.0, |total, score| total + score)
}

/// Rank competitors by total score, highest first.
///
/// Ranks are 1-based and always distinct: competitors with equal totals keep
/// their input order and receive consecutive ranks (1, 2 rather than 1, 1).
pub fn rank(competitors: &[Competitor]) -> Vec<RankedCompetitor> {
    let mut totals: Vec<(f64, &Competitor)> = competitors
        .iter()
        .map(|competitor| (compute_total(&competitor.scores), competitor))
        .collect();

    // slice::sort_by is stable, which is the only tie-break
    totals.sort_by(|a, b| b.0.total_cmp(&a.0));

    debug!("Ranked {} competitors", totals.len());

    totals
        .into_iter()
        .zip(1u32..)
        .map(|((total_score, competitor), rank)| RankedCompetitor {
            competitor: competitor.clone(),
            total_score,
            rank,
        })
        .collect()
}

/// Distinct levels present, numbered levels ascending, then Elite
pub fn available_levels(competitors: &[Competitor]) -> Vec<Level> {
    competitors
        .iter()
        .map(|competitor| competitor.level.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Competitors at the given level, in input order. `None` means no filter.
pub fn filter_by_level(competitors: &[Competitor], level: Option<&Level>) -> Vec<Competitor> {
    match level {
        None => competitors.to_vec(),
        Some(level) => competitors
            .iter()
            .filter(|competitor| &competitor.level == level)
            .cloned()
            .collect(),
    }
}

/// Partition by level and rank each partition independently.
///
/// Groups are ordered like [`available_levels`]; ranks restart at 1 per group.
pub fn group_by_level_and_rank(competitors: &[Competitor]) -> Vec<LevelGroup> {
    let mut by_level: BTreeMap<Level, Vec<Competitor>> = BTreeMap::new();
    for competitor in competitors {
        by_level
            .entry(competitor.level.clone())
            .or_default()
            .push(competitor.clone());
    }

    debug!(
        "Grouped {} competitors into {} levels",
        competitors.len(),
        by_level.len()
    );

    by_level
        .into_iter()
        .map(|(level, members)| LevelGroup {
            competitors: rank(&members),
            level,
        })
        .collect()
}

/// The first `n` ranked competitors of every level group.
///
/// Groups left empty by the slice are omitted.
pub fn top_per_level(competitors: &[Competitor], n: usize) -> Vec<LevelGroup> {
    group_by_level_and_rank(competitors)
        .into_iter()
        .filter_map(|mut group| {
            group.competitors.truncate(n);
            (!group.competitors.is_empty()).then_some(group)
        })
        .collect()
}
