//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use gym_scoreboard::{Competition, Competitor, Level, RankedCompetitor, Section};

/// Build a competitor with a fixed id and the given scores
pub fn competitor(id: &str, level: &str, scores: &[(&str, f64)]) -> Competitor {
    Competitor {
        id: id.to_string(),
        name: format!("Gymnast {}", id),
        team: "Test Club".to_string(),
        level: Level::parse(level),
        scores: scores
            .iter()
            .map(|(event, score)| (event.to_string(), *score))
            .collect(),
    }
}

/// A women's competition spread across several levels, with a tie and
/// unscored routines
pub fn regional_meet() -> Competition {
    let competitors = vec![
        competitor(
            "w1",
            "Level 10",
            &[
                ("vault", 9.5),
                ("uneven-bars", 9.25),
                ("balance-beam", 9.0),
                ("floor-exercise", 9.5),
            ],
        ),
        competitor("w2", "Level 2", &[("vault", 8.0), ("floor-exercise", 8.5)]),
        competitor(
            "w3",
            "Elite",
            &[
                ("vault", 9.75),
                ("uneven-bars", 9.5),
                ("balance-beam", 9.5),
                ("floor-exercise", 9.75),
            ],
        ),
        // Ties with w2 on 16.5
        competitor("w4", "Level 2", &[("vault", 8.5), ("floor-exercise", 8.0)]),
        competitor(
            "w5",
            "Level 10",
            &[
                ("vault", 9.5),
                ("uneven-bars", 9.5),
                ("balance-beam", 9.25),
                ("floor-exercise", 9.5),
            ],
        ),
        competitor("w6", "Level 2", &[]),
        competitor("w7", "Level 1", &[("vault", 7.5)]),
    ];

    Competition {
        id: "regional-2024".to_string(),
        name: "Regional Championships".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 4, 13).expect("valid date"),
        section: Section::Women,
        competitors,
    }
}

/// Competitor ids in output order
pub fn ids(ranked: &[RankedCompetitor]) -> Vec<&str> {
    ranked.iter().map(|r| r.competitor.id.as_str()).collect()
}
