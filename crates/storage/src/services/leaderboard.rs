use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::dto::dashboard::DashboardStats;
use crate::dto::leaderboard::{LeaderboardEntry, LeaderboardResponse, LeaderboardSummary};
use crate::models::LiftRecord;

const PODIUM_SIZE: usize = 3;

struct LifterTotals<'a> {
    name: &'a str,
    total_weight: Decimal,
    lifts_count: usize,
}

/// Rank lifters by total weight lifted.
///
/// Lifts are grouped by exact `name` (case and whitespace significant), each
/// group's total is the sum of `weight * sets * reps`, and groups are sorted
/// by total descending. Equal totals keep the order in which their names
/// first appear in `lifts`. Ranks are consecutive from 1, never shared.
pub fn compute_leaderboard(lifts: &[LiftRecord]) -> Vec<LeaderboardEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<LifterTotals<'_>> = Vec::new();

    for lift in lifts {
        let volume = lift.volume();
        match positions.get(lift.name.as_str()) {
            Some(&index) => {
                let group = &mut groups[index];
                group.total_weight = group.total_weight.saturating_add(volume);
                group.lifts_count += 1;
            }
            None => {
                positions.insert(&lift.name, groups.len());
                groups.push(LifterTotals {
                    name: &lift.name,
                    total_weight: volume,
                    lifts_count: 1,
                });
            }
        }
    }

    // sort_by is stable: equal totals keep first-appearance order
    groups.sort_by(|a, b| b.total_weight.cmp(&a.total_weight));

    groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| LeaderboardEntry {
            rank: index + 1,
            name: group.name.to_string(),
            total_weight: group.total_weight,
            lifts_count: group.lifts_count,
        })
        .collect()
}

/// Full leaderboard plus the summary cards, which are omitted when empty.
pub fn build_response(lifts: &[LiftRecord]) -> LeaderboardResponse {
    let entries = compute_leaderboard(lifts);
    let summary = summarize_entries(&entries);

    LeaderboardResponse { entries, summary }
}

pub fn summarize_entries(entries: &[LeaderboardEntry]) -> Option<LeaderboardSummary> {
    let leader = entries.first()?;

    Some(LeaderboardSummary {
        top_lifter: leader.name.clone(),
        highest_weight: leader.total_weight,
        total_lifters: entries.len(),
        podium: entries.iter().take(PODIUM_SIZE).cloned().collect(),
    })
}

/// Dashboard figures. `lifter` selects whose rank is reported.
pub fn summarize(lifts: &[LiftRecord], lifter: Option<&str>) -> DashboardStats {
    let leaderboard = compute_leaderboard(lifts);

    let total_weight = leaderboard
        .iter()
        .fold(Decimal::ZERO, |sum, entry| sum.saturating_add(entry.total_weight));
    let rank = lifter.and_then(|name| {
        leaderboard
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.rank)
    });

    DashboardStats {
        total_lifts: lifts.len(),
        total_weight,
        total_lifters: leaderboard.len(),
        rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LiftType;

    fn lift(name: &str, weight: &str, sets: u32, reps: u32) -> LiftRecord {
        LiftRecord::new(name, LiftType::Other, weight.parse().unwrap(), sets, reps)
    }

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn sample() -> Vec<LiftRecord> {
        vec![
            lift("Ann", "100", 3, 5),
            lift("Ann", "50", 2, 10),
            lift("Ben", "200", 1, 1),
        ]
    }

    #[test]
    fn test_example_ranking() {
        let leaderboard = compute_leaderboard(&sample());

        assert_eq!(
            leaderboard,
            vec![
                LeaderboardEntry {
                    rank: 1,
                    name: "Ann".to_string(),
                    total_weight: dec(2500),
                    lifts_count: 2,
                },
                LeaderboardEntry {
                    rank: 2,
                    name: "Ben".to_string(),
                    total_weight: dec(200),
                    lifts_count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_leaderboard(&[]).is_empty());
        assert!(build_response(&[]).summary.is_none());
    }

    #[test]
    fn test_names_are_case_and_whitespace_sensitive() {
        let lifts = vec![
            lift("ann", "10", 1, 1),
            lift("Ann", "20", 1, 1),
            lift("Ann ", "30", 1, 1),
        ];

        let leaderboard = compute_leaderboard(&lifts);

        assert_eq!(leaderboard.len(), 3);
        assert_eq!(leaderboard[0].name, "Ann ");
        assert_eq!(leaderboard[2].name, "ann");
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let lifts = vec![
            lift("Cid", "100", 1, 1),
            lift("Ann", "50", 2, 1),
            lift("Ben", "300", 1, 1),
            lift("Ann", "0", 1, 1),
        ];

        let names: Vec<String> = compute_leaderboard(&lifts)
            .into_iter()
            .map(|entry| entry.name)
            .collect();

        assert_eq!(names, vec!["Ben", "Cid", "Ann"]);
    }

    #[test]
    fn test_decimal_weights_are_exact() {
        let lifts = vec![lift("Ann", "0.1", 1, 1), lift("Ann", "0.2", 1, 1)];

        let leaderboard = compute_leaderboard(&lifts);

        assert_eq!(leaderboard[0].total_weight, "0.3".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_aggregate_properties() {
        let names = ["Ann", "Ben", "Cid", "ann", "Dee"];
        let lifts: Vec<LiftRecord> = (0..40u32)
            .map(|i| {
                let name = names[(i as usize * 7) % names.len()];
                lift(name, &format!("{}.5", i * 13 % 90), i % 4 + 1, i % 6 + 1)
            })
            .collect();

        let leaderboard = compute_leaderboard(&lifts);

        let counted: usize = leaderboard.iter().map(|e| e.lifts_count).sum();
        assert_eq!(counted, lifts.len());

        for entry in &leaderboard {
            let expected = lifts
                .iter()
                .filter(|l| l.name == entry.name)
                .fold(Decimal::ZERO, |sum, l| sum + l.weight * dec(l.sets.into()) * dec(l.reps.into()));
            assert_eq!(entry.total_weight, expected);
        }

        for pair in leaderboard.windows(2) {
            assert!(pair[0].total_weight >= pair[1].total_weight);
        }

        let ranks: Vec<usize> = leaderboard.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=leaderboard.len()).collect::<Vec<_>>());

        assert_eq!(compute_leaderboard(&lifts), leaderboard);
    }

    #[test]
    fn test_overflowing_totals_saturate() {
        let lifts = vec![
            LiftRecord {
                weight: Decimal::MAX,
                ..lift("Ann", "0", 1, 1)
            },
            lift("Ann", "1", 1, 1),
            lift("Ben", "1", 1, 1),
        ];

        let leaderboard = compute_leaderboard(&lifts);

        assert_eq!(leaderboard[0].name, "Ann");
        assert_eq!(leaderboard[0].total_weight, Decimal::MAX);
    }

    #[test]
    fn test_summary_cards() {
        let mut lifts = sample();
        lifts.push(lift("Cid", "10", 1, 1));
        lifts.push(lift("Dee", "5", 1, 1));

        let summary = build_response(&lifts).summary.unwrap();

        assert_eq!(summary.top_lifter, "Ann");
        assert_eq!(summary.highest_weight, dec(2500));
        assert_eq!(summary.total_lifters, 4);
        assert_eq!(summary.podium.len(), 3);
        assert_eq!(summary.podium[2].name, "Cid");
    }

    #[test]
    fn test_dashboard_stats() {
        let lifts = sample();

        let stats = summarize(&lifts, Some("Ben"));
        assert_eq!(stats.total_lifts, 3);
        assert_eq!(stats.total_weight, dec(2700));
        assert_eq!(stats.total_lifters, 2);
        assert_eq!(stats.rank, Some(2));

        assert_eq!(summarize(&lifts, None).rank, None);
        assert_eq!(summarize(&lifts, Some("ben")).rank, None);

        let empty = summarize(&[], Some("Ann"));
        assert_eq!(empty.total_lifts, 0);
        assert_eq!(empty.total_weight, Decimal::ZERO);
        assert_eq!(empty.rank, None);
    }
}
