use log::debug;

use crate::db::VoteStore;
use crate::error::AggregationError;
use crate::models::{Category, ResultsSummary, VoteTally};

/// Fold grouped vote counts into the two-category summary.
///
/// Labels are matched case-insensitively. Spellings of the same category that
/// the store grouped separately ("Cats", "CATS") are added together. Labels
/// that are neither cats nor dogs are skipped and do not count toward `total`.
pub fn calculate_results(tallies: &[VoteTally]) -> ResultsSummary {
    let mut results = ResultsSummary::default();

    for tally in tallies {
        match Category::from_label(&tally.vote) {
            Some(category) => {
                // COUNT() is never negative, but the column type allows it
                let count = u64::try_from(tally.count).unwrap_or(0);
                results.category_mut(category).count += count;
            }
            None => debug!("Ignoring unknown vote label {:?} ({} rows)", tally.vote, tally.count),
        }
    }

    results.total = results.cats.count + results.dogs.count;

    // Zero votes leaves both percentages at 0; the UI decides how to draw that
    if results.total > 0 {
        let total = results.total as f64;
        for category in Category::ALL {
            let entry = results.category_mut(category);
            entry.percentage = entry.count as f64 * 100.0 / total;
        }
    }

    results
}

/// Run the grouped count query once and summarise it. No retry here; the
/// caller polls again.
pub async fn fetch_results(store: &dyn VoteStore) -> Result<ResultsSummary, AggregationError> {
    let tallies = store.vote_counts().await?;
    Ok(calculate_results(&tallies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::MemoryStore;

    fn tallies(cats: i64, dogs: i64) -> Vec<VoteTally> {
        vec![VoteTally::new("Cats", cats), VoteTally::new("Dogs", dogs)]
    }

    #[test]
    fn test_three_to_one() {
        let results = calculate_results(&tallies(3, 1));
        assert_eq!(results.cats.count, 3);
        assert_eq!(results.dogs.count, 1);
        assert_eq!(results.total, 4);
        assert_eq!(results.cats.percentage, 75.0);
        assert_eq!(results.dogs.percentage, 25.0);
    }

    #[test]
    fn test_no_votes() {
        assert_eq!(calculate_results(&[]), ResultsSummary::default());

        let results = calculate_results(&tallies(0, 0));
        assert_eq!(results.total, 0);
        assert_eq!(results.cats.percentage, 0.0);
        assert_eq!(results.dogs.percentage, 0.0);
    }

    #[test]
    fn test_one_sided() {
        // The store only returns groups that exist
        let results = calculate_results(&[VoteTally::new("Dogs", 5)]);
        assert_eq!(results.cats.count, 0);
        assert_eq!(results.cats.percentage, 0.0);
        assert_eq!(results.dogs.count, 5);
        assert_eq!(results.dogs.percentage, 100.0);
        assert_eq!(results.total, 5);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        for cats in 0..25i64 {
            for dogs in 0..25i64 {
                let results = calculate_results(&tallies(cats, dogs));
                assert_eq!(results.total, (cats + dogs) as u64);
                assert_eq!(results.cats.count + results.dogs.count, results.total);

                if results.total == 0 {
                    assert_eq!(results.cats.percentage, 0.0);
                    assert_eq!(results.dogs.percentage, 0.0);
                    continue;
                }

                let total = (cats + dogs) as f64;
                assert!((results.cats.percentage - 100.0 * cats as f64 / total).abs() < 1e-9);
                assert!((results.dogs.percentage - 100.0 * dogs as f64 / total).abs() < 1e-9);
                assert!((results.cats.percentage + results.dogs.percentage - 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_label_case_is_folded() {
        let results = calculate_results(&[
            VoteTally::new("Cats", 2),
            VoteTally::new("CATS", 1),
            VoteTally::new("cats", 1),
            VoteTally::new("dogs", 4),
        ]);
        assert_eq!(results.cats.count, 4);
        assert_eq!(results.dogs.count, 4);
        assert_eq!(results.cats.percentage, 50.0);
    }

    #[test]
    fn test_unknown_labels_ignored() {
        let results = calculate_results(&[
            VoteTally::new("Cats", 1),
            VoteTally::new("Birds", 10),
            VoteTally::new("Dogs", 1),
        ]);
        assert_eq!(results.total, 2);
        assert_eq!(results.cats.percentage, 50.0);
        assert_eq!(results.dogs.percentage, 50.0);

        let results = calculate_results(&[VoteTally::new("Birds", 3), VoteTally::new("Cats ", 4)]);
        assert_eq!(results, ResultsSummary::default());
    }

    #[test]
    fn test_negative_count_clamped() {
        let results = calculate_results(&[VoteTally::new("Cats", -2), VoteTally::new("Dogs", 2)]);
        assert_eq!(results.cats.count, 0);
        assert_eq!(results.total, 2);
        assert_eq!(results.dogs.percentage, 100.0);
    }

    #[tokio::test]
    async fn test_fetch_results_from_store() {
        let store = MemoryStore::with_tallies(tallies(3, 1));
        let results = fetch_results(&store).await.unwrap();
        assert_eq!(results.total, 4);
        assert_eq!(results.cats.percentage, 75.0);
    }

    #[tokio::test]
    async fn test_fetch_results_store_failure() {
        let store = MemoryStore::failing();
        let err = fetch_results(&store).await.unwrap_err();
        assert!(matches!(err, AggregationError::Store(_)));
    }
}
