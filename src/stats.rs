use crate::models::{StatsResponse, WeightEntry};

/// Summary values for the stat tiles, recomputed from the full sequence on
/// every query. `total_loss` is start minus current and goes negative on a
/// net gain; `weight_trend` is the change since the previous entry.
pub fn summarize(entries: &[WeightEntry]) -> StatsResponse {
    let current_weight = entries.last().map_or(0.0, |entry| entry.weight);
    let start_weight = entries.first().map_or(0.0, |entry| entry.weight);
    let weight_trend = if entries.len() >= 2 {
        entries[entries.len() - 1].weight - entries[entries.len() - 2].weight
    } else {
        0.0
    };

    StatsResponse {
        current_weight,
        start_weight,
        total_loss: start_weight - current_weight,
        weight_trend,
        entry_count: entries.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(week: u32, weight: f64) -> WeightEntry {
        WeightEntry {
            week,
            weight,
            date: "01.01.2025".to_string(),
            dose: 0.0,
        }
    }

    #[test]
    fn empty_sequence_summarizes_to_zeroes() {
        let stats = summarize(&[]);
        assert_eq!(stats.current_weight, 0.0);
        assert_eq!(stats.start_weight, 0.0);
        assert_eq!(stats.total_loss, 0.0);
        assert_eq!(stats.weight_trend, 0.0);
        assert_eq!(stats.entry_count, 0);
    }

    #[test]
    fn current_is_last_and_start_is_first() {
        let entries = [entry(0, 150.0), entry(1, 149.0), entry(2, 151.5)];
        let stats = summarize(&entries);
        assert_eq!(stats.current_weight, 151.5);
        assert_eq!(stats.start_weight, 150.0);
    }

    #[test]
    fn total_loss_goes_negative_on_net_gain() {
        let entries = [entry(0, 150.0), entry(1, 152.0)];
        let stats = summarize(&entries);
        assert_eq!(stats.total_loss, -2.0);
    }

    #[test]
    fn trend_is_zero_below_two_entries() {
        assert_eq!(summarize(&[]).weight_trend, 0.0);
        assert_eq!(summarize(&[entry(0, 150.0)]).weight_trend, 0.0);
    }

    #[test]
    fn trend_compares_the_two_most_recent_entries() {
        let entries = [entry(0, 150.0), entry(1, 149.0), entry(2, 148.0)];
        assert_eq!(summarize(&entries).weight_trend, -1.0);

        let entries = [entry(0, 150.0), entry(1, 148.0), entry(2, 149.0)];
        assert_eq!(summarize(&entries).weight_trend, 1.0);
    }

    #[test]
    fn summary_after_one_recorded_week() {
        let entries = [
            entry(0, 150.0),
            entry(1, 149.0),
            WeightEntry {
                week: 2,
                weight: 148.0,
                date: "25.11.2024".to_string(),
                dose: 5.0,
            },
        ];
        let stats = summarize(&entries);
        assert_eq!(stats.current_weight, 148.0);
        assert_eq!(stats.start_weight, 150.0);
        assert_eq!(stats.total_loss, 2.0);
        assert_eq!(stats.weight_trend, -1.0);
        assert_eq!(stats.entry_count, 3);
    }
}
