use crate::errors::ValidationError;
use crate::models::WeightEntry;

/// Append-only log of weight entries for one session. Entries keep their
/// insertion order; nothing edits or removes them.
#[derive(Debug, Clone, Default)]
pub struct EntryLog {
    entries: Vec<WeightEntry>,
}

impl EntryLog {
    pub fn new(seed: Vec<WeightEntry>) -> Self {
        Self { entries: seed }
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next ordinal continues from the historical maximum, not from the
    /// sequence length, so gaps in the seed are preserved.
    pub fn next_week(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.week)
            .max()
            .map_or(0, |week| week + 1)
    }

    /// Validates the raw form fields and appends a new entry. Weight and date
    /// are required; weight must parse as a finite number. Dose is optional
    /// and falls back to 0 when blank or unparsable.
    pub fn append(
        &mut self,
        raw_weight: &str,
        raw_date: &str,
        raw_dose: &str,
    ) -> Result<WeightEntry, ValidationError> {
        let weight_text = raw_weight.trim();
        let date = raw_date.trim();

        if weight_text.is_empty() {
            return Err(ValidationError::MissingField { field: "weight" });
        }
        if date.is_empty() {
            return Err(ValidationError::MissingField { field: "date" });
        }

        let weight = parse_finite(weight_text).ok_or_else(|| ValidationError::InvalidNumber {
            field: "weight",
            value: weight_text.to_string(),
        })?;
        let dose = parse_finite(raw_dose.trim()).unwrap_or(0.0);

        let entry = WeightEntry {
            week: self.next_week(),
            weight,
            date: date.to_string(),
            dose,
        };
        self.entries.push(entry.clone());

        Ok(entry)
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
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
    fn append_to_empty_log_starts_at_week_zero() {
        let mut log = EntryLog::default();
        let added = log.append("150", "11.11.2024", "2.5").unwrap();
        assert_eq!(added.week, 0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn append_continues_from_max_week_across_gaps() {
        let mut log = EntryLog::new(vec![entry(0, 150.0), entry(1, 149.0), entry(5, 147.0)]);
        let added = log.append("146.5", "23.12.2024", "").unwrap();
        assert_eq!(added.week, 6);
    }

    #[test]
    fn append_requires_weight_and_date() {
        let mut log = EntryLog::new(vec![entry(0, 150.0)]);

        let err = log.append("", "18.11.2024", "2.5").unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "weight" }));

        let err = log.append("149", "", "2.5").unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "date" }));

        assert_eq!(log.len(), 1);
    }

    #[test]
    fn append_rejects_unparsable_weight() {
        let mut log = EntryLog::new(vec![entry(0, 150.0)]);
        let err = log.append("heavy", "18.11.2024", "2.5").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { field: "weight", .. }));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn append_rejects_non_finite_weight() {
        let mut log = EntryLog::default();
        let err = log.append("NaN", "18.11.2024", "").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { .. }));
        assert!(log.is_empty());
    }

    #[test]
    fn append_defaults_blank_or_unparsable_dose_to_zero() {
        let mut log = EntryLog::default();
        let added = log.append("149", "18.11.2024", "").unwrap();
        assert_eq!(added.dose, 0.0);

        let added = log.append("148", "25.11.2024", "a lot").unwrap();
        assert_eq!(added.dose, 0.0);
    }

    #[test]
    fn append_trims_surrounding_whitespace() {
        let mut log = EntryLog::default();
        let added = log.append(" 148.5 ", " 25.11.2024 ", " 5 ").unwrap();
        assert_eq!(added.weight, 148.5);
        assert_eq!(added.date, "25.11.2024");
        assert_eq!(added.dose, 5.0);
    }

    #[test]
    fn append_follows_the_recorded_sequence() {
        let mut log = EntryLog::new(vec![
            WeightEntry {
                week: 0,
                weight: 150.0,
                date: "11.11.2024".to_string(),
                dose: 2.5,
            },
            WeightEntry {
                week: 1,
                weight: 149.0,
                date: "18.11.2024".to_string(),
                dose: 2.5,
            },
        ]);

        let added = log.append("148", "25.11.2024", "5.0").unwrap();

        assert_eq!(log.len(), 3);
        assert_eq!(
            added,
            WeightEntry {
                week: 2,
                weight: 148.0,
                date: "25.11.2024".to_string(),
                dose: 5.0,
            }
        );
    }
}
