use std::fmt;

// ---------------------------------------------------------------------------
// Record – one period/maximum pair
// ---------------------------------------------------------------------------

/// A single observation: one time-period label and the peak discharge
/// measured in that period. Read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Label of the time interval, e.g. `"2021"` (x-axis category).
    pub period: String,
    /// Measured maximum flow for that period, in m³/s (y-axis value).
    pub maximum: f64,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} m³/s", self.period, format_maximum(self.maximum))
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded series
// ---------------------------------------------------------------------------

/// The full ordered collection of records, in source-file order.
/// That order drives both the table rows and the chart's x positions.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project all period labels, preserving record order.
    pub fn periods(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.period.as_str()).collect()
    }

    /// Project all maximum values, preserving record order.
    /// Always the same length as [`Dataset::periods`].
    pub fn maxima(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.maximum).collect()
    }
}

/// Format a maximum for display. Integral values print without a decimal
/// part so a cell shows `5` for the JSON literal `5`, not `5.0`.
pub fn format_maximum(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            Record {
                period: "2020".into(),
                maximum: 5.0,
            },
            Record {
                period: "2021".into(),
                maximum: 9.0,
            },
        ])
    }

    #[test]
    fn projections_preserve_order_and_length() {
        let ds = sample();
        assert_eq!(ds.periods(), vec!["2020", "2021"]);
        assert_eq!(ds.maxima(), vec![5.0, 9.0]);
        assert_eq!(ds.periods().len(), ds.maxima().len());
    }

    #[test]
    fn empty_dataset_has_empty_projections() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert!(ds.periods().is_empty());
        assert!(ds.maxima().is_empty());
    }

    #[test]
    fn format_maximum_drops_trailing_zero() {
        assert_eq!(format_maximum(5.0), "5");
        assert_eq!(format_maximum(-12.0), "-12");
        assert_eq!(format_maximum(7.25), "7.25");
    }
}
