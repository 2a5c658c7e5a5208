// ---------------------------------------------------------------------------
// Sample – one validated line of the log
// ---------------------------------------------------------------------------

/// One record of the controller log: `value,state_a,state_b,value_ref`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Measured value (temperature).
    pub value: f64,
    /// First actuator state (heater).
    pub state_a: i64,
    /// Second actuator state (fan).
    pub state_b: i64,
    /// Reference value (midpoint).
    pub value_ref: f64,
}

// ---------------------------------------------------------------------------
// Series – selects one of the four sequences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Value,
    ValueRef,
    StateA,
    StateB,
}

// ---------------------------------------------------------------------------
// SampleLog – the complete loaded log
// ---------------------------------------------------------------------------

/// Four parallel sequences, index-aligned by input order.
///
/// Fields are only appended through [`SampleLog::push`], which keeps the
/// four vectors the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleLog {
    value: Vec<f64>,
    state_a: Vec<i64>,
    state_b: Vec<i64>,
    value_ref: Vec<f64>,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SampleLog {
            value: Vec::with_capacity(capacity),
            state_a: Vec::with_capacity(capacity),
            state_b: Vec::with_capacity(capacity),
            value_ref: Vec::with_capacity(capacity),
        }
    }

    /// Append one sample to all four sequences.
    pub fn push(&mut self, sample: Sample) {
        self.value.push(sample.value);
        self.state_a.push(sample.state_a);
        self.state_b.push(sample.state_b);
        self.value_ref.push(sample.value_ref);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn value(&self) -> &[f64] {
        &self.value
    }

    pub fn state_a(&self) -> &[i64] {
        &self.state_a
    }

    pub fn state_b(&self) -> &[i64] {
        &self.state_b
    }

    pub fn value_ref(&self) -> &[f64] {
        &self.value_ref
    }

    /// `[index, y]` pairs for one series, integer states widened to `f64`.
    pub fn points(&self, series: Series) -> Vec<[f64; 2]> {
        fn indexed(ys: impl Iterator<Item = f64>) -> Vec<[f64; 2]> {
            ys.enumerate().map(|(i, y)| [i as f64, y]).collect()
        }
        match series {
            Series::Value => indexed(self.value().iter().copied()),
            Series::ValueRef => indexed(self.value_ref().iter().copied()),
            Series::StateA => indexed(self.state_a().iter().map(|&s| s as f64)),
            Series::StateB => indexed(self.state_b().iter().map(|&s| s as f64)),
        }
    }
}

impl Extend<Sample> for SampleLog {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

impl FromIterator<Sample> for SampleLog {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut log = SampleLog::with_capacity(iter.size_hint().0);
        log.extend(iter);
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: f64, state_a: i64, state_b: i64, value_ref: f64) -> Sample {
        Sample {
            value,
            state_a,
            state_b,
            value_ref,
        }
    }

    #[test]
    fn push_keeps_sequences_aligned() {
        let mut log = SampleLog::with_capacity(2);
        log.push(sample(20.5, 1, 0, 20.0));
        log.push(sample(21.0, 0, 1, 20.2));

        assert_eq!(log.len(), 2);
        assert_eq!(log.value(), &[20.5, 21.0]);
        assert_eq!(log.state_a(), &[1, 0]);
        assert_eq!(log.state_b(), &[0, 1]);
        assert_eq!(log.value_ref(), &[20.0, 20.2]);
    }

    #[test]
    fn collect_from_samples() {
        let log: SampleLog = vec![sample(1.0, 2, 3, 4.0), sample(5.0, 6, 7, 8.0)]
            .into_iter()
            .collect();
        assert_eq!(log.len(), 2);
        assert_eq!(log.state_b(), &[3, 7]);
    }

    #[test]
    fn points_use_sample_index_as_x() {
        let log: SampleLog = vec![sample(20.5, 2, 0, 27.0), sample(21.0, 1, 3, 27.0)]
            .into_iter()
            .collect();

        assert_eq!(log.points(Series::Value), vec![[0.0, 20.5], [1.0, 21.0]]);
        assert_eq!(log.points(Series::ValueRef), vec![[0.0, 27.0], [1.0, 27.0]]);
        assert_eq!(log.points(Series::StateA), vec![[0.0, 2.0], [1.0, 1.0]]);
        assert_eq!(log.points(Series::StateB), vec![[0.0, 0.0], [1.0, 3.0]]);
    }

    #[test]
    fn empty_log_has_no_points() {
        let log = SampleLog::new();
        assert!(log.is_empty());
        for series in [Series::Value, Series::ValueRef, Series::StateA, Series::StateB] {
            assert!(log.points(series).is_empty());
        }
    }
}
