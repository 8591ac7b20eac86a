use std::collections::VecDeque;

/// Rolling window of queue-depth samples, newest first.
#[derive(Debug)]
pub(crate) struct SampleHistory {
    samples: VecDeque<u64>,
    capacity: usize,
}

impl SampleHistory {
    pub(crate) fn from_stored(capacity: usize, stored: Vec<u64>) -> Self {
        let mut samples = VecDeque::from(stored);
        samples.truncate(capacity);
        Self { samples, capacity }
    }

    pub(crate) fn push(&mut self, sample: u64) {
        self.samples.push_front(sample);
        self.samples.truncate(self.capacity);
    }

    pub(crate) fn len(&self) -> usize {
        self.samples.len()
    }

    pub(crate) fn to_vec(&self) -> Vec<u64> {
        self.samples.iter().copied().collect()
    }

    /// Integer mean, truncated toward zero. `None` for an empty window.
    pub(crate) fn mean(&self) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }

        let sum: u128 = self.samples.iter().map(|&sample| u128::from(sample)).sum();
        let mean = sum / self.samples.len() as u128;
        Some(u64::try_from(mean).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::SampleHistory;

    #[test]
    fn push_keeps_newest_first_and_drops_oldest() {
        let mut history = SampleHistory::from_stored(3, vec![2, 1]);
        history.push(3);
        assert_eq!(history.to_vec(), vec![3, 2, 1]);

        history.push(4);
        assert_eq!(history.to_vec(), vec![4, 3, 2]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn shrinks_oversized_stored_history() {
        let history = SampleHistory::from_stored(2, vec![9, 8, 7, 6]);
        assert_eq!(history.to_vec(), vec![9, 8]);
    }

    #[test]
    fn mean_truncates_instead_of_rounding() {
        let history = SampleHistory::from_stored(3, vec![7, 7, 8]);
        assert_eq!(history.mean(), Some(7));

        let history = SampleHistory::from_stored(7, vec![4, 3, 3, 3, 3, 3, 3]);
        assert_eq!(history.mean(), Some(3));

        let empty = SampleHistory::from_stored(0, vec![1]);
        assert_eq!(empty.mean(), None);
    }

    #[test]
    fn mean_does_not_overflow_on_large_samples() {
        let history = SampleHistory::from_stored(2, vec![u64::MAX, u64::MAX]);
        assert_eq!(history.mean(), Some(u64::MAX));
    }
}
