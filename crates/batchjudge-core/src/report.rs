//! Per-item outcome collection.
//!
//! Batch operations never stop at the first bad line, folder or file. Every
//! item either lands in `items` or is recorded in `failures` together with the
//! subject (a line, a folder name, a path) it was produced for.

use crate::error::Error;

/// A failed item and the reason it was skipped.
#[derive(Debug)]
pub struct Failure {
    pub subject: String,
    pub error: Error,
}

/// Successes and failures of a single batch operation.
#[derive(Debug)]
pub struct Report<T> {
    pub items: Vec<T>,
    pub failures: Vec<Failure>,
}

impl<T> Default for Report<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> Report<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn fail(&mut self, subject: impl Into<String>, error: Error) {
        let subject = subject.into();
        tracing::warn!("Skipping {}: {}", subject, error);
        self.failures.push(Failure { subject, error });
    }

    /// Record `result` as a success or a failure for `subject`.
    pub fn record(&mut self, subject: impl Into<String>, result: crate::Result<T>) {
        match result {
            Ok(item) => self.push(item),
            Err(e) => self.fail(subject, e),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_splits_results() {
        let mut report: Report<u32> = Report::new();
        report.record("first", Ok(1));
        report.record("second", Err(Error::EmptyAggregation));
        report.record("third", Ok(3));

        assert_eq!(report.items, vec![1, 3]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].subject, "second");
        assert!(!report.is_clean());
    }
}
