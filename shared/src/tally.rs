use serde::{Deserialize, Serialize};

/// Win counts per label, kept by callers across spins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTally {
    counts: Vec<(String, u32)>,
}

impl SpinTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &str) {
        match self.counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => self.counts.push((label.to_string(), 1)),
        }
    }

    pub fn count(&self, label: &str) -> u32 {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, c)| *c).sum()
    }

    /// Labels in first-win order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }
}
