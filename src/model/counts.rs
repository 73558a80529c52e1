use indexmap::IndexMap;

/// Summed counts per gene display name, in first-seen order.
pub type GeneCounts = IndexMap<String, u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Malformed,
    UnknownProbe,
    BadCount,
    /// The line would push its gene's total past `u64::MAX`.
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    Count { gene: &'a str, count: u64 },
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipTally {
    pub malformed: usize,
    pub unknown_probe: usize,
    pub bad_count: usize,
    pub overflow: usize,
}

impl SkipTally {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Malformed => self.malformed += 1,
            SkipReason::UnknownProbe => self.unknown_probe += 1,
            SkipReason::BadCount => self.bad_count += 1,
            SkipReason::Overflow => self.overflow += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.malformed + self.unknown_probe + self.bad_count + self.overflow
    }

    pub fn merge(&mut self, other: &SkipTally) {
        self.malformed += other.malformed;
        self.unknown_probe += other.unknown_probe;
        self.bad_count += other.bad_count;
        self.overflow += other.overflow;
    }
}

#[derive(Debug, Clone, Default)]
pub struct DccCounts {
    pub genes: GeneCounts,
    pub skipped: SkipTally,
}

#[derive(Debug, Clone)]
pub struct SampleCounts {
    pub sample_id: String,
    pub sample_name: String,
    pub genes: GeneCounts,
}
