pub mod counts;
pub mod levenshtein;
pub mod report;

use crate::alignment::counts::AggregateCounts;
use crate::alignment::levenshtein::EditScript;

/// One normalized truth/hypothesis sentence pair and its edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceAlignment {
    pub reference: Vec<String>,
    pub hypothesis: Vec<String>,
    pub script: EditScript,
}

impl SentenceAlignment {
    pub fn counts(&self) -> AggregateCounts {
        AggregateCounts::from_script(&self.script)
    }
}

pub fn total_counts(alignments: &[SentenceAlignment]) -> AggregateCounts {
    alignments.iter().map(SentenceAlignment::counts).sum()
}
