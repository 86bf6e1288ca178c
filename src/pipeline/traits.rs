use crate::alignment::levenshtein::EditScript;

/// Produces the edit script for one reference/hypothesis sentence pair.
pub trait SequenceAligner: Send + Sync {
    fn align(&self, reference: &[String], hypothesis: &[String]) -> EditScript;
}
