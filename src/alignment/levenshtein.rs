use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTag {
    Equal,
    Substitute,
    Delete,
    Insert,
}

impl EditTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Substitute => "substitute",
            Self::Delete => "delete",
            Self::Insert => "insert",
        }
    }
}

/// Contiguous run of one operation.
///
/// Ranges are half-open: `[ref_start, ref_end)` into the reference and
/// `[hyp_start, hyp_end)` into the hypothesis. Deletions have an empty
/// hypothesis range, insertions an empty reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditRun {
    pub tag: EditTag,
    pub ref_start: usize,
    pub ref_end: usize,
    pub hyp_start: usize,
    pub hyp_end: usize,
}

impl EditRun {
    /// Number of aligned positions the run covers.
    pub fn len(&self) -> usize {
        match self.tag {
            EditTag::Insert => self.hyp_end - self.hyp_start,
            _ => self.ref_end - self.ref_start,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditScript {
    pub runs: Vec<EditRun>,
}

impl EditScript {
    pub fn distance(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| run.tag != EditTag::Equal)
            .map(EditRun::len)
            .sum()
    }

    fn push_step(&mut self, tag: EditTag, ref_pos: usize, hyp_pos: usize) {
        let (ref_step, hyp_step) = match tag {
            EditTag::Equal | EditTag::Substitute => (1, 1),
            EditTag::Delete => (1, 0),
            EditTag::Insert => (0, 1),
        };
        if let Some(last) = self.runs.last_mut() {
            if last.tag == tag && last.ref_end == ref_pos && last.hyp_end == hyp_pos {
                last.ref_end += ref_step;
                last.hyp_end += hyp_step;
                return;
            }
        }
        self.runs.push(EditRun {
            tag,
            ref_start: ref_pos,
            ref_end: ref_pos + ref_step,
            hyp_start: hyp_pos,
            hyp_end: hyp_pos + hyp_step,
        });
    }
}

/// Minimum-edit alignment of `hypothesis` against `reference`.
///
/// When several operations reach the same minimum cost the backtrack prefers
/// substitution, then deletion, then insertion; matching tokens always align
/// as a hit.
pub fn align_tokens<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> EditScript {
    let m = reference.len();
    let n = hypothesis.len();
    let width = n + 1;

    // Flat (m+1) x (n+1) cost table, row-major.
    let mut cost = vec![0usize; (m + 1) * width];
    for j in 0..=n {
        cost[j] = j;
    }
    for i in 1..=m {
        let row = i * width;
        let prev_row = (i - 1) * width;
        cost[row] = i;
        for j in 1..=n {
            cost[row + j] = if reference[i - 1] == hypothesis[j - 1] {
                cost[prev_row + j - 1]
            } else {
                let deletion = cost[prev_row + j];
                let insertion = cost[row + j - 1];
                let substitution = cost[prev_row + j - 1];
                1 + deletion.min(insertion).min(substitution)
            };
        }
    }

    let mut steps = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        let here = cost[i * width + j];
        let tag = if i > 0 && j > 0 && reference[i - 1] == hypothesis[j - 1] {
            EditTag::Equal
        } else if i > 0 && j > 0 && here == cost[(i - 1) * width + j - 1] + 1 {
            EditTag::Substitute
        } else if i > 0 && (j == 0 || here == cost[(i - 1) * width + j] + 1) {
            EditTag::Delete
        } else {
            EditTag::Insert
        };
        match tag {
            EditTag::Equal | EditTag::Substitute => {
                i -= 1;
                j -= 1;
            }
            EditTag::Delete => i -= 1,
            EditTag::Insert => j -= 1,
        }
        steps.push((tag, i, j));
    }

    let mut script = EditScript::default();
    for (tag, ref_pos, hyp_pos) in steps.into_iter().rev() {
        script.push_step(tag, ref_pos, hyp_pos);
    }
    debug_assert_eq!(script.distance(), cost[m * width + n]);
    script
}
