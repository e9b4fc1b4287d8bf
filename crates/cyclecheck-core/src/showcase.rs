/// Worked examples from the classic "is this graph a cycle?" problem
/// statement, with their expected answers.
///
/// The CLI `showcase` command evaluates every case and reports expected vs.
/// actual; the cases double as regression fixtures.
use crate::edges::Vertex;
use crate::validator::is_single_cycle;

/// One worked example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseCase {
    /// Short human-readable description.
    pub description: &'static str,
    /// Source labels.
    pub from: &'static [Vertex],
    /// Target labels.
    pub to: &'static [Vertex],
    /// The correct answer.
    pub expected: bool,
}

impl ShowcaseCase {
    /// Runs the validator on this case.
    pub fn evaluate(&self) -> bool {
        is_single_cycle(self.from, self.to)
    }

    /// Returns `true` if the validator's answer matches [`Self::expected`].
    pub fn passes(&self) -> bool {
        self.evaluate() == self.expected
    }
}

const CASES: &[ShowcaseCase] = &[
    ShowcaseCase {
        description: "cycle of length 3, edges out of order",
        from: &[3, 1, 2],
        to: &[2, 3, 1],
        expected: true,
    },
    ShowcaseCase {
        description: "vertex 1 has two outgoing edges",
        from: &[1, 2, 1],
        to: &[2, 3, 3],
        expected: false,
    },
    ShowcaseCase {
        description: "vertex 4 has two incoming edges",
        from: &[1, 2, 3, 4],
        to: &[2, 1, 4, 4],
        expected: false,
    },
    ShowcaseCase {
        description: "two disjoint cycles of length 2",
        from: &[1, 2, 3, 4],
        to: &[2, 1, 4, 3],
        expected: false,
    },
    ShowcaseCase {
        description: "repeated edges and a dangling vertex",
        from: &[1, 2, 2, 3, 3],
        to: &[2, 3, 3, 4, 5],
        expected: false,
    },
    ShowcaseCase {
        description: "cycle of length 4",
        from: &[1, 3, 2, 4],
        to: &[4, 1, 3, 2],
        expected: true,
    },
];

/// All worked examples in presentation order.
pub fn showcase() -> &'static [ShowcaseCase] {
    CASES
}
