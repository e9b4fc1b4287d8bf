/// Single-cycle validation for directed edge lists.
///
/// A graph given as `N` edges `from[k] → to[k]` is a *single cycle* when its
/// successor relation is one permutation cycle of length `N`: every vertex has
/// exactly one outgoing edge, exactly one incoming edge, and following
/// successors from any vertex visits all `N` vertices before returning.
///
/// # Pipeline
///
/// [`is_single_cycle`] runs four strictly sequential phases, each of which can
/// short-circuit the rest:
///
/// 1. **Shape** — mismatched lengths or an empty edge list are rejected.
/// 2. **Out-degree** — builds the successor map in input order; a repeated
///    source vertex is rejected on the spot.
/// 3. **In-degree** — counts edge targets; the first count of 2 is rejected.
/// 4. **Walk** — follows successors from `from[0]` until the start vertex is
///    seen again. The walk must close in exactly `N` steps.
///
/// All phases are `O(N)` in time and auxiliary space. Labels are hashed, never
/// used as indices, so zero, negative or out-of-range labels are classified
/// like any other value.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;


// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

/// The phase that rejected an edge list.
///
/// Only surfaced through `tracing` events and crate tests; the public result
/// is a plain `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// `from` and `to` have different lengths.
    LengthMismatch,
    /// The edge list is empty.
    Empty,
    /// A vertex appears twice as a source.
    DuplicateSource,
    /// A vertex appears twice as a target.
    DuplicateTarget,
    /// The walk reached a vertex with no outgoing edge.
    BrokenChain,
    /// The walk ran past `N` steps without closing.
    StepBoundExceeded,
    /// The walk closed before covering all `N` edges.
    ShortCycle,
}

impl Rejection {
    /// Short label used as the `phase` field of rejection events.
    pub(crate) fn phase(self) -> &'static str {
        match self {
            Self::LengthMismatch => "length-mismatch",
            Self::Empty => "empty",
            Self::DuplicateSource => "out-degree",
            Self::DuplicateTarget => "in-degree",
            Self::BrokenChain => "broken-chain",
            Self::StepBoundExceeded => "step-bound",
            Self::ShortCycle => "short-cycle",
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` if the edges `from[k] → to[k]` form exactly one cycle that
/// passes through every vertex they touch exactly once.
///
/// Never panics. Malformed input (different lengths, an empty list, labels
/// outside `1..=N`) resolves to `false`. A single self-loop `[v] → [v]` is the
/// degenerate cycle of length 1 and is accepted.
///
/// The function keeps no state between calls and only reads its inputs, so it
/// may be called concurrently from any number of threads.
///
/// ```
/// use cyclecheck_core::is_single_cycle;
///
/// assert!(is_single_cycle(&[3, 1, 2], &[2, 3, 1]));
/// assert!(!is_single_cycle(&[1, 2, 3, 4], &[2, 1, 4, 3]));
/// ```
pub fn is_single_cycle<V>(from: &[V], to: &[V]) -> bool
where
    V: Copy + Eq + Hash,
{
    match check(from, to) {
        Ok(()) => {
            tracing::trace!(edges = from.len(), "single cycle");
            true
        }
        Err(rejection) => {
            tracing::debug!(
                from_len = from.len(),
                to_len = to.len(),
                phase = rejection.phase(),
                "not a single cycle"
            );
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// Runs the full pipeline and reports which phase rejected the input.
pub(crate) fn check<V>(from: &[V], to: &[V]) -> Result<(), Rejection>
where
    V: Copy + Eq + Hash,
{
    if from.len() != to.len() {
        return Err(Rejection::LengthMismatch);
    }
    let Some(&start) = from.first() else {
        return Err(Rejection::Empty);
    };

    let successors = successor_map(from, to)?;
    check_in_degree(to)?;
    walk(&successors, start, from.len())
}

/// Builds `vertex → successor`, rejecting any vertex with a second outgoing
/// edge.
fn successor_map<V>(from: &[V], to: &[V]) -> Result<HashMap<V, V>, Rejection>
where
    V: Copy + Eq + Hash,
{
    let mut successors = HashMap::with_capacity(from.len());
    for (&source, &target) in from.iter().zip(to) {
        match successors.entry(source) {
            Entry::Occupied(_) => return Err(Rejection::DuplicateSource),
            Entry::Vacant(slot) => {
                slot.insert(target);
            }
        }
    }
    Ok(successors)
}

/// Counts incoming edges per vertex and stops at the first vertex that
/// reaches two.
fn check_in_degree<V>(to: &[V]) -> Result<(), Rejection>
where
    V: Copy + Eq + Hash,
{
    let mut in_degree: HashMap<V, u8> = HashMap::with_capacity(to.len());
    for &target in to {
        let count = in_degree.entry(target).or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(Rejection::DuplicateTarget);
        }
    }
    Ok(())
}

/// Follows successors from `start` and accepts only a closed walk of exactly
/// `edge_count` steps.
///
/// Once the degree phases pass, the successor map is injective and the walk
/// either closes or falls off the map within `edge_count` steps. The
/// `steps > edge_count` bound is kept anyway so termination never depends on
/// that argument.
fn walk<V>(successors: &HashMap<V, V>, start: V, edge_count: usize) -> Result<(), Rejection>
where
    V: Copy + Eq + Hash,
{
    let mut current = start;
    let mut steps: usize = 0;

    loop {
        let Some(&next) = successors.get(&current) else {
            return Err(Rejection::BrokenChain);
        };
        current = next;
        steps += 1;

        if steps > edge_count {
            return Err(Rejection::StepBoundExceeded);
        }
        if current == start {
            break;
        }
    }

    if steps == edge_count {
        Ok(())
    } else {
        Err(Rejection::ShortCycle)
    }
}
