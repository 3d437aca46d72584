/// Sentinel cost meaning "no known route" in the solver's cost table.
pub const UNREACHABLE: u32 = u32::MAX;

/// Sentinel parent index for cells without a predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Priority-queue entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// lowest cost first and, among equal costs, the earliest pushed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) cost: u32,
    pub(crate) seq: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
