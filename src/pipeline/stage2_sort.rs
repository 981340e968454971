use crate::lengths::{ReadLengths, SortedLengths};

pub fn run_stage2(lengths: ReadLengths) -> SortedLengths {
    lengths.sorted()
}
