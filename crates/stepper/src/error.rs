/// A jump target outside `[0, len]`. The cursor is left where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "step {} is out of range (trace has positions 0..={})",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}
