/// Position in a sampling grid: `i` indexes the real axis, `j` the imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub i: usize,
    pub j: usize,
}
