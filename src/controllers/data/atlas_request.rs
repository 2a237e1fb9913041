use crate::core::data::region::Region;
use crate::core::data::run_params::RunParams;

/// Snapshot of everything one compute-and-render job needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRequest {
    pub region: Region,
    pub density: usize,
    pub params: RunParams,
    pub show_grid: bool,
}
