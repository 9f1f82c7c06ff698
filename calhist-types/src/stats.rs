use serde::{Deserialize, Serialize};

/// Database statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DbStats {
    /// Total number of query and ingestion operations performed
    pub operations_count: u64,
    /// Number of series snapshots built from storage
    pub series_loads: u64,
    /// Number of storage calls retried after a transient failure
    pub load_retries: u64,
    /// Number of series snapshots currently cached
    pub cached_series: usize,
    /// Number of records held by cached snapshots
    pub cached_records: usize,
    /// Number of parameter types with a cached release list
    pub known_param_types: usize,
}

impl DbStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_operation(&mut self) {
        self.operations_count += 1;
    }
}
