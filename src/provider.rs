// Metrics provider seam: everything the report reads from the host goes through here.

use crate::models::*;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{what} unavailable")]
    Unavailable { what: &'static str },
    #[error("{what} not found: {key}")]
    NotFound { what: &'static str, key: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Source of point-in-time host readings.
///
/// Every capability may fail on its own; callers treat a failure as
/// "skip this part of the report" and keep going.
pub trait MetricsProvider {
    /// One entry per logical CPU.
    fn cpu_info(&mut self) -> ProviderResult<Vec<CpuReading>>;

    /// Usage percentage per logical CPU, in the same order as [`Self::cpu_info`].
    fn cpu_percent(&mut self) -> ProviderResult<Vec<f32>>;

    fn virtual_memory(&mut self) -> ProviderResult<MemoryReading>;

    fn disk_partitions(&mut self) -> ProviderResult<Vec<PartitionReading>>;

    fn disk_usage(&mut self, mount_point: &str) -> ProviderResult<DiskUsageReading>;

    /// Processes in enumeration order.
    fn processes(&mut self) -> ProviderResult<Vec<ProcessReading>>;

    fn net_interfaces(&mut self) -> ProviderResult<Vec<InterfaceReading>>;

    /// Counters aggregated over every interface.
    fn net_io_counters(&mut self) -> ProviderResult<IoCounters>;

    fn host_info(&mut self) -> ProviderResult<HostReading>;
}
