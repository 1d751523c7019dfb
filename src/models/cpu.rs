// CPU and memory readings

/// One logical CPU as reported by the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CpuReading {
    pub model: String,
    pub vendor: String,
    /// Physical cores of the package this CPU belongs to.
    pub cores: u32,
    pub mhz: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryReading {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub free: u64,
    pub used_percent: f64,
    pub swap_total: u64,
    pub swap_used: u64,
}
