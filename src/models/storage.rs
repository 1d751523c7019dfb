// Disk partition models

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartitionReading {
    pub mount_point: String,
    pub device: String,
    pub fs_type: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiskUsageReading {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub used_percent: f64,
}
