// Host and OS identity

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostReading {
    pub hostname: String,
    /// Kernel family, e.g. `linux`.
    pub os: String,
    /// Distribution id, e.g. `ubuntu`.
    pub platform: String,
    pub platform_family: String,
    pub platform_version: String,
    pub kernel_version: String,
    pub kernel_arch: String,
    pub uptime: u64,
    /// Seconds since the Unix epoch.
    pub boot_time: u64,
    pub procs: u64,
}
