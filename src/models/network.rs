// Network interface models

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterfaceReading {
    pub name: String,
    pub hardware_addr: String,
    pub mtu: u64,
    /// Lowercase flag names, e.g. `up`, `broadcast`, `multicast`.
    pub flags: Vec<String>,
    /// Addresses in CIDR notation.
    pub addrs: Vec<String>,
}

/// I/O counters summed over all interfaces since boot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IoCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
    pub dropin: u64,
    pub dropout: u64,
}
