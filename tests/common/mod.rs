// Shared test helpers: an in-memory provider with per-capability failure switches

#![allow(dead_code)]

use vioinfo::models::*;
use vioinfo::provider::{MetricsProvider, ProviderError, ProviderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CpuInfo,
    CpuPercent,
    VirtualMemory,
    DiskPartitions,
    DiskUsage,
    Processes,
    NetInterfaces,
    NetIoCounters,
    HostInfo,
}

#[derive(Default)]
pub struct FakeProvider {
    pub cpus: Vec<CpuReading>,
    pub cpu_usage: Vec<f32>,
    pub memory: MemoryReading,
    pub partitions: Vec<(PartitionReading, Option<DiskUsageReading>)>,
    pub processes: Vec<ProcessReading>,
    pub interfaces: Vec<InterfaceReading>,
    pub io: IoCounters,
    pub host: HostReading,
    pub failing: Vec<Capability>,
}

impl FakeProvider {
    pub fn failing(mut self, capability: Capability) -> Self {
        self.failing.push(capability);
        self
    }

    fn check(&self, capability: Capability, what: &'static str) -> ProviderResult<()> {
        if self.failing.contains(&capability) {
            return Err(ProviderError::Unavailable { what });
        }
        Ok(())
    }
}

impl MetricsProvider for FakeProvider {
    fn cpu_info(&mut self) -> ProviderResult<Vec<CpuReading>> {
        self.check(Capability::CpuInfo, "cpu list")?;
        Ok(self.cpus.clone())
    }

    fn cpu_percent(&mut self) -> ProviderResult<Vec<f32>> {
        self.check(Capability::CpuPercent, "cpu usage")?;
        Ok(self.cpu_usage.clone())
    }

    fn virtual_memory(&mut self) -> ProviderResult<MemoryReading> {
        self.check(Capability::VirtualMemory, "memory totals")?;
        Ok(self.memory.clone())
    }

    fn disk_partitions(&mut self) -> ProviderResult<Vec<PartitionReading>> {
        self.check(Capability::DiskPartitions, "partitions")?;
        Ok(self.partitions.iter().map(|(p, _)| p.clone()).collect())
    }

    fn disk_usage(&mut self, mount_point: &str) -> ProviderResult<DiskUsageReading> {
        self.check(Capability::DiskUsage, "disk usage")?;
        self.partitions
            .iter()
            .find(|(p, _)| p.mount_point == mount_point)
            .and_then(|(_, u)| u.clone())
            .ok_or_else(|| ProviderError::NotFound {
                what: "mount point",
                key: mount_point.to_string(),
            })
    }

    fn processes(&mut self) -> ProviderResult<Vec<ProcessReading>> {
        self.check(Capability::Processes, "process table")?;
        Ok(self.processes.clone())
    }

    fn net_interfaces(&mut self) -> ProviderResult<Vec<InterfaceReading>> {
        self.check(Capability::NetInterfaces, "network interfaces")?;
        Ok(self.interfaces.clone())
    }

    fn net_io_counters(&mut self) -> ProviderResult<IoCounters> {
        self.check(Capability::NetIoCounters, "network counters")?;
        Ok(self.io.clone())
    }

    fn host_info(&mut self) -> ProviderResult<HostReading> {
        self.check(Capability::HostInfo, "host info")?;
        Ok(self.host.clone())
    }
}

pub fn process(pid: u32, name: &str, cpu: f32, mem: f32) -> ProcessReading {
    ProcessReading {
        pid,
        name: Some(name.to_string()),
        cpu_percent: Some(cpu),
        memory_percent: Some(mem),
        status: Some("sleeping".to_string()),
    }
}

/// A provider where every capability answers with small, predictable values.
pub fn healthy_provider() -> FakeProvider {
    FakeProvider {
        cpus: vec![
            CpuReading {
                model: "Test CPU 3000".into(),
                vendor: "TestVendor".into(),
                cores: 2,
                mhz: 3000,
            },
            CpuReading {
                model: "Test CPU 3000".into(),
                vendor: "TestVendor".into(),
                cores: 2,
                mhz: 3000,
            },
        ],
        cpu_usage: vec![12.5, 50.0],
        memory: MemoryReading {
            total: 8 * 1024 * 1024 * 1024,
            used: 2 * 1024 * 1024 * 1024,
            available: 6 * 1024 * 1024 * 1024,
            free: 4 * 1024 * 1024 * 1024,
            used_percent: 25.0,
            swap_total: 0,
            swap_used: 0,
        },
        partitions: vec![(
            PartitionReading {
                mount_point: "/".into(),
                device: "/dev/sda1".into(),
                fs_type: "ext4".into(),
            },
            Some(DiskUsageReading {
                total: 100 * 1024 * 1024 * 1024,
                used: 50 * 1024 * 1024 * 1024,
                free: 50 * 1024 * 1024 * 1024,
                used_percent: 50.0,
            }),
        )],
        processes: vec![process(1, "init", 0.5, 0.1), process(42, "sshd", 1.5, 0.4)],
        interfaces: vec![InterfaceReading {
            name: "eth0".into(),
            hardware_addr: "02:42:ac:11:00:02".into(),
            mtu: 1500,
            flags: vec!["up".into(), "broadcast".into(), "multicast".into()],
            addrs: vec!["172.17.0.2/16".into()],
        }],
        io: IoCounters {
            bytes_sent: 2048,
            bytes_recv: 1536,
            packets_sent: 20,
            packets_recv: 15,
            errin: 0,
            errout: 1,
            dropin: 2,
            dropout: 3,
        },
        host: HostReading {
            hostname: "testhost".into(),
            os: "linux".into(),
            platform: "ubuntu".into(),
            platform_family: "debian".into(),
            platform_version: "22.04".into(),
            kernel_version: "6.1.0".into(),
            kernel_arch: "x86_64".into(),
            uptime: 90_061,
            boot_time: 0,
            procs: 2,
        },
        failing: vec![],
    }
}

/// Render something that writes into a buffer and return the text.
pub fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).expect("writing to a Vec never fails");
    String::from_utf8(buf).expect("report is valid UTF-8")
}
