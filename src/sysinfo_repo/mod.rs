// Host readings via sysinfo

mod linux;

use crate::models::*;
use crate::provider::{MetricsProvider, ProviderError, ProviderResult};
use std::time::Instant;
use sysinfo::{Disks, Networks, ProcessStatus, ProcessesToUpdate, System};
use tracing::instrument;

pub struct SysinfoRepo {
    sys: System,
    disks: Disks,
    networks: Networks,
    cpu_sampled_at: Instant,
    processes_sampled_at: Instant,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let now = Instant::now();
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            cpu_sampled_at: now,
            processes_sampled_at: now,
        }
    }

    /// Usage figures are deltas between two refreshes; block until the
    /// previous sample is old enough to give a meaningful one.
    fn wait_for_next_sample(sampled_at: Instant) {
        let elapsed = sampled_at.elapsed();
        if elapsed < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL - elapsed);
        }
    }
}

fn percent_of(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

impl MetricsProvider for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_info"))]
    fn cpu_info(&mut self) -> ProviderResult<Vec<CpuReading>> {
        // A full cpu refresh also moves the usage baseline
        self.sys.refresh_cpu_all();
        self.cpu_sampled_at = Instant::now();
        if self.sys.cpus().is_empty() {
            return Err(ProviderError::Unavailable { what: "cpu list" });
        }
        let cores = System::physical_core_count().unwrap_or(0) as u32;
        let linux_model = linux::read_cpu_model_linux();
        Ok(self
            .sys
            .cpus()
            .iter()
            .map(|c| CpuReading {
                model: linux_model
                    .clone()
                    .or_else(|| Some(c.brand().to_string()).filter(|s| !s.is_empty()))
                    .unwrap_or_else(|| "Unknown".into()),
                vendor: c.vendor_id().to_string(),
                cores,
                mhz: c.frequency(),
            })
            .collect())
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_percent"))]
    fn cpu_percent(&mut self) -> ProviderResult<Vec<f32>> {
        Self::wait_for_next_sample(self.cpu_sampled_at);
        self.sys.refresh_cpu_usage();
        self.cpu_sampled_at = Instant::now();
        let usage: Vec<f32> = self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        if usage.is_empty() {
            return Err(ProviderError::Unavailable { what: "cpu usage" });
        }
        Ok(usage)
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "virtual_memory"))]
    fn virtual_memory(&mut self) -> ProviderResult<MemoryReading> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(ProviderError::Unavailable { what: "memory totals" });
        }
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        Ok(MemoryReading {
            total,
            used,
            available,
            free: self.sys.free_memory(),
            used_percent: percent_of(used, total),
            swap_total: self.sys.total_swap(),
            swap_used: self.sys.used_swap(),
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "disk_partitions"))]
    fn disk_partitions(&mut self) -> ProviderResult<Vec<PartitionReading>> {
        self.disks.refresh(true);
        Ok(self
            .disks
            .list()
            .iter()
            .map(|d| PartitionReading {
                mount_point: d.mount_point().to_string_lossy().into_owned(),
                device: d.name().to_string_lossy().into_owned(),
                fs_type: d.file_system().to_string_lossy().into_owned(),
            })
            .collect())
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "disk_usage"))]
    fn disk_usage(&mut self, mount_point: &str) -> ProviderResult<DiskUsageReading> {
        let disk = self
            .disks
            .list()
            .iter()
            .find(|d| d.mount_point() == std::path::Path::new(mount_point))
            .ok_or_else(|| ProviderError::NotFound {
                what: "mount point",
                key: mount_point.to_string(),
            })?;
        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);
        Ok(DiskUsageReading {
            total,
            used,
            free,
            used_percent: percent_of(used, total),
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "processes"))]
    fn processes(&mut self) -> ProviderResult<Vec<ProcessReading>> {
        Self::wait_for_next_sample(self.processes_sampled_at);
        self.sys.refresh_memory();
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        self.processes_sampled_at = Instant::now();

        let total_memory = self.sys.total_memory();
        let mut processes: Vec<ProcessReading> = self
            .sys
            .processes()
            .values()
            .map(|p| ProcessReading {
                pid: p.pid().as_u32(),
                name: Some(p.name().to_string_lossy().into_owned()).filter(|n| !n.is_empty()),
                cpu_percent: Some(p.cpu_usage()).filter(|v| v.is_finite()),
                memory_percent: (total_memory > 0)
                    .then(|| percent_of(p.memory(), total_memory) as f32),
                status: match p.status() {
                    ProcessStatus::Unknown(_) => None,
                    status => Some(status.to_string()),
                },
            })
            .collect();
        if processes.is_empty() {
            return Err(ProviderError::Unavailable { what: "process table" });
        }
        // sysinfo hands out a map; enumerate in pid order like /proc does
        processes.sort_by_key(|p| p.pid);
        Ok(processes)
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "net_interfaces"))]
    fn net_interfaces(&mut self) -> ProviderResult<Vec<InterfaceReading>> {
        self.networks.refresh(true);
        if self.networks.list().is_empty() {
            return Err(ProviderError::Unavailable { what: "network interfaces" });
        }
        let mut interfaces: Vec<InterfaceReading> = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| {
                let mac = data.mac_address();
                InterfaceReading {
                    name: name.clone(),
                    hardware_addr: if mac.is_unspecified() {
                        String::new()
                    } else {
                        mac.to_string()
                    },
                    mtu: linux::read_interface_mtu(name),
                    flags: linux::read_interface_flags(name),
                    addrs: data
                        .ip_networks()
                        .iter()
                        .map(|n| format!("{}/{}", n.addr, n.prefix))
                        .collect(),
                }
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interfaces)
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "net_io_counters"))]
    fn net_io_counters(&mut self) -> ProviderResult<IoCounters> {
        self.networks.refresh(true);
        if self.networks.list().is_empty() {
            return Err(ProviderError::Unavailable { what: "network counters" });
        }
        Ok(self
            .networks
            .list()
            .iter()
            .fold(IoCounters::default(), |mut acc, (name, data)| {
                let (dropin, dropout) = linux::read_interface_drops(name);
                acc.bytes_sent += data.total_transmitted();
                acc.bytes_recv += data.total_received();
                acc.packets_sent += data.total_packets_transmitted();
                acc.packets_recv += data.total_packets_received();
                acc.errin += data.total_errors_on_received();
                acc.errout += data.total_errors_on_transmitted();
                acc.dropin += dropin;
                acc.dropout += dropout;
                acc
            }))
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "host_info"))]
    fn host_info(&mut self) -> ProviderResult<HostReading> {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let platform = System::distribution_id();
        Ok(HostReading {
            hostname: System::host_name().unwrap_or_default(),
            os: std::env::consts::OS.to_string(),
            platform_family: linux::read_platform_family_linux()
                .unwrap_or_else(|| platform.clone()),
            platform,
            platform_version: System::os_version().unwrap_or_default(),
            kernel_version: System::kernel_version().unwrap_or_default(),
            kernel_arch: System::cpu_arch(),
            uptime: System::uptime(),
            boot_time: System::boot_time(),
            procs: self.sys.processes().len() as u64,
        })
    }
}
