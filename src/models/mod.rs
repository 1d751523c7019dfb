// Point-in-time readings handed over by a metrics provider

mod cpu;
mod host;
mod network;
mod process;
mod storage;

pub use cpu::{CpuReading, MemoryReading};
pub use host::HostReading;
pub use network::{InterfaceReading, IoCounters};
pub use process::ProcessReading;
pub use storage::{DiskUsageReading, PartitionReading};
