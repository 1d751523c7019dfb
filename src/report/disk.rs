// Disk usage section

use crate::config::DiskConfig;
use crate::format::{format_bytes, usage_bar};
use crate::provider::MetricsProvider;
use std::io::{self, Write};
use tracing::{debug, error};

pub fn report_disk<P: MetricsProvider, W: Write>(
    provider: &mut P,
    out: &mut W,
    config: &DiskConfig,
) -> io::Result<()> {
    writeln!(out, "=== Disk Usage ===")?;

    let partitions = match provider.disk_partitions() {
        Ok(p) => p,
        Err(e) => {
            error!(section = "disk", error = %e, "Error getting disk partitions");
            return Ok(());
        }
    };

    for partition in &partitions {
        let usage = match provider.disk_usage(&partition.mount_point) {
            Ok(u) => u,
            Err(e) => {
                debug!(mount = %partition.mount_point, error = %e, "Skipping partition");
                continue;
            }
        };

        writeln!(out, "Mount Point: {}", partition.mount_point)?;
        writeln!(out, "  Device: {}", partition.device)?;
        writeln!(out, "  File System: {}", partition.fs_type)?;
        writeln!(out, "  Total: {}", format_bytes(usage.total))?;
        writeln!(
            out,
            "  Used: {} ({:.2}%) {}",
            format_bytes(usage.used),
            usage.used_percent,
            usage_bar(usage.used_percent, config.bar_width)
        )?;
        writeln!(out, "  Free: {}", format_bytes(usage.free))?;
        writeln!(out)?;
    }
    Ok(())
}
