// Host identity and uptime section

use crate::format::{format_timestamp, format_uptime};
use crate::provider::MetricsProvider;
use crate::version;
use std::io::{self, Write};
use tracing::error;

pub fn report_host<P: MetricsProvider, W: Write>(provider: &mut P, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== System Information ===")?;

    let host = match provider.host_info() {
        Ok(h) => h,
        Err(e) => {
            error!(section = "host", error = %e, "Error getting host info");
            return Ok(());
        }
    };

    writeln!(out, "Hostname: {}", host.hostname)?;
    writeln!(out, "OS: {} {}", host.os, host.platform)?;
    writeln!(out, "Platform Family: {}", host.platform_family)?;
    writeln!(out, "Platform Version: {}", host.platform_version)?;
    writeln!(out, "Kernel Version: {}", host.kernel_version)?;
    writeln!(out, "Architecture: {}", host.kernel_arch)?;
    writeln!(out, "Uptime: {}", format_uptime(host.uptime))?;
    writeln!(
        out,
        "Boot Time: {}",
        format_timestamp(host.boot_time, &chrono::Local)
    )?;
    writeln!(out, "Procs: {}", host.procs)?;
    writeln!(out, "Build: {} {}", version::NAME, version::VERSION)?;
    writeln!(out, "Target OS: {}", std::env::consts::OS)?;
    writeln!(out, "Target Architecture: {}", std::env::consts::ARCH)?;
    writeln!(out)
}
