// CPU and memory sections

use crate::format::format_bytes;
use crate::provider::MetricsProvider;
use std::io::{self, Write};
use tracing::error;

pub fn report_cpu<P: MetricsProvider, W: Write>(provider: &mut P, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== CPU Information ===")?;

    let cpus = match provider.cpu_info() {
        Ok(c) => c,
        Err(e) => {
            error!(section = "cpu", error = %e, "Error getting CPU info");
            return Ok(());
        }
    };
    let usage = match provider.cpu_percent() {
        Ok(u) => u,
        Err(e) => {
            error!(section = "cpu", error = %e, "Error getting CPU usage");
            return Ok(());
        }
    };

    for (i, cpu) in cpus.iter().enumerate() {
        writeln!(out, "CPU {}:", i + 1)?;
        writeln!(out, "  Model: {}", cpu.model)?;
        writeln!(out, "  Cores: {}", cpu.cores)?;
        match usage.get(i) {
            Some(pct) => writeln!(out, "  Usage: {:.2}%", pct)?,
            None => writeln!(out, "  Usage: n/a")?,
        }
        writeln!(out, "  Architecture: {}", std::env::consts::ARCH)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn report_memory<P: MetricsProvider, W: Write>(
    provider: &mut P,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "=== Memory Information ===")?;

    let mem = match provider.virtual_memory() {
        Ok(m) => m,
        Err(e) => {
            error!(section = "memory", error = %e, "Error getting memory info");
            return Ok(());
        }
    };

    writeln!(out, "Total Memory: {}", format_bytes(mem.total))?;
    writeln!(
        out,
        "Used Memory: {} ({:.2}%)",
        format_bytes(mem.used),
        mem.used_percent
    )?;
    writeln!(out, "Available Memory: {}", format_bytes(mem.available))?;
    writeln!(out, "Free Memory: {}", format_bytes(mem.free))?;
    if mem.swap_total > 0 {
        writeln!(
            out,
            "Swap: {} / {}",
            format_bytes(mem.swap_used),
            format_bytes(mem.swap_total)
        )?;
    }
    writeln!(out)
}
