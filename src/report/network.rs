// Network interfaces and I/O counters

use crate::format::format_bytes;
use crate::provider::MetricsProvider;
use std::io::{self, Write};
use tracing::error;

pub fn report_network<P: MetricsProvider, W: Write>(
    provider: &mut P,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "=== Network Interface Information ===")?;

    let interfaces = match provider.net_interfaces() {
        Ok(i) => i,
        Err(e) => {
            error!(section = "network", error = %e, "Error getting network interfaces");
            return Ok(());
        }
    };

    for iface in interfaces.iter().filter(|i| !i.addrs.is_empty()) {
        writeln!(out, "Interface: {}", iface.name)?;
        writeln!(out, "  Hardware Address: {}", iface.hardware_addr)?;
        writeln!(out, "  MTU: {}", iface.mtu)?;
        writeln!(out, "  Flags: [{}]", iface.flags.join(" "))?;
        for addr in &iface.addrs {
            writeln!(out, "  Address: {}", addr)?;
        }
        writeln!(out)?;
    }

    let io = match provider.net_io_counters() {
        Ok(c) => c,
        Err(e) => {
            error!(section = "network", error = %e, "Error getting network I/O");
            return Ok(());
        }
    };

    writeln!(out, "Network I/O Statistics:")?;
    writeln!(out, "  Bytes Sent: {}", format_bytes(io.bytes_sent))?;
    writeln!(out, "  Bytes Received: {}", format_bytes(io.bytes_recv))?;
    writeln!(out, "  Packets Sent: {}", io.packets_sent)?;
    writeln!(out, "  Packets Received: {}", io.packets_recv)?;
    writeln!(out, "  Errors In: {}", io.errin)?;
    writeln!(out, "  Errors Out: {}", io.errout)?;
    writeln!(out, "  Drops In: {}", io.dropin)?;
    writeln!(out, "  Drops Out: {}", io.dropout)?;
    writeln!(out)
}
