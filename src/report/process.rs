// Process table section

use crate::config::ProcessTableConfig;
use crate::format::truncate_string;
use crate::models::ProcessReading;
use crate::provider::MetricsProvider;
use std::io::{self, Write};
use tracing::error;

const SEPARATOR_WIDTH: usize = 80;

/// A process with every metric the table needs.
struct Row<'a> {
    pid: u32,
    name: &'a str,
    cpu_percent: f32,
    memory_percent: f32,
    status: &'a str,
}

impl<'a> Row<'a> {
    /// `None` when name, CPU% or memory% could not be read.
    fn from_reading(p: &'a ProcessReading) -> Option<Self> {
        Some(Self {
            pid: p.pid,
            name: p.name.as_deref()?,
            cpu_percent: p.cpu_percent?,
            memory_percent: p.memory_percent?,
            status: p.status.as_deref().unwrap_or("unknown"),
        })
    }
}

/// Sort key for CPU%: NaN ranks below every real reading.
fn cpu_rank(cpu_percent: f32) -> f32 {
    if cpu_percent.is_nan() {
        f32::NEG_INFINITY
    } else {
        cpu_percent
    }
}

pub fn report_processes<P: MetricsProvider, W: Write>(
    provider: &mut P,
    out: &mut W,
    config: &ProcessTableConfig,
) -> io::Result<()> {
    writeln!(out, "=== Running Processes ===")?;

    let processes = match provider.processes() {
        Ok(p) => p,
        Err(e) => {
            error!(section = "processes", error = %e, "Error getting processes");
            return Ok(());
        }
    };

    writeln!(out, "Total Processes: {}", processes.len())?;
    writeln!(out)?;

    let name_col = config.name_width + 2;
    writeln!(out, "Top {} Processes by CPU Usage:", config.limit)?;
    writeln!(
        out,
        "{:<8} {:<name_col$} {:<10} {:<10} {}",
        "PID", "Name", "CPU%", "Memory%", "Status"
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    let mut rows: Vec<Row<'_>> = processes.iter().filter_map(Row::from_reading).collect();
    if config.sort_by_cpu {
        rows.sort_by(|a, b| cpu_rank(b.cpu_percent).total_cmp(&cpu_rank(a.cpu_percent)));
    }

    for row in rows.iter().take(config.limit) {
        writeln!(
            out,
            "{:<8} {:<name_col$} {:<10.2} {:<10.2} {}",
            row.pid,
            truncate_string(row.name, config.name_width),
            row.cpu_percent,
            row.memory_percent,
            row.status
        )?;
    }
    writeln!(out)
}
