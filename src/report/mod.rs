// Report driver: banner, title and the six sections in order

mod cpu;
mod disk;
mod host;
mod network;
mod process;

pub use cpu::{report_cpu, report_memory};
pub use disk::report_disk;
pub use host::report_host;
pub use network::report_network;
pub use process::report_processes;

use crate::config::{OutputConfig, ReportConfig};
use crate::provider::MetricsProvider;
use std::io::{self, Write};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const BANNER: &str = r#"
 ___      ___ ___  ________          ___  ________   ________ ________     
|\  \    /  /|\  \|\   __  \        |\  \|\   ___  \|\  _____\\   __  \    
\ \  \  /  / | \  \ \  \|\  \       \ \  \ \  \\ \  \ \  \__/\ \  \|\  \   
 \ \  \/  / / \ \  \ \  \\\  \       \ \  \ \  \\ \  \ \   __\\ \  \\\  \  
  \ \    / /   \ \  \ \  \\\  \       \ \  \ \  \\ \  \ \  \_| \ \  \\\  \ 
   \ \__/ /     \ \__\ \_______\       \ \__\ \__\\ \__\ \__\   \ \_______\
    \|__|/       \|__|\|_______|        \|__|\|__| \|__|\|__|    \|_______|
                                                                           
                                                                           
"#;

pub fn print_banner<W: Write>(out: &mut W, config: &OutputConfig) -> io::Result<()> {
    if config.color {
        write!(out, "{}{}{}", RED, BANNER, RESET)
    } else {
        write!(out, "{}", BANNER)
    }
}

/// Print the full report. Provider failures only cost their own section;
/// an error is returned only when `out` itself cannot be written.
pub fn run_report<P: MetricsProvider, W: Write>(
    provider: &mut P,
    out: &mut W,
    config: &ReportConfig,
) -> io::Result<()> {
    if config.report.banner {
        print_banner(out, &config.report)?;
    }
    writeln!(out, "=== System Information Tool ===")?;
    writeln!(out)?;

    report_cpu(provider, out)?;
    report_memory(provider, out)?;
    report_disk(provider, out, &config.disk)?;
    report_processes(provider, out, &config.processes)?;
    report_network(provider, out)?;
    report_host(provider, out)?;
    out.flush()
}
