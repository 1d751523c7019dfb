use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use vioinfo::config::ReportConfig;
use vioinfo::report;
use vioinfo::sysinfo_repo::SysinfoRepo;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfig::load_or_default();

    let mut provider = SysinfoRepo::new();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    // Exit status stays 0 even when stdout goes away (e.g. closed pipe)
    if let Err(e) = report::run_report(&mut provider, &mut out, &config) {
        tracing::error!(error = %e, "Failed to write report");
    }
}
