// Live sysinfo provider smoke tests (values depend on the host; only shape is checked)

use std::time::{Duration, Instant};
use vioinfo::provider::{MetricsProvider, ProviderError};
use vioinfo::sysinfo_repo::SysinfoRepo;

#[test]
fn test_memory_reading_is_consistent() {
    let mut repo = SysinfoRepo::new();
    if let Ok(mem) = repo.virtual_memory() {
        assert!(mem.total > 0);
        assert!(mem.used <= mem.total);
        assert!(mem.available <= mem.total);
        assert!((0.0..=100.0).contains(&mem.used_percent));
    }
}

#[test]
fn test_cpu_usage_matches_cpu_list() {
    let mut repo = SysinfoRepo::new();
    if let (Ok(cpus), Ok(usage)) = (repo.cpu_info(), repo.cpu_percent()) {
        assert!(!cpus.is_empty());
        assert_eq!(cpus.len(), usage.len());
        assert!(cpus.iter().all(|c| !c.model.is_empty()));
    }
}

#[test]
fn test_cpu_percent_samples_a_full_interval_after_cpu_info() {
    let interval = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;
    let mut repo = SysinfoRepo::new();
    // Let the construction-time baseline nearly expire before listing cpus
    std::thread::sleep(interval.saturating_sub(Duration::from_millis(20)));
    if repo.cpu_info().is_err() {
        return;
    }
    let listed_at = Instant::now();
    let _ = repo.cpu_percent();
    assert!(
        listed_at.elapsed() >= interval * 9 / 10,
        "usage sampled over {:?}, expected about {:?}",
        listed_at.elapsed(),
        interval
    );
}

#[test]
fn test_processes_are_in_pid_order() {
    let mut repo = SysinfoRepo::new();
    if let Ok(processes) = repo.processes() {
        assert!(processes.windows(2).all(|w| w[0].pid <= w[1].pid));
        assert!(processes.iter().any(|p| p.pid == std::process::id()));
    }
}

#[test]
fn test_unknown_mount_point_is_not_found() {
    let mut repo = SysinfoRepo::new();
    let _ = repo.disk_partitions();
    let err = repo
        .disk_usage("/definitely/not/a/mount/point")
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { .. }));
    assert!(err.to_string().contains("/definitely/not/a/mount/point"));
}

#[test]
fn test_known_partitions_have_usage() {
    let mut repo = SysinfoRepo::new();
    let partitions = repo.disk_partitions().unwrap_or_default();
    for partition in partitions {
        let usage = repo
            .disk_usage(&partition.mount_point)
            .expect("listed partition has usage");
        assert!(usage.used <= usage.total);
    }
}

#[test]
fn test_host_info_reports_uptime_and_arch() {
    let mut repo = SysinfoRepo::new();
    let host = repo.host_info().expect("host_info");
    assert_eq!(host.os, std::env::consts::OS);
    assert!(!host.kernel_arch.is_empty());
    assert!(host.procs > 0);
}
