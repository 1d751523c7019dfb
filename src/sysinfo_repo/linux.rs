// Linux-specific helpers: /proc/cpuinfo, /etc/os-release, /sys/class/net.

/// Value of the first `key : value` line in /proc/cpuinfo-style content.
fn cpuinfo_field<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content.lines().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        if k.trim() != key {
            return None;
        }
        Some(v.trim()).filter(|v| !v.is_empty())
    })
}

/// Value of `KEY=value` in os-release content, with surrounding quotes stripped.
fn os_release_field<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content.lines().find_map(|line| {
        let v = line.strip_prefix(key)?.strip_prefix('=')?;
        Some(v.trim().trim_matches('"')).filter(|v| !v.is_empty())
    })
}

const IFF_UP: u32 = 0x1;

/// Names for the `IFF_*` bits of /sys/class/net/<iface>/flags.
const IFF_NAMES: [(u32, &str); 5] = [
    (IFF_UP, "up"),
    (0x2, "broadcast"),
    (0x8, "loopback"),
    (0x10, "pointtopoint"),
    (0x1000, "multicast"),
];

/// sysfs `flags` never carries IFF_RUNNING; the kernel derives it from an up
/// device whose operstate is `up` or `unknown` (loopback reports the latter).
fn decode_iff_flags(bits: u32, operstate: Option<&str>) -> Vec<String> {
    let mut flags: Vec<String> = IFF_NAMES
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|(_, name)| name.to_string())
        .collect();
    if bits & IFF_UP != 0 && matches!(operstate.map(str::trim), Some("up" | "unknown")) {
        flags.push("running".to_string());
    }
    flags
}

/// Parse "0x1003"-style hex from sysfs.
fn parse_hex_flags(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u32::from_str_radix(digits, 16).ok()
}

/// First "model name" from /proc/cpuinfo. sysinfo sometimes only knows "cpu0".
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        return cpuinfo_field(&content, "model name")
            .filter(|s| *s != "cpu0")
            .map(str::to_string);
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Distro family from /etc/os-release: first word of ID_LIKE, else ID.
pub(super) fn read_platform_family_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/etc/os-release").ok()?;
        return os_release_field(&content, "ID_LIKE")
            .and_then(|v| v.split_whitespace().next())
            .or_else(|| os_release_field(&content, "ID"))
            .map(str::to_string);
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// MTU from /sys/class/net/<interface>/mtu, or 0 if unavailable.
pub(super) fn read_interface_mtu(interface_name: &str) -> u64 {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/mtu", interface_name);
        if let Ok(content) = std::fs::read_to_string(&path)
            && let Ok(mtu) = content.trim().parse::<u64>()
        {
            return mtu;
        }
    }
    0
}

/// Decoded interface flags from /sys/class/net/<interface>/flags.
pub(super) fn read_interface_flags(interface_name: &str) -> Vec<String> {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/flags", interface_name);
        if let Some(bits) = std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| parse_hex_flags(&s))
        {
            let operstate =
                std::fs::read_to_string(format!("/sys/class/net/{}/operstate", interface_name))
                    .ok();
            return decode_iff_flags(bits, operstate.as_deref());
        }
    }
    Vec::new()
}

/// (rx_dropped, tx_dropped) from /sys/class/net/<interface>/statistics.
pub(super) fn read_interface_drops(interface_name: &str) -> (u64, u64) {
    #[cfg(target_os = "linux")]
    {
        let read = |counter: &str| {
            std::fs::read_to_string(format!(
                "/sys/class/net/{}/statistics/{}",
                interface_name, counter
            ))
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(0)
        };
        return (read("rx_dropped"), read("tx_dropped"));
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = interface_name;
        (0, 0)
    }
}
