// Process table entry

/// A process seen during enumeration.
///
/// Each metric is read independently; `None` means that accessor failed
/// (typically because the process exited mid-enumeration).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessReading {
    pub pid: u32,
    pub name: Option<String>,
    pub cpu_percent: Option<f32>,
    pub memory_percent: Option<f32>,
    pub status: Option<String>,
}
