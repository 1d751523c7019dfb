use serde::Deserialize;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vioinfo.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub report: OutputConfig,
    pub processes: ProcessTableConfig,
    pub disk: DiskConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the ASCII banner before the report.
    pub banner: bool,
    /// Wrap the banner in ANSI color codes.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            banner: true,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessTableConfig {
    /// Max rows in the process table.
    pub limit: usize,
    /// Rank by CPU% (descending) before cutting to `limit`; off keeps enumeration order.
    pub sort_by_cpu: bool,
    /// Max characters of a process name; the column is two wider.
    pub name_width: usize,
}

impl Default for ProcessTableConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            sort_by_cpu: false,
            name_width: 18,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    pub bar_width: usize,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self { bar_width: 20 }
    }
}

impl ReportConfig {
    /// Load from `CONFIG_FILE` (or [`DEFAULT_CONFIG_FILE`]). A missing file yields defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Self::load_from_path(std::path::Path::new(&path))
    }

    /// [`Self::load`], falling back to defaults when the file is unreadable or invalid.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid config, using defaults");
            Self::default()
        })
    }

    pub fn load_from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("reading {}: {}", path.display(), e)),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: ReportConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.processes.limit > 0,
            "processes.limit must be > 0, got {}",
            self.processes.limit
        );
        anyhow::ensure!(
            self.processes.name_width > 0,
            "processes.name_width must be > 0, got {}",
            self.processes.name_width
        );
        anyhow::ensure!(
            self.disk.bar_width > 0,
            "disk.bar_width must be > 0, got {}",
            self.disk.bar_width
        );
        Ok(())
    }
}
