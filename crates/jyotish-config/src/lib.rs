use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ADDR_ENV: &str = "DASHA_SERVER_ADDR";

const CONFIG_PATHS: [&str; 2] = ["configs/server.toml", "../../configs/server.toml"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_periods: usize,
    pub display_periods: usize,
    pub default_years: u32,
    pub max_years: u32,
    pub records_path: Option<PathBuf>,
    /// File the settings came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_periods: default_max_periods(),
            display_periods: default_display_periods(),
            default_years: default_years(),
            max_years: default_max_years(),
            records_path: None,
            source: None,
        }
    }
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_periods == 0 {
            anyhow::bail!("dasha.max_periods must be at least 1");
        }
        if self.display_periods > self.max_periods {
            anyhow::bail!(
                "dasha.display_periods ({}) exceeds dasha.max_periods ({})",
                self.display_periods,
                self.max_periods
            );
        }
        if self.default_years == 0 || self.default_years > self.max_years {
            anyhow::bail!(
                "compare.default_years ({}) must be between 1 and compare.max_years ({})",
                self.default_years,
                self.max_years
            );
        }
        Ok(())
    }

    /// Apply a `host:port` override such as the value of [`ADDR_ENV`].
    pub fn override_addr(&mut self, addr: &str) -> anyhow::Result<()> {
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("Expected host:port, got {:?}", addr))?;
        self.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid port in {:?}: {e}", addr))?;
        self.host = host.to_string();
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_periods() -> usize {
    54
}

fn default_display_periods() -> usize {
    30
}

fn default_years() -> u32 {
    80
}

fn default_max_years() -> u32 {
    120
}

#[derive(Debug, Clone, Deserialize)]
struct ServerToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerToml {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DashaToml {
    #[serde(default = "default_max_periods")]
    max_periods: usize,
    #[serde(default = "default_display_periods")]
    display_periods: usize,
}

impl Default for DashaToml {
    fn default() -> Self {
        Self {
            max_periods: default_max_periods(),
            display_periods: default_display_periods(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CompareToml {
    #[serde(default = "default_years")]
    default_years: u32,
    #[serde(default = "default_max_years")]
    max_years: u32,
}

impl Default for CompareToml {
    fn default() -> Self {
        Self {
            default_years: default_years(),
            max_years: default_max_years(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StorageToml {
    #[serde(default)]
    records_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    server: ServerToml,
    #[serde(default)]
    dasha: DashaToml,
    #[serde(default)]
    compare: CompareToml,
    #[serde(default)]
    storage: StorageToml,
}

/// Try the usual relative locations of `configs/server.toml`.
pub fn read_server_toml_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    for p in CONFIG_PATHS {
        let path = Path::new(p);
        if !path.exists() {
            continue;
        }
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    Ok(None)
}

pub fn parse_server_settings(text: &str) -> anyhow::Result<ServerSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse server.toml: {e}"))?;
    let RootConfigToml {
        server,
        dasha,
        compare,
        storage,
    } = root;
    let settings = ServerSettings {
        host: server.host,
        port: server.port,
        max_periods: dasha.max_periods,
        display_periods: dasha.display_periods,
        default_years: compare.default_years,
        max_years: compare.max_years,
        records_path: storage.records_path,
        source: None,
    };
    settings.validate()?;
    Ok(settings)
}

/// Defaults when no config file exists; an unreadable or invalid file is an error.
pub fn load_server_settings() -> anyhow::Result<ServerSettings> {
    let mut settings = match read_server_toml_text()? {
        Some((path, text)) => {
            let mut settings = parse_server_settings(&text)?;
            settings.source = Some(path);
            settings
        }
        None => ServerSettings::default(),
    };
    if let Ok(addr) = std::env::var(ADDR_ENV) {
        settings.override_addr(&addr)?;
    }
    Ok(settings)
}
