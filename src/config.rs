use serde::Deserialize;

/// Tuning knobs for the shared buffer pool and the invocation adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of buffers the pool retains. Defaults to four times
    /// the available parallelism when unset.
    pub max_pooled: Option<usize>,
    /// Buffers larger than this (in bytes) are freed on release instead of
    /// being pooled.
    pub capacity_ceiling_bytes: u64,
    /// Initial character-capacity guess for path-shaped results.
    pub default_path_capacity: u32,
}

impl PoolConfig {
    /// The retention limit with the parallelism-based default applied.
    pub fn effective_max_pooled(&self) -> usize {
        self.max_pooled.unwrap_or_else(|| 4 * num_cpus::get())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        // Mirror defaults from config/default.toml
        Self { max_pooled: None, capacity_ceiling_bytes: 65536, default_path_capacity: 260 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub pool: PoolConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig { pool: PoolConfig::default() }
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let defaults: &str = include_str!("../config/default.toml");
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
        // Optional local file: pfadkern.toml (in CWD)
        .add_source(::config::File::with_name("pfadkern").required(false));

    if let Ok(custom_path) = std::env::var("PFADKERN_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("PFADKERN").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.pool.capacity_ceiling_bytes == 0 {
        return Err(anyhow::anyhow!("pool.capacity_ceiling_bytes must be > 0"));
    }
    if cfg.pool.default_path_capacity == 0 {
        return Err(anyhow::anyhow!("pool.default_path_capacity must be > 0"));
    }
    if let Some(m) = cfg.pool.max_pooled {
        if m == 0 || m > 1024 {
            return Err(anyhow::anyhow!("pool.max_pooled must be in 1..=1024 when set"));
        }
    }
    Ok(())
}
