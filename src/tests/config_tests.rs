#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig, PoolConfig};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.pool.max_pooled.is_none());
        assert_eq!(config.pool.capacity_ceiling_bytes, 65536);
        assert_eq!(config.pool.default_path_capacity, 260);
    }

    #[test]
    fn test_effective_max_pooled_uses_parallelism() {
        let config = PoolConfig::default();
        assert_eq!(config.effective_max_pooled(), 4 * num_cpus::get());
        let config = PoolConfig { max_pooled: Some(7), ..PoolConfig::default() };
        assert_eq!(config.effective_max_pooled(), 7);
    }

    // Environment mutation and plain loading live in one test so the shared
    // process environment is not racing between test threads.
    #[test]
    fn test_load_and_env_override() {
        let result = config::load();
        assert!(result.is_ok());

        std::env::set_var("PFADKERN__POOL__DEFAULT_PATH_CAPACITY", "0");
        let result = config::load();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("default_path_capacity"));
        std::env::remove_var("PFADKERN__POOL__DEFAULT_PATH_CAPACITY");
    }
}
