use anyhow::Context;
use portal_config::PortalConfig;
use portal_kv::PortalStore;

/// Store handle and configuration shared by store-backed commands.
pub struct AppContext {
    pub store: PortalStore,
    pub config: PortalConfig,
}

impl AppContext {
    pub async fn init(config: PortalConfig) -> anyhow::Result<Self> {
        let kv = portal_kv::connect(&config.kv)
            .await
            .context("failed to connect to the key-value store")?;
        tracing::debug!(backend = kv.backend_name(), "store connected");
        Ok(Self {
            store: PortalStore::new(kv),
            config,
        })
    }
}
