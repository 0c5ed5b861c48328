use shared::config::Config;
use shared::models::AccountState;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

use crate::apr::compute_apr_with;
use crate::dynamic_props::DynamicProps;
use crate::error::WalletResult;
use crate::snapshot::{build_wallet_snapshot, WalletSnapshot};
use crate::source::{ChainDataSource, DynamicPropsCache};
use crate::transactions::{TransactionFormatter, TransactionRow};

/// Fetches chain data through a `ChainDataSource` and runs the derivations.
pub struct WalletService {
    source: Arc<dyn ChainDataSource>,
    cache: DynamicPropsCache,
    config: Config,
}

impl WalletService {
    pub fn new(source: Arc<dyn ChainDataSource>, config: Config) -> Self {
        Self {
            source,
            cache: DynamicPropsCache::new(),
            config,
        }
    }

    pub fn cache(&self) -> &DynamicPropsCache {
        &self.cache
    }

    /// Start the periodic props refresh configured in `sync`
    pub fn start_refresh(&self) -> JoinHandle<()> {
        let interval = Duration::from_secs(self.config.sync.props_refresh_interval_secs.max(1));
        self.cache.spawn_refresh(self.source.clone(), interval)
    }

    /// Cached props, fetching them on first use
    pub async fn props(&self) -> WalletResult<DynamicProps> {
        match self.cache.get().await {
            Some(props) => Ok(props),
            None => self.cache.refresh(self.source.as_ref()).await,
        }
    }

    pub async fn load_wallet(&self, name: &str, converting_amount: Option<f64>) -> WalletResult<WalletSnapshot> {
        let props = self.props().await?;
        let account = self.source.fetch_account(name).await?;
        let state = AccountState::loaded(account);

        info!("Loaded wallet for {}", name);
        Ok(build_wallet_snapshot(&state, &props, converting_amount))
    }

    /// One page of classified history; `limit` defaults to the configured page size.
    pub async fn load_history(
        &self,
        name: &str,
        cursor: i64,
        limit: Option<u32>,
    ) -> WalletResult<Vec<TransactionRow>> {
        let props = self.props().await?;
        let limit = limit.unwrap_or(self.config.sync.history_page_size);
        let records = self.source.fetch_ledger_history(name, cursor, limit).await?;

        let formatter = TransactionFormatter::new(&props, &self.config.symbols, name);
        Ok(formatter.classify(&records))
    }

    pub async fn apr(&self) -> WalletResult<f64> {
        let props = self.props().await?;
        Ok(compute_apr_with(&props, &self.config.inflation))
    }
}
