use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{AccountRecord, LedgerRecord};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::dynamic_props::DynamicProps;
use crate::error::WalletResult;

/// Where accounts, network constants and history pages come from. The
/// derivations never call this themselves; it is the I/O seam in front of
/// them.
#[async_trait]
pub trait ChainDataSource: Send + Sync {
    async fn fetch_dynamic_props(&self) -> shared::Result<DynamicProps>;

    async fn fetch_account(&self, name: &str) -> shared::Result<AccountRecord>;

    /// History page ending at `cursor` (-1 for the latest), at most `limit` rows
    async fn fetch_ledger_history(
        &self,
        name: &str,
        cursor: i64,
        limit: u32,
    ) -> shared::Result<Vec<LedgerRecord>>;
}

#[derive(Debug, Clone)]
struct CachedProps {
    props: DynamicProps,
    fetched_at: DateTime<Utc>,
}

/// Latest dynamic props, shared between readers and a refresh task.
#[derive(Clone, Default)]
pub struct DynamicPropsCache {
    inner: Arc<RwLock<Option<CachedProps>>>,
}

impl DynamicPropsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<DynamicProps> {
        self.inner.read().await.as_ref().map(|cached| cached.props.clone())
    }

    pub async fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.as_ref().map(|cached| cached.fetched_at)
    }

    pub async fn set(&self, props: DynamicProps) {
        *self.inner.write().await = Some(CachedProps {
            props,
            fetched_at: Utc::now(),
        });
    }

    /// Fetch fresh props and store them. On failure the previous value is
    /// kept and the error returned.
    pub async fn refresh(&self, source: &dyn ChainDataSource) -> WalletResult<DynamicProps> {
        let props = source.fetch_dynamic_props().await?;
        debug!("Refreshed dynamic props at block {}", props.head_block);
        self.set(props.clone()).await;
        Ok(props)
    }

    /// Refresh every `interval` until the returned task is aborted.
    pub fn spawn_refresh(&self, source: Arc<dyn ChainDataSource>, interval: Duration) -> JoinHandle<()> {
        let cache = self.clone();
        info!("Starting dynamic props refresh every {:?}", interval);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = cache.refresh(source.as_ref()).await {
                    warn!("Dynamic props refresh failed, keeping last value: {}", e);
                }
            }
        })
    }
}
