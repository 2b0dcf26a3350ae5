//! Application state wiring all services together.
//!
//! The draft store is generic over its repository; AppState pins it to the
//! SQLite-backed key-value store.

use std::path::PathBuf;
use std::sync::Arc;

use storefront_core::draft::store::DraftProductStore;
use storefront_core::storage::draft_repository::KvDraftRepository;
use storefront_infra::filesystem::database_url;
use storefront_infra::sqlite::kv::SqliteKvStore;
use storefront_infra::sqlite::pool::DatabasePool;
use storefront_types::config::StorefrontConfig;

/// Concrete type alias for the draft store pinned to infra implementations.
pub type ConcreteDraftStore = DraftProductStore<KvDraftRepository<SqliteKvStore>>;

/// Shared application state used by the CLI commands.
#[derive(Clone)]
pub struct AppState {
    pub draft_store: Arc<ConcreteDraftStore>,
    pub config: StorefrontConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init(data_dir: PathBuf, config: StorefrontConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_pool = DatabasePool::new(&database_url(&data_dir, &config.database_file)).await?;

        let repo = KvDraftRepository::with_key(SqliteKvStore::new(db_pool), config.storage_key.clone());
        let draft_store = DraftProductStore::new(repo);

        Ok(Self {
            draft_store: Arc::new(draft_store),
            config,
            data_dir,
        })
    }
}
