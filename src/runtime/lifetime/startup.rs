use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 写入演示数据
/// 仅在开启 seed_demo 且数据库中没有任何表单时执行
pub async fn seed_demo(storage: &Arc<dyn Storage>) {
    if !AppConfig::get().app.seed_demo {
        debug!("Demo seed disabled by configuration");
        return;
    }

    match storage.count_forms().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} form(s), skipping demo seed", count);
            return;
        }
        Ok(_) => {
            info!("No forms found in database, seeding demo data...");
        }
        Err(e) => {
            warn!("Failed to count forms: {}, skipping demo seed", e);
            return;
        }
    }

    match storage.seed_demo_data().await {
        Ok(()) => info!("Demo data seeded successfully"),
        Err(e) => warn!("Failed to seed demo data: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化、数据库迁移和演示数据
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    seed_demo(&storage).await;

    StartupContext { storage }
}
