//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod answers;
mod assignments;
mod seed;
mod surveys;

use crate::config::AppConfig;
use crate::errors::{MysteryShopperError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::resolve_database_url(&config.database.url)?;
        Self::connect(&db_url, config).await
    }

    /// 连接数据库并运行迁移
    pub(crate) async fn connect(db_url: &str, config: &AppConfig) -> Result<Self> {
        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(db_url, config).await?
        } else {
            Self::connect_generic(db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("Survey storage ready: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // create_if_missing 不会创建目录
        if let Some(dir) = Self::sqlite_parent_dir(url) {
            std::fs::create_dir_all(dir).map_err(|e| {
                MysteryShopperError::database_config(format!(
                    "无法创建数据库目录 {}: {e}",
                    dir.display()
                ))
            })?;
        }

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| MysteryShopperError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .pragma("cache_size", "-16000")
            .pragma("temp_store", "memory");

        // 内存库的每个连接都是独立的数据库，只能保留唯一一个常驻连接
        let in_memory = url.contains(":memory:");
        let (max_connections, idle_timeout) = if in_memory {
            (1, None)
        } else {
            (config.database.pool_size, Some(Duration::from_secs(300)))
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(idle_timeout)
            .max_lifetime(if in_memory { None } else { Some(Duration::from_secs(1800)) })
            .connect_with(opt)
            .await
            .map_err(|e| MysteryShopperError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| MysteryShopperError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从配置推断数据库类型，裸文件路径补全为 sqlite URL
    fn resolve_database_url(url: &str) -> Result<String> {
        let url = url.trim();
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if ["postgres://", "postgresql://", "mysql://", "mariadb://"]
            .iter()
            .any(|scheme| url.starts_with(scheme))
        {
            Ok(url.to_string())
        } else {
            Err(MysteryShopperError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 文件型 SQLite 的所在目录，内存库返回 None
    fn sqlite_parent_dir(url: &str) -> Option<&Path> {
        let path = url.strip_prefix("sqlite://")?;
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path.starts_with(":memory:") {
            return None;
        }
        Path::new(path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::Assignment, requests::AssignmentListQuery, responses::AssignmentPage,
    },
    client::requests::ClientAssignmentQuery,
    scoring::entities::{RecordedAnswer, ScoringModule, ScoringQuestion},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 计分模块
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_modules_by_form(&self, form_id: i64) -> Result<Vec<ScoringModule>> {
        self.list_modules_by_form_impl(form_id).await
    }

    async fn list_questions_by_module(&self, module_id: i64) -> Result<Vec<ScoringQuestion>> {
        self.list_questions_by_module_impl(module_id).await
    }

    async fn list_answers_for_questions(
        &self,
        assignment_id: i64,
        question_ids: &[i64],
    ) -> Result<Vec<RecordedAnswer>> {
        self.list_answers_for_questions_impl(assignment_id, question_ids)
            .await
    }

    // 分配模块
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentPage> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn list_client_assignments(
        &self,
        query: ClientAssignmentQuery,
    ) -> Result<Vec<Assignment>> {
        self.list_client_assignments_impl(query).await
    }

    // 系统模块
    async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| MysteryShopperError::database_connection(format!("数据库不可用: {e}")))
    }

    async fn count_forms(&self) -> Result<u64> {
        self.count_forms_impl().await
    }

    async fn seed_demo_data(&self) -> Result<()> {
        self.seed_demo_data_impl().await
    }
}

/// 测试用的 SQLite 内存库，已完成迁移
#[cfg(test)]
pub(crate) async fn in_memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect("sqlite::memory:", AppConfig::get())
        .await
        .expect("in-memory sqlite should migrate")
}
