use color_eyre::eyre::WrapErr;
use color_eyre::{Help, Result};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL 连接配置
///
/// 优先使用 `DATABASE_URL`，未设置时由 `DB_HOST`/`DB_PORT`/`DB_NAME`/`DB_USER`/`DB_PASSWORD` 组合
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 完整的postgresql链接字符串（可选）
    pub url: Option<String>,

    pub host: String,

    pub port: u16,

    /// 数据库名称
    pub name: String,

    pub user: String,

    pub password: String,

    /// 连接池最大连接数
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,

    /// 启动时是否执行 `migrations/` 下的迁移脚本
    pub run_migrations: bool,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,

    /// HTTP 监听地址
    pub host: String,

    /// HTTP 监听端口，对应环境变量 `PORT`
    pub port: u16,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(err) = dotenvy::dotenv() {
            debug!("未加载 .env 文件: {err}");
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 根据传入的查找函数构建配置
    ///
    /// `lookup` 返回 `None` 时使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host: text("DB_HOST", "localhost"),
            port: parse_or(&lookup, "DB_PORT", 5432)?,
            name: text("DB_NAME", "express_crud"),
            user: text("DB_USER", "postgres"),
            password: text("DB_PASSWORD", "postgres"),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
        };

        Ok(AppConfig {
            database,
            host: text("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 3000)?,
        })
    }

    /// HTTP 服务绑定地址，例如 `0.0.0.0:3000`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid value for {key}: {raw:?}"))
            .suggestion(format!("检查环境变量 {key} 的取值")),
    }
}
