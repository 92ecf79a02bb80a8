// ==========================================
// 学位规划系统 - 配置层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("配置快照格式错误: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("锁获取失败: {0}")]
    LockError(String),

    #[error("配置值无效: {key} = {value}")]
    InvalidValue { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
