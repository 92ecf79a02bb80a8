// ==========================================
// 学位规划系统 - 配置层
// ==========================================
// 职责: 规划配置默认值 + config_kv 覆写
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod error;
pub mod planner_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager, PlannerConfigReader};
pub use error::{ConfigError, ConfigResult};
pub use planner_config::{default_db_path, PlannerConfig, DB_PATH_ENV};
