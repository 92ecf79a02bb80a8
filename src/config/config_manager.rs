// ==========================================
// 学位规划系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value + scope)，目前仅使用 global scope
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::planner_config::PlannerConfig;
use crate::db::{ensure_schema, open_sqlite_connection};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

// ==========================================
// PlannerConfigReader Trait
// ==========================================
// 用途: 上层读取规划配置的接口（便于测试替换实现）
#[async_trait]
pub trait PlannerConfigReader: Send + Sync {
    /// 读取完整规划配置（缺失项取默认值）
    async fn load_planner_config(&self) -> ConfigResult<PlannerConfig>;
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager（连接需已建表）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| ConfigError::LockError(e.to_string()))?;
            crate::db::configure_sqlite_connection(&guard)?;
        }
        Ok(Self { conn })
    }

    fn lock(&self) -> ConfigResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }

    /// 读取 global scope 配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = self.lock()?;
        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 写入 global scope 配置值（存在则覆盖）
    pub fn set_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        debug!(key, value, "配置已写入");
        Ok(())
    }

    /// 删除 global scope 配置值，返回是否存在
    pub fn remove_config_value(&self, key: &str) -> ConfigResult<bool> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "DELETE FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
        )?;
        Ok(affected > 0)
    }

    /// 获取所有 global 配置的快照（JSON 格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&config_map)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// 恢复的配置项数量
    ///
    /// # 注意
    /// 快照中的键会覆盖现有 global 配置；快照外的键保持不变
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<usize> {
        let config_map: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut count = 0;
        for (key, value) in &config_map {
            count += tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
                params![key, value],
            )?;
        }
        tx.commit()?;

        Ok(count)
    }

    // ==========================================
    // 类型化读取
    // ==========================================

    /// 读取并解析配置；缺失取默认值，解析失败告警并取默认值
    fn get_parsed_or_default<T>(&self, key: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
    {
        match self.get_config_value(key)? {
            None => Ok(default),
            Some(raw) => match raw.trim().parse::<T>() {
                Ok(value) => Ok(value),
                Err(_) => {
                    warn!(config_key = key, raw_value = %raw, "配置值解析失败，使用默认值");
                    Ok(default)
                }
            },
        }
    }

    /// 逗号分隔列表；缺失或为空时取默认值
    fn get_list_or_default(&self, key: &str, default: Vec<String>) -> ConfigResult<Vec<String>> {
        let Some(raw) = self.get_config_value(key)? else {
            return Ok(default);
        };
        let items: Vec<String> = raw
            .split(',')
            .map(|item| item.trim().to_uppercase())
            .filter(|item| !item.is_empty())
            .collect();

        if items.is_empty() {
            warn!(config_key = key, raw_value = %raw, "列表配置为空，使用默认值");
            return Ok(default);
        }
        Ok(items)
    }

    /// 读取完整规划配置
    pub fn get_planner_config(&self) -> ConfigResult<PlannerConfig> {
        let defaults = PlannerConfig::default();

        let mut credit_tolerance =
            self.get_parsed_or_default(config_keys::CREDIT_TOLERANCE, defaults.credit_tolerance)?;
        if !credit_tolerance.is_finite() || credit_tolerance < 0.0 {
            warn!(credit_tolerance, "学分容差无效，使用默认值");
            credit_tolerance = defaults.credit_tolerance;
        }

        let locale = self
            .get_config_value(config_keys::LOCALE)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.locale);

        Ok(PlannerConfig {
            base_slots_per_semester: self.get_parsed_or_default(
                config_keys::BASE_SLOTS_PER_SEMESTER,
                defaults.base_slots_per_semester,
            )?,
            default_semester_count: self.get_parsed_or_default(
                config_keys::DEFAULT_SEMESTER_COUNT,
                defaults.default_semester_count,
            )?,
            min_semester_count: self
                .get_parsed_or_default(config_keys::MIN_SEMESTER_COUNT, defaults.min_semester_count)?,
            credit_tolerance,
            humanities_departments: self.get_list_or_default(
                config_keys::HUMANITIES_DEPARTMENTS,
                defaults.humanities_departments,
            )?,
            engineering_departments: self.get_list_or_default(
                config_keys::ENGINEERING_DEPARTMENTS,
                defaults.engineering_departments,
            )?,
            locale,
        })
    }
}

// ==========================================
// PlannerConfigReader Trait 实现
// ==========================================
#[async_trait]
impl PlannerConfigReader for ConfigManager {
    async fn load_planner_config(&self) -> ConfigResult<PlannerConfig> {
        self.get_planner_config()
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 课表布局
    pub const BASE_SLOTS_PER_SEMESTER: &str = "base_slots_per_semester";
    pub const DEFAULT_SEMESTER_COUNT: &str = "default_semester_count";
    pub const MIN_SEMESTER_COUNT: &str = "min_semester_count";

    // 学分归集
    pub const CREDIT_TOLERANCE: &str = "credit_tolerance";
    pub const HUMANITIES_DEPARTMENTS: &str = "humanities_departments"; // 逗号分隔
    pub const ENGINEERING_DEPARTMENTS: &str = "engineering_departments"; // 逗号分隔

    // 界面
    pub const LOCALE: &str = "locale";
}
