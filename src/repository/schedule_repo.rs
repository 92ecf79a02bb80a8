// ==========================================
// 学位规划系统 - 规划方案仓储
// ==========================================
// 职责: degree_plan 表的 CRUD（课表以 JSON 快照保存）
// 红线: Repository 不含业务逻辑
// 并发: revision 乐观锁
// ==========================================

use crate::db::{ensure_schema, open_sqlite_connection};
use crate::domain::plan::SavedPlan;
use crate::domain::schedule::ScheduleSnapshot;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 方案列表项（不含课表快照）
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub plan_id: String,
    pub plan_name: String,
    pub major_id: Option<String>,
    pub revision: i32,
    pub updated_at: NaiveDateTime,
}

// ==========================================
// ScheduleRepository - 规划方案仓储
// ==========================================
pub struct ScheduleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ScheduleRepository {
    /// 打开数据库并确保表结构存在
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例（连接需已建表）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新建方案
    ///
    /// # 返回
    /// 新方案（plan_id 为 uuid v4，revision = 1）
    pub fn create(
        &self,
        plan_name: &str,
        major_id: Option<&str>,
        schedule: &ScheduleSnapshot,
    ) -> RepositoryResult<SavedPlan> {
        let plan_name = plan_name.trim();
        if plan_name.is_empty() {
            return Err(RepositoryError::ValidationError("方案名称不能为空".to_string()));
        }

        let now = now();
        let plan = SavedPlan {
            plan_id: Uuid::new_v4().to_string(),
            plan_name: plan_name.to_string(),
            major_id: major_id.map(str::to_string),
            schedule: schedule.clone(),
            revision: 1,
            created_at: now,
            updated_at: now,
        };

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO degree_plan (
                plan_id, plan_name, major_id, schedule_json, revision, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                plan.plan_id,
                plan.plan_name,
                plan.major_id,
                serde_json::to_string(&plan.schedule)?,
                plan.revision,
                plan.created_at.format(DATETIME_FORMAT).to_string(),
                plan.updated_at.format(DATETIME_FORMAT).to_string(),
            ],
        )?;

        debug!(plan_id = %plan.plan_id, plan_name = %plan.plan_name, "方案已创建");
        Ok(plan)
    }

    /// 按ID查询
    ///
    /// # 返回
    /// - Ok(Some(SavedPlan)): 找到方案
    /// - Ok(None): 未找到
    pub fn find_by_id(&self, plan_id: &str) -> RepositoryResult<Option<SavedPlan>> {
        let conn = self.get_conn()?;
        let row = conn
            .query_row(
                r#"
                SELECT plan_id, plan_name, major_id, schedule_json, revision, created_at, updated_at
                FROM degree_plan
                WHERE plan_id = ?1
                "#,
                params![plan_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, i32>(4)?,
                        parse_datetime(row, 5)?,
                        parse_datetime(row, 6)?,
                    ))
                },
            )
            .optional()?;

        let Some((plan_id, plan_name, major_id, schedule_json, revision, created_at, updated_at)) = row
        else {
            return Ok(None);
        };

        let schedule: ScheduleSnapshot = serde_json::from_str(&schedule_json)?;
        Ok(Some(SavedPlan {
            plan_id,
            plan_name,
            major_id,
            schedule,
            revision,
            created_at,
            updated_at,
        }))
    }

    /// 列出全部方案（按更新时间倒序）
    pub fn list(&self) -> RepositoryResult<Vec<PlanSummary>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT plan_id, plan_name, major_id, revision, updated_at
            FROM degree_plan
            ORDER BY updated_at DESC, plan_name ASC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PlanSummary {
                plan_id: row.get(0)?,
                plan_name: row.get(1)?,
                major_id: row.get(2)?,
                revision: row.get(3)?,
                updated_at: parse_datetime(row, 4)?,
            })
        })?;

        let mut plans = Vec::new();
        for row in rows {
            plans.push(row?);
        }
        Ok(plans)
    }

    /// 更新方案 (带乐观锁检查)
    ///
    /// # 返回
    /// 更新后的方案（revision + 1）
    ///
    /// # 错误
    /// - `RepositoryError::OptimisticLockFailure`: revision 不匹配（方案已被其他会话更新）
    /// - `RepositoryError::NotFound`: plan_id 不存在
    pub fn update(&self, plan: &SavedPlan) -> RepositoryResult<SavedPlan> {
        let conn = self.get_conn()?;
        let updated_at = now();

        let rows_affected = conn.execute(
            r#"UPDATE degree_plan
               SET plan_name = ?1, major_id = ?2, schedule_json = ?3,
                   updated_at = ?4, revision = revision + 1
               WHERE plan_id = ?5 AND revision = ?6"#,
            params![
                plan.plan_name,
                plan.major_id,
                serde_json::to_string(&plan.schedule)?,
                updated_at.format(DATETIME_FORMAT).to_string(),
                plan.plan_id,
                plan.revision,
            ],
        )?;

        if rows_affected == 0 {
            let actual: Option<i32> = conn
                .query_row(
                    "SELECT revision FROM degree_plan WHERE plan_id = ?1",
                    params![plan.plan_id],
                    |row| row.get(0),
                )
                .optional()?;

            return Err(match actual {
                Some(actual) => RepositoryError::OptimisticLockFailure {
                    plan_id: plan.plan_id.clone(),
                    expected: plan.revision,
                    actual,
                },
                None => RepositoryError::NotFound {
                    entity: "SavedPlan".to_string(),
                    id: plan.plan_id.clone(),
                },
            });
        }

        debug!(plan_id = %plan.plan_id, revision = plan.revision + 1, "方案已更新");
        Ok(SavedPlan {
            revision: plan.revision + 1,
            updated_at,
            ..plan.clone()
        })
    }

    /// 删除方案
    pub fn delete(&self, plan_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM degree_plan WHERE plan_id = ?1", params![plan_id])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "SavedPlan".to_string(),
                id: plan_id.to_string(),
            });
        }
        Ok(())
    }
}

fn now() -> NaiveDateTime {
    // 精确到秒，与存储格式一致
    let local = Local::now().naive_local();
    NaiveDateTime::parse_from_str(&local.format(DATETIME_FORMAT).to_string(), DATETIME_FORMAT)
        .unwrap_or(local)
}

fn parse_datetime(row: &Row<'_>, index: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(index)?;
    NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::{Schedule, ScheduleLayout};
    use tempfile::NamedTempFile;

    fn repo() -> (NamedTempFile, ScheduleRepository) {
        let file = NamedTempFile::new().unwrap();
        let repo = ScheduleRepository::new(file.path().to_str().unwrap()).unwrap();
        (file, repo)
    }

    #[test]
    fn test_create_and_find() {
        let (_file, repo) = repo();
        let mut schedule = Schedule::new(ScheduleLayout::default());
        schedule.select_course(0, 0, "CS 101");

        let created = repo.create("My Plan", Some("CSSE"), &schedule.to_snapshot()).unwrap();
        let loaded = repo.find_by_id(&created.plan_id).unwrap().unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.filled_slot_count(), 1);
        assert!(repo.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_update_with_stale_revision_fails() {
        let (_file, repo) = repo();
        let snapshot = Schedule::new(ScheduleLayout::default()).to_snapshot();
        let created = repo.create("Plan", None, &snapshot).unwrap();

        let updated = repo.update(&created).unwrap();
        assert_eq!(updated.revision, 2);

        match repo.update(&created) {
            Err(RepositoryError::OptimisticLockFailure { expected, actual, .. }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected lock failure, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_and_list() {
        let (_file, repo) = repo();
        let snapshot = Schedule::new(ScheduleLayout::default()).to_snapshot();
        let a = repo.create("A", None, &snapshot).unwrap();
        repo.create("B", Some("ME"), &snapshot).unwrap();

        assert_eq!(repo.list().unwrap().len(), 2);
        repo.delete(&a.plan_id).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
        assert!(matches!(
            repo.delete(&a.plan_id),
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(repo.create("  ", None, &snapshot).is_err());
    }
}
