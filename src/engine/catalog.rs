// ==========================================
// 学位规划系统 - 课程目录索引
// ==========================================
// 职责: 规范代码 → 课程记录 的只读索引
// 红线: 查不到返回 None，不报错
// ==========================================

use crate::domain::course::{canonical_code, CourseRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

// ==========================================
// CatalogIndex - 课程目录索引
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    records: Vec<CourseRecord>,
    by_code: HashMap<String, usize>,
}

impl CatalogIndex {
    /// 构建索引
    ///
    /// 规范代码重复时保留第一条记录
    ///
    /// # 参数
    /// - `records`: 已归一化的课程记录
    pub fn new(records: impl IntoIterator<Item = CourseRecord>) -> Self {
        let mut index = Self::default();

        for record in records {
            if record.canonical_code.is_empty() {
                continue;
            }
            if index.by_code.contains_key(&record.canonical_code) {
                warn!(
                    code = %record.code,
                    canonical = %record.canonical_code,
                    "课程代码重复，保留首条记录"
                );
                continue;
            }
            index
                .by_code
                .insert(record.canonical_code.clone(), index.records.len());
            index.records.push(record);
        }

        debug!(course_count = index.records.len(), "课程目录索引构建完成");
        index
    }

    /// 按任意写法的课程代码查找
    pub fn lookup(&self, code: &str) -> Option<&CourseRecord> {
        self.by_code
            .get(&canonical_code(code))
            .map(|&i| &self.records[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 按加载顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &CourseRecord> {
        self.records.iter()
    }

    /// 展示代码（目录中不存在时原样返回）
    pub fn display_code(&self, code: &str) -> String {
        self.lookup(code)
            .map(|r| r.code.clone())
            .unwrap_or_else(|| code.trim().to_string())
    }

    /// 课程学分（未知课程为 0）
    pub fn credits_of(&self, code: &str) -> f64 {
        self.lookup(code).map_or(0.0, |r| r.credits)
    }
}

impl FromIterator<CourseRecord> for CatalogIndex {
    fn from_iter<T: IntoIterator<Item = CourseRecord>>(iter: T) -> Self {
        Self::new(iter)
    }
}
