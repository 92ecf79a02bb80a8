// ==========================================
// 学位规划系统 - 课程目录字段映射
// ==========================================
// 职责: 表格行（列名别名） → CourseRecord
// 规则: 学分解析失败记为 0；院系为空时由课程代码推导
// ==========================================

use crate::domain::course::{canonical_code, parse_credits, CourseRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use tracing::{debug, warn};

const CODE_ALIASES: &[&str] = &["code", "course_code", "courseCode", "Course Code", "课程代码"];
const TITLE_ALIASES: &[&str] = &["title", "name", "Title", "课程名称"];
const DEPARTMENT_ALIASES: &[&str] = &["department", "dept", "Department", "院系"];
const LEVEL_ALIASES: &[&str] = &["level", "Level", "层级"];
const CREDITS_ALIASES: &[&str] = &["credits", "credit", "Credits", "学分"];
const PREREQUISITE_ALIASES: &[&str] = &[
    "prerequisiteText",
    "prerequisite_text",
    "prerequisites",
    "prereq",
    "Prerequisites",
    "先修条件",
];

pub struct CatalogFieldMapper;

impl CatalogFieldMapper {
    /// 映射单行
    ///
    /// # 参数
    /// - `row`: 表格行
    /// - `row_number`: 行号（从 1 开始，不含表头）
    ///
    /// # 返回
    /// - Ok(CourseRecord)
    /// - Err(FieldMappingError): 课程代码为空
    pub fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<CourseRecord> {
        let code = self.get_string(row, CODE_ALIASES).unwrap_or_default();
        if canonical_code(&code).is_empty() {
            return Err(ImportError::FieldMappingError {
                row: row_number,
                message: "课程代码为空".to_string(),
            });
        }

        let credits = match self.get_string(row, CREDITS_ALIASES) {
            None => 0.0,
            Some(raw) => {
                let value = parse_credits(&raw);
                if value == 0.0 && raw.trim().parse::<f64>().is_err() {
                    debug!(row = row_number, code = %code, raw = %raw, "学分无法解析，记为 0");
                }
                value
            }
        };

        Ok(CourseRecord::new(
            &code,
            &self.get_string(row, TITLE_ALIASES).unwrap_or_default(),
            &self.get_string(row, DEPARTMENT_ALIASES).unwrap_or_default(),
            &self.get_string(row, LEVEL_ALIASES).unwrap_or_default(),
            credits,
            &self.get_string(row, PREREQUISITE_ALIASES).unwrap_or_default(),
        ))
    }

    /// 批量映射；无法映射的行跳过并告警
    pub fn map_rows(&self, rows: &[RawRow]) -> Vec<CourseRecord> {
        rows.iter()
            .enumerate()
            .filter_map(|(i, row)| match self.map_row(row, i + 1) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "跳过无法映射的课程行");
                    None
                }
            })
            .collect()
    }

    /// 按别名顺序取第一个非空值
    fn get_string(&self, row: &RawRow, aliases: &[&str]) -> Option<String> {
        aliases
            .iter()
            .filter_map(|alias| row.get(*alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}
