// ==========================================
// 学位规划系统 - 课程领域模型
// ==========================================
// 职责: 课程记录 + 课程代码规范化
// 红线: 加载边界一次性归一化，使用处不再做容错
// ==========================================

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 课程代码规范化：仅保留 ASCII 字母与数字并转大写
///
/// "cs 101" / "CS-101" / "CS101" 规范化结果相同；函数幂等
pub fn canonical_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// 从课程代码推导院系（取开头的字母段）
///
/// 例: "CSSE 220" → "CSSE"
pub fn department_from_code(code: &str) -> String {
    code.trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// 解析学分值（非负有限数，否则为 0）
pub fn parse_credits(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// 解析 JSON 中的学分字段（数字或字符串均可，其余视为 0）
pub fn credits_from_json(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(0.0),
        Value::String(s) => parse_credits(s),
        _ => 0.0,
    }
}

/// 显式 null 按缺省值处理（配合 `#[serde(default)]` 使用）
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ==========================================
// RawCourseRecord - 原始课程记录（加载边界）
// ==========================================
// 字段形状松散：学分可能是数字或字符串，先修描述可能缺失
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourseRecord {
    #[serde(default, alias = "course_code", alias = "courseCode")]
    pub code: Option<String>,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default, alias = "dept")]
    pub department: Option<String>,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default, alias = "credit")]
    pub credits: Value,
    #[serde(default, alias = "prerequisites", alias = "prerequisite_text", alias = "prereq")]
    pub prerequisite_text: Option<String>,
}

// ==========================================
// CourseRecord - 课程记录
// ==========================================
// 目录快照内不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,              // 展示代码 (如 "CS 101")
    pub canonical_code: String,    // 规范代码 (如 "CS101")，目录主键
    pub title: String,             // 课程名称
    pub department: String,        // 院系 (可为空)
    pub level: String,             // 课程层级
    pub credits: f64,              // 学分 (非负)
    pub prerequisite_text: String, // 先修条件原文 (可为空)
}

impl CourseRecord {
    pub fn new(
        code: &str,
        title: &str,
        department: &str,
        level: &str,
        credits: f64,
        prerequisite_text: &str,
    ) -> Self {
        let credits = if credits.is_finite() && credits >= 0.0 {
            credits
        } else {
            0.0
        };
        Self {
            code: code.trim().to_string(),
            canonical_code: canonical_code(code),
            title: title.trim().to_string(),
            department: department.trim().to_uppercase(),
            level: level.trim().to_string(),
            credits,
            prerequisite_text: prerequisite_text.trim().to_string(),
        }
    }

    /// 从原始记录归一化；课程代码为空时返回 None
    pub fn from_raw(raw: RawCourseRecord) -> Option<Self> {
        let code = raw.code.as_deref().map(str::trim).unwrap_or("");
        if canonical_code(code).is_empty() {
            return None;
        }

        let level = match &raw.level {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Some(Self::new(
            code,
            raw.title.as_deref().unwrap_or(""),
            raw.department.as_deref().unwrap_or(""),
            &level,
            credits_from_json(&raw.credits),
            raw.prerequisite_text.as_deref().unwrap_or(""),
        ))
    }

    /// 生效院系：院系字段为空时从课程代码推导
    pub fn effective_department(&self) -> String {
        if self.department.is_empty() {
            department_from_code(&self.code)
        } else {
            self.department.clone()
        }
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisite_text.is_empty()
    }
}
