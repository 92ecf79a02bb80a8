// ==========================================
// 学位规划系统 - 预设培养方案领域模型
// ==========================================
// 职责: 预设方案行 → 学期序号映射
// 输入形状: {course_code|courseCode|code, year, semester}
// ==========================================

use crate::domain::course::null_as_default;
use crate::domain::types::{semester_index, AcademicYear, Term};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// PresetRow - 预设方案行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRow {
    #[serde(
        default,
        alias = "courseCode",
        alias = "code",
        deserialize_with = "null_as_default"
    )]
    pub course_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semester: String,
}

/// 预设行的落位结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetPlacement {
    Semester(usize), // 目标学期序号
    SeniorSummer,    // 大四夏季（无学期，丢弃）
    Unrecognized,    // 学年/学期无法识别
}

impl PresetRow {
    pub fn new(course_code: &str, year: &str, semester: &str) -> Self {
        Self {
            course_code: course_code.to_string(),
            year: year.to_string(),
            semester: semester.to_string(),
        }
    }

    /// 计算目标学期（确定性映射）
    pub fn placement(&self) -> PresetPlacement {
        match (AcademicYear::parse(&self.year), Term::parse(&self.semester)) {
            (Some(year), Some(term)) => match semester_index(year, term) {
                Some(index) => PresetPlacement::Semester(index),
                None => PresetPlacement::SeniorSummer,
            },
            _ => PresetPlacement::Unrecognized,
        }
    }
}

// ==========================================
// Preset - 单个专业的预设方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub preset_id: String,
    pub rows: Vec<PresetRow>,
}

// ==========================================
// PresetCatalog - 预设方案集合（按专业）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<PresetRow>>")]
pub struct PresetCatalog {
    presets: BTreeMap<String, Preset>,
}

impl From<BTreeMap<String, Vec<PresetRow>>> for PresetCatalog {
    fn from(raw: BTreeMap<String, Vec<PresetRow>>) -> Self {
        let presets = raw
            .into_iter()
            .map(|(preset_id, rows)| {
                let key = preset_id.trim().to_string();
                (key.clone(), Preset { preset_id: key, rows })
            })
            .collect();
        Self { presets }
    }
}

impl PresetCatalog {
    pub fn new(presets: impl IntoIterator<Item = Preset>) -> Self {
        Self {
            presets: presets
                .into_iter()
                .map(|p| (p.preset_id.clone(), p))
                .collect(),
        }
    }

    /// 按ID查找（忽略大小写）
    pub fn get(&self, preset_id: &str) -> Option<&Preset> {
        let id = preset_id.trim();
        self.presets.get(id).or_else(|| {
            self.presets
                .values()
                .find(|p| p.preset_id.eq_ignore_ascii_case(id))
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
