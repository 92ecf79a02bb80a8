// ==========================================
// 学位规划系统 - 规划配置
// ==========================================
// 职责: 课表布局、学分容差、院系分类、界面语言
// 来源: 默认值 ← config_kv 覆写（见 ConfigManager）
// ==========================================

use crate::domain::schedule::ScheduleLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "DEGREE_PLANNER_DB_PATH";

const DEFAULT_HUMANITIES_DEPARTMENTS: &[&str] = &[
    "HSS", "HUM", "SS", "ENGL", "RH", "PHIL", "HIST", "ECON", "PSYC", "POLS", "ANTH", "SOC",
    "GS", "IA", "SPAN", "GERM", "FREN", "JAPN", "CHIN",
];

const DEFAULT_ENGINEERING_DEPARTMENTS: &[&str] = &[
    "CSSE", "CS", "SE", "ECE", "EE", "CPE", "ME", "CE", "CHE", "BE", "BME", "EM", "ENGD",
    "OE", "MA", "PH", "CHEM", "BIO", "EP", "ES", "ROBO",
];

// ==========================================
// PlannerConfig - 规划配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub base_slots_per_semester: usize,
    pub default_semester_count: usize,
    pub min_semester_count: usize,
    pub credit_tolerance: f64,
    pub humanities_departments: Vec<String>,
    pub engineering_departments: Vec<String>,
    pub locale: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_slots_per_semester: 6,
            default_semester_count: 11,
            min_semester_count: 11,
            credit_tolerance: 0.001,
            humanities_departments: DEFAULT_HUMANITIES_DEPARTMENTS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            engineering_departments: DEFAULT_ENGINEERING_DEPARTMENTS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            locale: "zh-CN".to_string(),
        }
    }
}

impl PlannerConfig {
    /// 课表布局（最少学期数至少为 1，基础槽位至少为 1）
    pub fn schedule_layout(&self) -> ScheduleLayout {
        let min_semester_count = self.min_semester_count.max(1);
        ScheduleLayout {
            base_slots_per_semester: self.base_slots_per_semester.max(1),
            default_semester_count: self.default_semester_count.max(min_semester_count),
            min_semester_count,
        }
    }
}

/// 默认数据库路径
///
/// # 返回
/// - 环境变量 DEGREE_PLANNER_DB_PATH（非空时）
/// - 否则: 用户数据目录/degree-planner/degree_planner.db
/// - 无法获取数据目录时: ./degree_planner.db
pub fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::data_dir() {
        Some(data_dir) => {
            let dir = data_dir.join("degree-planner");
            std::fs::create_dir_all(&dir).ok();
            dir.join("degree_planner.db")
        }
        None => PathBuf::from("./degree_planner.db"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_clamped() {
        let config = PlannerConfig {
            base_slots_per_semester: 0,
            default_semester_count: 4,
            min_semester_count: 8,
            ..PlannerConfig::default()
        };
        let layout = config.schedule_layout();
        assert_eq!(layout.base_slots_per_semester, 1);
        assert_eq!(layout.default_semester_count, 8);
        assert_eq!(layout.min_semester_count, 8);
    }

    #[test]
    fn test_default_layout() {
        assert_eq!(PlannerConfig::default().schedule_layout(), ScheduleLayout::default());
    }
}
