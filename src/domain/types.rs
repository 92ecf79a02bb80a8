// ==========================================
// 学位规划系统 - 领域类型定义
// ==========================================
// 职责: 学分类别 / 槽位来源 / 学年与学期枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 学分类别 (Requirement Category)
// ==========================================
// 五个互斥的学分统计桶
// 序列化格式: snake_case (与需求表 JSON 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    RequiredCoursework,               // 必修课程
    DegreeElectives,                  // 专业选修
    EngineeringElectives,             // 工程选修
    FreeElectives,                    // 自由选修
    HumanitiesSocialScienceElectives, // 人文社科选修
}

impl RequirementCategory {
    /// 全部类别（展示顺序）
    pub const ALL: [RequirementCategory; 5] = [
        RequirementCategory::RequiredCoursework,
        RequirementCategory::DegreeElectives,
        RequirementCategory::EngineeringElectives,
        RequirementCategory::FreeElectives,
        RequirementCategory::HumanitiesSocialScienceElectives,
    ];

    /// 需求表中使用的键名
    pub fn as_key(&self) -> &'static str {
        match self {
            RequirementCategory::RequiredCoursework => "required_coursework",
            RequirementCategory::DegreeElectives => "degree_electives",
            RequirementCategory::EngineeringElectives => "engineering_electives",
            RequirementCategory::FreeElectives => "free_electives",
            RequirementCategory::HumanitiesSocialScienceElectives => {
                "humanities_social_science_electives"
            }
        }
    }

    /// 从键名解析（宽松：忽略大小写，'-' 与空格视同 '_'）
    ///
    /// 无法识别的类别返回 None，由调用方回退到院系推导
    pub fn from_key(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        RequirementCategory::ALL
            .into_iter()
            .find(|category| category.as_key() == normalized)
    }

    /// 国际化标签键
    pub fn label_key(&self) -> String {
        format!("category.{}", self.as_key())
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 槽位来源 (Slot Origin)
// ==========================================
// 区分人工选课与预设方案导入
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotOrigin {
    #[default]
    None,                               // 空槽
    ManualEntry,                        // 人工选课
    PresetEntry { preset_id: String },  // 预设方案导入
}

impl SlotOrigin {
    /// 预设方案ID（仅 PresetEntry 有值）
    pub fn preset_id(&self) -> Option<&str> {
        match self {
            SlotOrigin::PresetEntry { preset_id } => Some(preset_id.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for SlotOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotOrigin::None => write!(f, "NONE"),
            SlotOrigin::ManualEntry => write!(f, "MANUAL"),
            SlotOrigin::PresetEntry { preset_id } => write!(f, "PRESET({})", preset_id),
        }
    }
}

// ==========================================
// 学年 (Academic Year)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicYear {
    Freshman,  // 大一
    Sophomore, // 大二
    Junior,    // 大三
    Senior,    // 大四
}

impl AcademicYear {
    pub const ALL: [AcademicYear; 4] = [
        AcademicYear::Freshman,
        AcademicYear::Sophomore,
        AcademicYear::Junior,
        AcademicYear::Senior,
    ];

    /// 前缀匹配解析（忽略大小写）：fr / so / ju / se
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().to_ascii_lowercase();
        if value.starts_with("fr") {
            Some(AcademicYear::Freshman)
        } else if value.starts_with("so") {
            Some(AcademicYear::Sophomore)
        } else if value.starts_with("ju") {
            Some(AcademicYear::Junior)
        } else if value.starts_with("se") {
            Some(AcademicYear::Senior)
        } else {
            None
        }
    }

    pub fn ordinal(&self) -> usize {
        match self {
            AcademicYear::Freshman => 0,
            AcademicYear::Sophomore => 1,
            AcademicYear::Junior => 2,
            AcademicYear::Senior => 3,
        }
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcademicYear::Freshman => write!(f, "Freshman"),
            AcademicYear::Sophomore => write!(f, "Sophomore"),
            AcademicYear::Junior => write!(f, "Junior"),
            AcademicYear::Senior => write!(f, "Senior"),
        }
    }
}

// ==========================================
// 学期 (Term)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Fall,   // 秋季
    Spring, // 春季
    Summer, // 夏季
}

impl Term {
    pub const ALL: [Term; 3] = [Term::Fall, Term::Spring, Term::Summer];

    /// 前缀匹配解析（忽略大小写）：fa / sp / su
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().to_ascii_lowercase();
        if value.starts_with("fa") {
            Some(Term::Fall)
        } else if value.starts_with("sp") {
            Some(Term::Spring)
        } else if value.starts_with("su") {
            Some(Term::Summer)
        } else {
            None
        }
    }

    pub fn ordinal(&self) -> usize {
        match self {
            Term::Fall => 0,
            Term::Spring => 1,
            Term::Summer => 2,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Fall => write!(f, "Fall"),
            Term::Spring => write!(f, "Spring"),
            Term::Summer => write!(f, "Summer"),
        }
    }
}

/// 四年制标准学期数（大四夏季不设学期）
pub const STANDARD_SEMESTER_COUNT: usize = 11;

/// 学年 + 学期 → 学期序号
///
/// 序号 = 学年 × 3 + 学期（秋=0, 春=1, 夏=2）；大四夏季返回 None
pub fn semester_index(year: AcademicYear, term: Term) -> Option<usize> {
    if year == AcademicYear::Senior && term == Term::Summer {
        return None;
    }
    Some(year.ordinal() * Term::ALL.len() + term.ordinal())
}

/// 学期展示名称
///
/// 标准学期为 "Freshman Fall" 形式，追加学期为 "Additional Semester N"
pub fn semester_display_name(index: usize) -> String {
    if index < STANDARD_SEMESTER_COUNT {
        let year = AcademicYear::ALL[index / Term::ALL.len()];
        let term = Term::ALL[index % Term::ALL.len()];
        format!("{} {}", year, term)
    } else {
        format!("Additional Semester {}", index - STANDARD_SEMESTER_COUNT + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_key_is_lenient() {
        assert_eq!(
            RequirementCategory::from_key("Engineering-Electives"),
            Some(RequirementCategory::EngineeringElectives)
        );
        assert_eq!(
            RequirementCategory::from_key(" humanities social science electives "),
            Some(RequirementCategory::HumanitiesSocialScienceElectives)
        );
        assert_eq!(RequirementCategory::from_key("lab_credit"), None);
    }

    #[test]
    fn test_year_and_term_prefix_match() {
        assert_eq!(AcademicYear::parse("FRESH"), Some(AcademicYear::Freshman));
        assert_eq!(AcademicYear::parse("senior year"), Some(AcademicYear::Senior));
        assert_eq!(AcademicYear::parse("grad"), None);
        assert_eq!(Term::parse("Spr"), Some(Term::Spring));
        assert_eq!(Term::parse("SUMMER"), Some(Term::Summer));
        assert_eq!(Term::parse("winter"), None);
    }

    #[test]
    fn test_semester_index_mapping() {
        assert_eq!(semester_index(AcademicYear::Freshman, Term::Fall), Some(0));
        assert_eq!(semester_index(AcademicYear::Freshman, Term::Summer), Some(2));
        assert_eq!(semester_index(AcademicYear::Junior, Term::Spring), Some(7));
        assert_eq!(semester_index(AcademicYear::Senior, Term::Spring), Some(10));
        assert_eq!(semester_index(AcademicYear::Senior, Term::Summer), None);
    }

    #[test]
    fn test_semester_display_name() {
        assert_eq!(semester_display_name(0), "Freshman Fall");
        assert_eq!(semester_display_name(10), "Senior Spring");
        assert_eq!(semester_display_name(11), "Additional Semester 1");
    }
}
