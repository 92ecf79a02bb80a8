// ==========================================
// 学位规划系统 - 学分需求领域模型
// ==========================================
// 职责: 专业学分上限表 + 课程需求条目
// 红线: 只读数据，加载后不再修改
// ==========================================

use crate::domain::course::{canonical_code, credits_from_json, null_as_default};
use crate::domain::types::RequirementCategory;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

fn lenient_credits<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(credits_from_json(&value))
}

// ==========================================
// CategoryCredits - 按类别的学分数值
// ==========================================
// 同时用于：专业学分上限 / 已选学分合计
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCredits {
    #[serde(default, deserialize_with = "lenient_credits")]
    pub required_coursework: f64,
    #[serde(default, deserialize_with = "lenient_credits")]
    pub degree_electives: f64,
    #[serde(default, deserialize_with = "lenient_credits")]
    pub engineering_electives: f64,
    #[serde(default, deserialize_with = "lenient_credits")]
    pub free_electives: f64,
    #[serde(default, deserialize_with = "lenient_credits")]
    pub humanities_social_science_electives: f64,
}

impl CategoryCredits {
    pub fn get(&self, category: RequirementCategory) -> f64 {
        match category {
            RequirementCategory::RequiredCoursework => self.required_coursework,
            RequirementCategory::DegreeElectives => self.degree_electives,
            RequirementCategory::EngineeringElectives => self.engineering_electives,
            RequirementCategory::FreeElectives => self.free_electives,
            RequirementCategory::HumanitiesSocialScienceElectives => {
                self.humanities_social_science_electives
            }
        }
    }

    pub fn get_mut(&mut self, category: RequirementCategory) -> &mut f64 {
        match category {
            RequirementCategory::RequiredCoursework => &mut self.required_coursework,
            RequirementCategory::DegreeElectives => &mut self.degree_electives,
            RequirementCategory::EngineeringElectives => &mut self.engineering_electives,
            RequirementCategory::FreeElectives => &mut self.free_electives,
            RequirementCategory::HumanitiesSocialScienceElectives => {
                &mut self.humanities_social_science_electives
            }
        }
    }

    /// 五类合计
    pub fn sum(&self) -> f64 {
        RequirementCategory::ALL
            .into_iter()
            .map(|category| self.get(category))
            .sum()
    }
}

// ==========================================
// MajorRequirement - 专业学分要求
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MajorRequirement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// 专业所属院系；缺省时取专业ID
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub credits: CategoryCredits,
}

// ==========================================
// RequirementEntry - 课程需求条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementEntry {
    pub code: String,                                  // 展示代码
    pub requirement_type: Option<RequirementCategory>, // 声明类别（无法识别时为 None）
    pub required_for_majors: Vec<String>,
    pub elective_for_majors: Vec<String>,
}

impl RequirementEntry {
    pub fn is_required_for(&self, major_id: &str) -> bool {
        self.required_for_majors
            .iter()
            .any(|m| m.trim().eq_ignore_ascii_case(major_id.trim()))
    }

    pub fn is_elective_for(&self, major_id: &str) -> bool {
        self.elective_for_majors
            .iter()
            .any(|m| m.trim().eq_ignore_ascii_case(major_id.trim()))
    }

    /// 是否在必修或选修名单中列出该专业
    pub fn lists_major(&self, major_id: &str) -> bool {
        self.is_required_for(major_id) || self.is_elective_for(major_id)
    }
}

// ==========================================
// 原始需求表（加载边界）
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
struct RawRequirementEntry {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    requirement_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    required_for_majors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    elective_for_majors: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequirementTable {
    #[serde(default)]
    majors: BTreeMap<String, MajorRequirement>,
    #[serde(default, rename = "courseRequirements", alias = "course_requirements")]
    course_requirements: BTreeMap<String, RawRequirementEntry>,
}

// ==========================================
// RequirementTable - 需求表
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawRequirementTable")]
pub struct RequirementTable {
    majors: BTreeMap<String, MajorRequirement>,
    course_requirements: HashMap<String, RequirementEntry>,
}

impl From<RawRequirementTable> for RequirementTable {
    fn from(raw: RawRequirementTable) -> Self {
        let mut course_requirements = HashMap::with_capacity(raw.course_requirements.len());

        for (key, entry) in raw.course_requirements {
            let display = entry
                .code
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(key.as_str())
                .to_string();
            let canonical = canonical_code(&display);
            if canonical.is_empty() {
                continue;
            }

            let requirement_type = entry
                .requirement_type
                .as_deref()
                .and_then(RequirementCategory::from_key);

            course_requirements.insert(
                canonical,
                RequirementEntry {
                    code: display,
                    requirement_type,
                    required_for_majors: entry.required_for_majors,
                    elective_for_majors: entry.elective_for_majors,
                },
            );
        }

        Self {
            majors: raw.majors,
            course_requirements,
        }
    }
}

impl RequirementTable {
    pub fn new(
        majors: BTreeMap<String, MajorRequirement>,
        course_requirements: impl IntoIterator<Item = RequirementEntry>,
    ) -> Self {
        let course_requirements = course_requirements
            .into_iter()
            .map(|entry| (canonical_code(&entry.code), entry))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self {
            majors,
            course_requirements,
        }
    }

    /// 查找专业（先精确匹配，再忽略大小写）
    pub fn major(&self, major_id: &str) -> Option<&MajorRequirement> {
        let id = major_id.trim();
        self.majors.get(id).or_else(|| {
            self.majors
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(id))
                .map(|(_, v)| v)
        })
    }

    /// 专业所属院系（缺省为专业ID）
    pub fn major_department(&self, major_id: &str) -> String {
        self.major(major_id)
            .and_then(|m| m.department.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(major_id.trim())
            .to_uppercase()
    }

    /// 按课程代码查找需求条目（代码自动规范化）
    pub fn entry(&self, code: &str) -> Option<&RequirementEntry> {
        self.course_requirements.get(&canonical_code(code))
    }

    /// 某专业的全部必修条目：(规范代码, 条目)
    pub fn required_entries<'a>(
        &'a self,
        major_id: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a RequirementEntry)> + 'a {
        self.course_requirements
            .iter()
            .filter(move |(_, entry)| entry.is_required_for(major_id))
            .map(|(key, entry)| (key.as_str(), entry))
    }
}
