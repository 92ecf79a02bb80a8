// ==========================================
// 学位规划系统 - 学分类别归集引擎
// ==========================================
// 职责: 已选课程学分 → 五类学分桶（带上限与溢出）
// 输入: 课表 + 课程目录 + 专业 + 需求表
// 输出: 各类别合计 + 缺失必修 + 逐课分配轨迹
// ==========================================
// 溢出顺序（本院系）: 专业选修上限 → 工程选修上限 → 自由选修
// 溢出顺序（外院系工程类）: 工程选修上限 → 自由选修
// 红线: 必修学分只计入 required_for_majors 包含本专业的课程
// 红线: 同一课程只计一次（按学期顺序首次出现）
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::course::{canonical_code, department_from_code};
use crate::domain::requirement::{CategoryCredits, RequirementTable};
use crate::domain::schedule::Schedule;
use crate::domain::types::RequirementCategory;
use crate::engine::catalog::CatalogIndex;
use crate::i18n::{t, t_with_args};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, instrument};

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// DepartmentClassifier - 院系分类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DepartmentKind {
    Humanities,
    Engineering,
    Other,
}

#[derive(Debug, Clone)]
pub struct DepartmentClassifier {
    humanities: HashSet<String>,
    engineering: HashSet<String>,
}

impl DepartmentClassifier {
    pub fn new<I, J, S, T>(humanities: I, engineering: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let normalize = |d: &str| d.trim().to_uppercase();
        Self {
            humanities: humanities
                .into_iter()
                .map(|d| normalize(d.as_ref()))
                .filter(|d| !d.is_empty())
                .collect(),
            engineering: engineering
                .into_iter()
                .map(|d| normalize(d.as_ref()))
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn classify(&self, department: &str) -> DepartmentKind {
        let key = department.trim().to_uppercase();
        if self.humanities.contains(&key) {
            DepartmentKind::Humanities
        } else if self.engineering.contains(&key) {
            DepartmentKind::Engineering
        } else {
            DepartmentKind::Other
        }
    }
}

impl Default for DepartmentClassifier {
    fn default() -> Self {
        let config = PlannerConfig::default();
        Self::new(&config.humanities_departments, &config.engineering_departments)
    }
}

// ==========================================
// 分配轨迹
// ==========================================

/// 分配原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationReason {
    UnknownCourse,           // 目录中不存在，0 学分
    RequiredForMajor,        // 本专业必修
    RequiredNotForMajor,     // 必修类课程但不是本专业必修，跳过
    DirectElective,          // 人文社科 / 自由选修，直接计入
    NonEngineeringRedirect,  // 工程选修候选但院系非工程类 → 自由选修
    OwnDepartmentChain,      // 本院系：专业选修 → 工程选修 → 自由选修
    OtherEngineeringChain,   // 外院系工程类：工程选修 → 自由选修
}

impl AllocationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationReason::UnknownCourse => "UNKNOWN_COURSE",
            AllocationReason::RequiredForMajor => "REQUIRED_FOR_MAJOR",
            AllocationReason::RequiredNotForMajor => "REQUIRED_NOT_FOR_MAJOR",
            AllocationReason::DirectElective => "DIRECT_ELECTIVE",
            AllocationReason::NonEngineeringRedirect => "NON_ENGINEERING_REDIRECT",
            AllocationReason::OwnDepartmentChain => "OWN_DEPARTMENT_CHAIN",
            AllocationReason::OtherEngineeringChain => "OTHER_ENGINEERING_CHAIN",
        }
    }
}

impl fmt::Display for AllocationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 类别来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySource {
    Declared,           // 需求表中声明且列出本专业
    DepartmentFallback, // 按院系推导
}

/// 单门课程的学分分配
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseAllocation {
    pub code: String,
    pub canonical_code: String,
    pub credits: f64,
    pub candidate: RequirementCategory,
    pub source: CategorySource,
    pub reason: AllocationReason,
    /// (类别, 计入学分)，按计入顺序
    pub portions: Vec<(RequirementCategory, f64)>,
}

impl CourseAllocation {
    pub fn allocated(&self) -> f64 {
        round2(self.portions.iter().map(|(_, amount)| amount).sum())
    }
}

/// 单个类别的 "已选 / 要求" 学分
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditLine {
    pub category: RequirementCategory,
    pub selected: f64,
    pub required: f64,
}

impl CreditLine {
    pub fn is_met(&self) -> bool {
        self.selected + 1e-9 >= self.required
    }

    /// 展示文案，例如 "自由选修: 8 / 12"
    pub fn render(&self) -> String {
        t_with_args(
            "credits.line",
            &[
                ("label", t(&self.category.label_key()).as_str()),
                ("selected", format_credits(self.selected).as_str()),
                ("required", format_credits(self.required).as_str()),
            ],
        )
    }
}

/// 学分数值展示（整数不带小数位）
pub fn format_credits(value: f64) -> String {
    let rounded = round2(value);
    if rounded.fract().abs() < 1e-9 {
        format!("{:.0}", rounded)
    } else {
        format!("{}", rounded)
    }
}

// ==========================================
// CreditSummary - 学分归集结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreditSummary {
    pub major_id: Option<String>,
    pub totals: CategoryCredits,
    /// 专业要求（即各类别上限）
    pub required: CategoryCredits,
    /// 本专业必修但未选的课程（展示代码，已排序）
    pub missing_required: Vec<String>,
    pub allocations: Vec<CourseAllocation>,
}

impl CreditSummary {
    pub fn lines(&self) -> Vec<CreditLine> {
        RequirementCategory::ALL
            .into_iter()
            .map(|category| CreditLine {
                category,
                selected: self.totals.get(category),
                required: self.required.get(category),
            })
            .collect()
    }

    pub fn total_credits(&self) -> f64 {
        round2(self.totals.sum())
    }

    pub fn allocation(&self, code: &str) -> Option<&CourseAllocation> {
        let key = canonical_code(code);
        self.allocations.iter().find(|a| a.canonical_code == key)
    }

    /// 缺失必修提示（无缺失时为 None）
    pub fn describe_missing_required(&self) -> Option<String> {
        if self.missing_required.is_empty() {
            return None;
        }
        Some(t_with_args(
            "credits.missing_required",
            &[("codes", self.missing_required.join(", ").as_str())],
        ))
    }
}

// ==========================================
// RequirementCategorizer - 学分类别归集引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct RequirementCategorizer {
    classifier: DepartmentClassifier,
    tolerance: f64,
}

impl Default for RequirementCategorizer {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

/// 单门课程的归集上下文
struct Bucketing<'a> {
    caps: &'a CategoryCredits,
    totals: CategoryCredits,
    tolerance: f64,
}

impl Bucketing<'_> {
    /// 计入无上限类别
    fn add(&mut self, category: RequirementCategory, amount: f64, portions: &mut Vec<(RequirementCategory, f64)>) {
        let amount = round2(amount);
        if amount <= 0.0 {
            return;
        }
        *self.totals.get_mut(category) = round2(self.totals.get(category) + amount);
        portions.push((category, amount));
    }

    /// 在上限内计入，返回溢出量
    fn offer(
        &mut self,
        category: RequirementCategory,
        amount: f64,
        portions: &mut Vec<(RequirementCategory, f64)>,
    ) -> f64 {
        let amount = round2(amount);
        if amount <= 0.0 {
            return 0.0;
        }

        let headroom = (self.caps.get(category) - self.totals.get(category)).max(0.0);
        let placed = if headroom <= self.tolerance {
            0.0
        } else if amount <= headroom + self.tolerance {
            amount
        } else {
            round2(headroom)
        };

        if placed > 0.0 {
            *self.totals.get_mut(category) = round2(self.totals.get(category) + placed);
            portions.push((category, placed));
        }
        round2(amount - placed)
    }

    /// 按顺序依次经过各上限，剩余计入自由选修
    fn cascade(
        &mut self,
        chain: &[RequirementCategory],
        amount: f64,
        portions: &mut Vec<(RequirementCategory, f64)>,
    ) {
        let mut remaining = amount;
        for &category in chain {
            if remaining <= 0.0 {
                return;
            }
            remaining = self.offer(category, remaining, portions);
        }
        self.add(RequirementCategory::FreeElectives, remaining, portions);
    }
}

impl RequirementCategorizer {
    /// 构造函数
    ///
    /// # 参数
    /// - `classifier`: 院系分类
    /// - `tolerance`: 上限比较容差
    pub fn new(classifier: DepartmentClassifier, tolerance: f64) -> Self {
        Self {
            classifier,
            tolerance: if tolerance.is_finite() && tolerance >= 0.0 {
                tolerance
            } else {
                0.0
            },
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(
            DepartmentClassifier::new(&config.humanities_departments, &config.engineering_departments),
            config.credit_tolerance,
        )
    }

    pub fn classifier(&self) -> &DepartmentClassifier {
        &self.classifier
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 归集课表中的已选课程
    ///
    /// # 参数
    /// - `schedule`: 当前课表
    /// - `catalog`: 课程目录
    /// - `major_id`: 目标专业（未选择时为 None）
    /// - `table`: 需求表（未加载时为 None）
    ///
    /// # 返回
    /// CreditSummary；未选专业或无需求表时全部为 0
    #[instrument(skip(self, schedule, catalog, table))]
    pub fn categorize(
        &self,
        schedule: &Schedule,
        catalog: &CatalogIndex,
        major_id: Option<&str>,
        table: Option<&RequirementTable>,
    ) -> CreditSummary {
        self.categorize_codes(schedule.filled_slots().map(|(_, code)| code), catalog, major_id, table)
    }

    /// 归集任意课程代码序列（重复代码只计首次）
    pub fn categorize_codes<'a>(
        &self,
        codes: impl IntoIterator<Item = &'a str>,
        catalog: &CatalogIndex,
        major_id: Option<&str>,
        table: Option<&RequirementTable>,
    ) -> CreditSummary {
        let major_id = major_id.map(str::trim).filter(|m| !m.is_empty());
        let (Some(major_id), Some(table)) = (major_id, table) else {
            return CreditSummary::default();
        };
        let Some(major) = table.major(major_id) else {
            debug!(major_id, "需求表中无此专业");
            return CreditSummary {
                major_id: Some(major_id.to_string()),
                ..CreditSummary::default()
            };
        };

        let major_department = table.major_department(major_id);
        let mut bucketing = Bucketing {
            caps: &major.credits,
            totals: CategoryCredits::default(),
            tolerance: self.tolerance,
        };

        let mut seen: HashSet<String> = HashSet::new();
        let mut allocations = Vec::new();

        for code in codes {
            let key = canonical_code(code);
            if key.is_empty() || !seen.insert(key.clone()) {
                continue;
            }
            let allocation =
                self.allocate(code, &key, catalog, major_id, &major_department, table, &mut bucketing);
            allocations.push(allocation);
        }

        let mut missing_required: Vec<String> = table
            .required_entries(major_id)
            .filter(|(key, _)| !seen.contains(*key))
            .map(|(_, entry)| entry.code.clone())
            .collect();
        missing_required.sort();

        let mut totals = bucketing.totals;
        for category in RequirementCategory::ALL {
            *totals.get_mut(category) = round2(totals.get(category));
        }

        debug!(
            course_count = allocations.len(),
            total_credits = totals.sum(),
            missing_required = missing_required.len(),
            "学分归集完成"
        );

        CreditSummary {
            major_id: Some(major_id.to_string()),
            totals,
            required: major.credits,
            missing_required,
            allocations,
        }
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    #[allow(clippy::too_many_arguments)]
    fn allocate(
        &self,
        code: &str,
        key: &str,
        catalog: &CatalogIndex,
        major_id: &str,
        major_department: &str,
        table: &RequirementTable,
        bucketing: &mut Bucketing<'_>,
    ) -> CourseAllocation {
        let record = catalog.lookup(key);
        let credits = round2(record.map_or(0.0, |r| r.credits));
        let department = record
            .map(|r| r.effective_department())
            .unwrap_or_else(|| department_from_code(code));
        let display = record.map_or_else(|| code.trim().to_string(), |r| r.code.clone());

        // 1) 类别判定：声明类别（列出本专业时）优先，否则按院系推导
        let entry = table.entry(key);
        let declared = entry
            .filter(|e| e.lists_major(major_id))
            .and_then(|e| e.requirement_type);
        let (candidate, source) = match declared {
            Some(category) => (category, CategorySource::Declared),
            None => (self.fallback_category(&department), CategorySource::DepartmentFallback),
        };

        let mut portions = Vec::new();
        let reason = if record.is_none() {
            AllocationReason::UnknownCourse
        } else {
            self.route(
                candidate,
                credits,
                &department,
                major_department,
                entry.map_or(false, |e| e.is_required_for(major_id)),
                bucketing,
                &mut portions,
            )
        };

        CourseAllocation {
            code: display,
            canonical_code: key.to_string(),
            credits,
            candidate,
            source,
            reason,
            portions,
        }
    }

    fn fallback_category(&self, department: &str) -> RequirementCategory {
        match self.classifier.classify(department) {
            DepartmentKind::Humanities => RequirementCategory::HumanitiesSocialScienceElectives,
            DepartmentKind::Engineering => RequirementCategory::EngineeringElectives,
            DepartmentKind::Other => RequirementCategory::FreeElectives,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn route(
        &self,
        candidate: RequirementCategory,
        credits: f64,
        department: &str,
        major_department: &str,
        required_for_major: bool,
        bucketing: &mut Bucketing<'_>,
        portions: &mut Vec<(RequirementCategory, f64)>,
    ) -> AllocationReason {
        use RequirementCategory::*;

        match candidate {
            RequiredCoursework => {
                if required_for_major {
                    bucketing.add(RequiredCoursework, credits, portions);
                    AllocationReason::RequiredForMajor
                } else {
                    AllocationReason::RequiredNotForMajor
                }
            }
            HumanitiesSocialScienceElectives | FreeElectives => {
                bucketing.add(candidate, credits, portions);
                AllocationReason::DirectElective
            }
            DegreeElectives => {
                bucketing.cascade(&[DegreeElectives, EngineeringElectives], credits, portions);
                AllocationReason::OwnDepartmentChain
            }
            EngineeringElectives => {
                if self.classifier.classify(department) != DepartmentKind::Engineering {
                    bucketing.add(FreeElectives, credits, portions);
                    AllocationReason::NonEngineeringRedirect
                } else if department.eq_ignore_ascii_case(major_department) {
                    bucketing.cascade(&[DegreeElectives, EngineeringElectives], credits, portions);
                    AllocationReason::OwnDepartmentChain
                } else {
                    bucketing.cascade(&[EngineeringElectives], credits, portions);
                    AllocationReason::OtherEngineeringChain
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::CourseRecord;
    use crate::domain::requirement::{MajorRequirement, RequirementEntry};
    use crate::domain::schedule::ScheduleLayout;
    use std::collections::BTreeMap;

    fn catalog() -> CatalogIndex {
        CatalogIndex::new(vec![
            CourseRecord::new("CSSE 120", "Intro", "CSSE", "100", 4.0, ""),
            CourseRecord::new("CSSE 404", "Compilers", "CSSE", "400", 4.0, ""),
            CourseRecord::new("CSSE 432", "Networks", "CSSE", "400", 4.0, ""),
            CourseRecord::new("ECE 230", "Embedded", "ECE", "200", 4.0, ""),
            CourseRecord::new("ENGL 101", "Writing", "ENGL", "100", 4.0, ""),
            CourseRecord::new("ART 110", "Drawing", "", "100", 2.0, ""),
            CourseRecord::new("MA 111", "Calculus", "MA", "100", 5.0, ""),
        ])
    }

    fn table(degree_cap: f64, engineering_cap: f64) -> RequirementTable {
        let mut majors = BTreeMap::new();
        majors.insert(
            "CSSE".to_string(),
            MajorRequirement {
                label: "Computer Science".to_string(),
                department: None,
                credits: CategoryCredits {
                    required_coursework: 100.0,
                    degree_electives: degree_cap,
                    engineering_electives: engineering_cap,
                    free_electives: 12.0,
                    humanities_social_science_electives: 36.0,
                },
            },
        );
        RequirementTable::new(
            majors,
            vec![
                RequirementEntry {
                    code: "CSSE 120".to_string(),
                    requirement_type: Some(RequirementCategory::RequiredCoursework),
                    required_for_majors: vec!["CSSE".to_string()],
                    elective_for_majors: vec![],
                },
                RequirementEntry {
                    code: "MA 111".to_string(),
                    requirement_type: Some(RequirementCategory::RequiredCoursework),
                    required_for_majors: vec!["CSSE".to_string(), "ME".to_string()],
                    elective_for_majors: vec![],
                },
                RequirementEntry {
                    code: "ECE 230".to_string(),
                    requirement_type: Some(RequirementCategory::RequiredCoursework),
                    required_for_majors: vec!["ECE".to_string()],
                    elective_for_majors: vec!["CSSE".to_string()],
                },
            ],
        )
    }

    #[test]
    fn test_no_major_or_table_gives_zeros() {
        let categorizer = RequirementCategorizer::default();
        let summary = categorizer.categorize_codes(["CSSE 120"], &catalog(), None, Some(&table(4.0, 8.0)));
        assert_eq!(summary, CreditSummary::default());

        let summary = categorizer.categorize_codes(["CSSE 120"], &catalog(), Some("CSSE"), None);
        assert_eq!(summary.total_credits(), 0.0);
        assert!(summary.missing_required.is_empty());
    }

    #[test]
    fn test_own_department_overflow_lands_in_engineering() {
        let categorizer = RequirementCategorizer::default();
        // 专业选修上限 2，本院系 4 学分课程 → 2 进专业选修，2 进工程选修
        let summary =
            categorizer.categorize_codes(["CSSE 404"], &catalog(), Some("CSSE"), Some(&table(2.0, 8.0)));

        assert_eq!(summary.totals.degree_electives, 2.0);
        assert_eq!(summary.totals.engineering_electives, 2.0);
        assert_eq!(summary.totals.free_electives, 0.0);
        assert_eq!(
            summary.allocation("CSSE404").unwrap().reason,
            AllocationReason::OwnDepartmentChain
        );
    }

    #[test]
    fn test_full_caps_spill_to_free() {
        let categorizer = RequirementCategorizer::default();
        let summary = categorizer.categorize_codes(
            ["CSSE 404", "CSSE 432"],
            &catalog(),
            Some("CSSE"),
            Some(&table(4.0, 2.0)),
        );

        assert_eq!(summary.totals.degree_electives, 4.0);
        assert_eq!(summary.totals.engineering_electives, 2.0);
        assert_eq!(summary.totals.free_electives, 2.0);
    }

    #[test]
    fn test_required_only_for_listed_major() {
        let categorizer = RequirementCategorizer::default();
        let summary = categorizer.categorize_codes(
            ["CSSE 120", "ECE 230", "csse120"],
            &catalog(),
            Some("CSSE"),
            Some(&table(4.0, 8.0)),
        );

        assert_eq!(summary.totals.required_coursework, 4.0);
        assert_eq!(
            summary.allocation("ECE 230").unwrap().reason,
            AllocationReason::RequiredNotForMajor
        );
        assert_eq!(summary.allocations.len(), 2);
        assert_eq!(summary.missing_required, vec!["MA 111".to_string()]);
    }

    #[test]
    fn test_department_fallbacks() {
        let categorizer = RequirementCategorizer::default();
        let summary = categorizer.categorize_codes(
            ["ENGL 101", "ART 110", "ZZ 999"],
            &catalog(),
            Some("CSSE"),
            Some(&table(4.0, 8.0)),
        );

        assert_eq!(summary.totals.humanities_social_science_electives, 4.0);
        assert_eq!(summary.totals.free_electives, 2.0);
        let unknown = summary.allocation("ZZ999").unwrap();
        assert_eq!(unknown.reason, AllocationReason::UnknownCourse);
        assert_eq!(unknown.allocated(), 0.0);
    }

    #[test]
    fn test_zero_degree_cap_goes_straight_to_engineering() {
        let categorizer = RequirementCategorizer::default();
        let summary =
            categorizer.categorize_codes(["CSSE 404"], &catalog(), Some("CSSE"), Some(&table(0.0, 8.0)));

        assert_eq!(summary.totals.degree_electives, 0.0);
        assert_eq!(summary.totals.engineering_electives, 4.0);
        let allocation = summary.allocation("CSSE 404").unwrap();
        assert_eq!(allocation.reason, AllocationReason::OwnDepartmentChain);
        assert_eq!(
            allocation.portions,
            vec![(RequirementCategory::EngineeringElectives, 4.0)]
        );
    }

    #[test]
    fn test_fractional_credits_fill_cap_to_the_cent() {
        let catalog = CatalogIndex::new(vec![
            CourseRecord::new("CSSE 371", "Req Eng", "CSSE", "300", 1.333, ""),
            CourseRecord::new("CSSE 372", "Design", "CSSE", "300", 1.333, ""),
            CourseRecord::new("CSSE 373", "Arch", "CSSE", "300", 1.333, ""),
            CourseRecord::new("CSSE 374", "Testing", "CSSE", "300", 1.333, ""),
        ]);
        let codes = ["CSSE 371", "CSSE 372", "CSSE 373", "CSSE 374"];
        let categorizer = RequirementCategorizer::default();

        // 前三门 1.33 × 3 = 3.99，剩余 0.01
        let summary =
            categorizer.categorize_codes(codes[..3].iter().copied(), &catalog, Some("CSSE"), Some(&table(4.0, 8.0)));
        assert_eq!(summary.totals.degree_electives, 3.99);
        assert_eq!(summary.totals.engineering_electives, 0.0);

        // 第四门：0.01 补满专业选修，其余溢出到工程选修
        let summary = categorizer.categorize_codes(codes, &catalog, Some("CSSE"), Some(&table(4.0, 8.0)));
        assert_eq!(summary.totals.degree_electives, 4.0);
        assert_eq!(summary.totals.engineering_electives, 1.32);
        assert_eq!(
            summary.allocation("CSSE 374").unwrap().portions,
            vec![
                (RequirementCategory::DegreeElectives, 0.01),
                (RequirementCategory::EngineeringElectives, 1.32),
            ]
        );

        // 剩余空间在容差内视为已满
        let summary = categorizer.categorize_codes(codes, &catalog, Some("CSSE"), Some(&table(3.9905, 8.0)));
        assert_eq!(summary.totals.degree_electives, 3.99);
        assert_eq!(summary.totals.engineering_electives, 1.33);
        assert_eq!(
            summary.allocation("CSSE 374").unwrap().portions,
            vec![(RequirementCategory::EngineeringElectives, 1.33)]
        );
    }

    #[test]
    fn test_declared_degree_elective_follows_own_department_chain() {
        let table: RequirementTable = serde_json::from_value(serde_json::json!({
            "majors": {
                "CSSE": {"credits": {"degree_electives": 2, "engineering_electives": 1}}
            },
            "courseRequirements": {
                "MA111": {
                    "code": "MA 111",
                    "requirement_type": "degree_electives",
                    "elective_for_majors": ["CSSE"]
                }
            }
        }))
        .unwrap();

        let summary = RequirementCategorizer::default().categorize_codes(
            ["MA 111"],
            &catalog(),
            Some("CSSE"),
            Some(&table),
        );

        let allocation = summary.allocation("MA111").unwrap();
        assert_eq!(allocation.source, CategorySource::Declared);
        assert_eq!(allocation.reason, AllocationReason::OwnDepartmentChain);
        assert_eq!(
            allocation.portions,
            vec![
                (RequirementCategory::DegreeElectives, 2.0),
                (RequirementCategory::EngineeringElectives, 1.0),
                (RequirementCategory::FreeElectives, 2.0),
            ]
        );
        assert_eq!(summary.totals.free_electives, 2.0);
        assert_eq!(summary.total_credits(), 5.0);
    }

    #[test]
    fn test_credit_line_render() {
        let line = CreditLine {
            category: RequirementCategory::FreeElectives,
            selected: 8.0,
            required: 12.5,
        };
        let text = line.render();
        assert!(text.contains('8'));
        assert!(text.contains("12.5"));
        assert!(!line.is_met());
    }
}
