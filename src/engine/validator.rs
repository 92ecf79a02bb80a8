// ==========================================
// 学位规划系统 - 先修条件校验引擎
// ==========================================
// 职责: 对课表中每个已填槽位判断先修条件是否满足
// 规则: 课程按"最早出现学期"计入；可用集合 = 最早学期 < 当前学期的课程
// 红线: 未知课程 / 空公式 一律视为满足
// ==========================================

use crate::domain::course::canonical_code;
use crate::domain::schedule::{Schedule, SlotPosition};
use crate::engine::catalog::CatalogIndex;
use crate::engine::prerequisite::{PrerequisiteFormula, Satisfaction};
use crate::i18n::t_with_args;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, instrument};

// ==========================================
// ValidationReport - 校验结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// 先修不满足的槽位 → 缺失的规范代码
    pub missing: BTreeMap<SlotPosition, BTreeSet<String>>,
    /// 规范代码 → 最早出现的学期序号
    pub earliest: HashMap<String, usize>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn invalid_slot_count(&self) -> usize {
        self.missing.len()
    }

    pub fn missing_for(&self, position: SlotPosition) -> Option<&BTreeSet<String>> {
        self.missing.get(&position)
    }

    /// 槽位提示文案（"缺少先修课程: X, Y"），使用目录展示代码
    pub fn describe_slot(&self, position: SlotPosition, catalog: &CatalogIndex) -> Option<String> {
        let missing = self.missing.get(&position)?;
        let codes = missing
            .iter()
            .map(|code| catalog.display_code(code))
            .collect::<Vec<_>>()
            .join(", ");
        Some(t_with_args(
            "validation.missing_prerequisites",
            &[("codes", codes.as_str())],
        ))
    }
}

// ==========================================
// PrerequisiteValidator - 先修条件校验引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteValidator {
    // 规范代码 → 先修公式（仅保存非空公式）
    formulas: HashMap<String, PrerequisiteFormula>,
}

impl PrerequisiteValidator {
    /// 构造函数：为目录中每门课程预先解析先修公式
    ///
    /// # 参数
    /// - `catalog`: 课程目录索引
    pub fn new(catalog: &CatalogIndex) -> Self {
        let formulas: HashMap<String, PrerequisiteFormula> = catalog
            .iter()
            .filter(|record| record.has_prerequisites())
            .map(|record| {
                (
                    record.canonical_code.clone(),
                    PrerequisiteFormula::parse(&record.prerequisite_text),
                )
            })
            .filter(|(_, formula)| !formula.is_empty())
            .collect();

        debug!(formula_count = formulas.len(), "先修公式解析完成");
        Self { formulas }
    }

    /// 课程的先修公式（无要求时为 None）
    pub fn formula(&self, code: &str) -> Option<&PrerequisiteFormula> {
        self.formulas.get(&canonical_code(code))
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 全量校验课表
    ///
    /// # 参数
    /// - `schedule`: 当前课表
    ///
    /// # 返回
    /// ValidationReport（仅包含先修不满足的槽位）
    #[instrument(skip(self, schedule), fields(semester_count = schedule.semester_count()))]
    pub fn validate(&self, schedule: &Schedule) -> ValidationReport {
        let earliest = earliest_semesters(schedule);
        let mut missing = BTreeMap::new();

        for (position, code) in schedule.filled_slots() {
            let Some(formula) = self.formula(code) else {
                continue;
            };

            let available: HashSet<String> = earliest
                .iter()
                .filter(|&(_, &index)| index < position.semester)
                .map(|(code, _)| code.clone())
                .collect();

            if let Satisfaction::Unsatisfied { missing: codes } = formula.evaluate(&available) {
                missing.insert(position, codes);
            }
        }

        debug!(
            distinct_courses = earliest.len(),
            invalid_slots = missing.len(),
            "先修条件校验完成"
        );

        ValidationReport { missing, earliest }
    }
}

/// 每个规范代码最早出现的学期序号
fn earliest_semesters(schedule: &Schedule) -> HashMap<String, usize> {
    let mut earliest: HashMap<String, usize> = HashMap::new();
    for (position, code) in schedule.filled_slots() {
        let key = canonical_code(code);
        if key.is_empty() {
            continue;
        }
        earliest
            .entry(key)
            .and_modify(|index| *index = (*index).min(position.semester))
            .or_insert(position.semester);
    }
    earliest
}
