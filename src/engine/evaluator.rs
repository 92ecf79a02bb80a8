// ==========================================
// 学位规划系统 - 规划评估编排
// ==========================================
// 职责: 课表变更后全量重算 先修校验 + 学分归集
// 说明: 先修公式在目录加载时解析一次，之后每次评估复用
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::requirement::RequirementTable;
use crate::domain::schedule::Schedule;
use crate::engine::catalog::CatalogIndex;
use crate::engine::categorizer::{CreditSummary, RequirementCategorizer};
use crate::engine::validator::{PrerequisiteValidator, ValidationReport};
use tracing::{info, instrument};

/// 一次评估的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanEvaluation {
    pub validation: ValidationReport,
    pub credits: CreditSummary,
}

// ==========================================
// PlanEvaluator - 规划评估器
// ==========================================
#[derive(Debug, Clone)]
pub struct PlanEvaluator {
    catalog: CatalogIndex,
    requirements: Option<RequirementTable>,
    validator: PrerequisiteValidator,
    categorizer: RequirementCategorizer,
}

impl PlanEvaluator {
    /// 构造函数
    ///
    /// # 参数
    /// - `catalog`: 课程目录
    /// - `requirements`: 需求表（可未加载）
    /// - `config`: 规划配置
    pub fn new(catalog: CatalogIndex, requirements: Option<RequirementTable>, config: &PlannerConfig) -> Self {
        let validator = PrerequisiteValidator::new(&catalog);
        Self {
            catalog,
            requirements,
            validator,
            categorizer: RequirementCategorizer::from_config(config),
        }
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn requirements(&self) -> Option<&RequirementTable> {
        self.requirements.as_ref()
    }

    pub fn validator(&self) -> &PrerequisiteValidator {
        &self.validator
    }

    /// 替换需求表（目录不变时无需重新解析先修公式）
    pub fn set_requirements(&mut self, requirements: Option<RequirementTable>) {
        self.requirements = requirements;
    }

    pub fn validate(&self, schedule: &Schedule) -> ValidationReport {
        self.validator.validate(schedule)
    }

    pub fn categorize(&self, schedule: &Schedule, major_id: Option<&str>) -> CreditSummary {
        self.categorizer
            .categorize(schedule, &self.catalog, major_id, self.requirements.as_ref())
    }

    /// 全量评估
    #[instrument(skip(self, schedule))]
    pub fn evaluate(&self, schedule: &Schedule, major_id: Option<&str>) -> PlanEvaluation {
        let validation = self.validate(schedule);
        let credits = self.categorize(schedule, major_id);

        info!(
            invalid_slots = validation.invalid_slot_count(),
            total_credits = credits.total_credits(),
            missing_required = credits.missing_required.len(),
            "规划评估完成"
        );

        PlanEvaluation { validation, credits }
    }
}
