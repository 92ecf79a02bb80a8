// ==========================================
// 学位规划系统 - 引擎层
// ==========================================
// 职责: 先修校验、学分归集、预设导入等规则引擎
// 红线: Engine 不拼 SQL, 不做 IO；输入异常一律降级不报错
// ==========================================

pub mod catalog;
pub mod categorizer;
pub mod evaluator;
pub mod prerequisite;
pub mod preset;
pub mod validator;

// 重导出核心引擎
pub use catalog::CatalogIndex;
pub use categorizer::{
    AllocationReason, CategorySource, CourseAllocation, CreditLine, CreditSummary,
    DepartmentClassifier, DepartmentKind, RequirementCategorizer,
};
pub use evaluator::{PlanEvaluation, PlanEvaluator};
pub use prerequisite::{PrerequisiteFormula, Satisfaction};
pub use preset::{PresetApplier, PresetApplyOptions, PresetApplyReport};
pub use validator::{PrerequisiteValidator, ValidationReport};
