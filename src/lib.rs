// ==========================================
// 学位规划系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 选课排布辅助（先修校验 + 学分归集），最终安排由学生决定
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 规划配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 数据仓储层 - 方案存储
pub mod repository;

// 导入层 - 目录 / 需求表 / 预设方案
pub mod importer;

// 导出层 - CSV
pub mod export;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AcademicYear, RequirementCategory, SlotOrigin, Term};

// 领域实体
pub use domain::{
    CourseRecord, Preset, PresetCatalog, RequirementTable, SavedPlan, Schedule, ScheduleLayout,
    ScheduleSnapshot, SlotPosition,
};

// 引擎
pub use engine::{
    CatalogIndex, CreditSummary, PlanEvaluation, PlanEvaluator, PrerequisiteFormula,
    PrerequisiteValidator, PresetApplier, RequirementCategorizer, ValidationReport,
};

// API
pub use api::{ApiError, ApiResult, PlannerApi};

// 配置
pub use config::PlannerConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "学位规划系统";
