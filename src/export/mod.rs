// ==========================================
// 学位规划系统 - 导出层
// ==========================================

pub mod plan_export;

pub use plan_export::{ExportError, ExportResult, PlanExporter};
