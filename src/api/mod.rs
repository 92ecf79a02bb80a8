// ==========================================
// 学位规划系统 - API层
// ==========================================
// 职责: 对外业务接口，组合 引擎 / 仓储 / 导入 / 导出
// ==========================================

pub mod error;
pub mod planner_api;

pub use error::{ApiError, ApiResult};
pub use planner_api::PlannerApi;
