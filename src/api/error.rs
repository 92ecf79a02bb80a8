// ==========================================
// 学位规划系统 - API层错误类型
// ==========================================
// 职责: 汇总下层错误（仓储 / 导入 / 配置 / 导出），给出面向用户的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::importer::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务规则错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("方案存储未配置")]
    StorageUnavailable,

    // ===== 并发控制错误 =====
    #[error("乐观锁冲突: {0}")]
    OptimisticLockFailure(String),

    // ===== 数据访问错误 =====
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ===== 边界错误 =====
    #[error("数据加载失败: {0}")]
    ImportError(#[from] ImportError),

    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("导出失败: {0}")]
    ExportError(#[from] ExportError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::OptimisticLockFailure {
                plan_id,
                expected,
                actual,
            } => ApiError::OptimisticLockFailure(format!(
                "方案{}已被修改（期望revision={}，实际revision={}）",
                plan_id, expected, actual
            )),
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::ValidationError(format!("唯一约束违反: {}", msg))
            }
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("字段{}错误: {}", field, message))
            }
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimistic_lock_failure_keeps_revisions() {
        let err: ApiError = RepositoryError::OptimisticLockFailure {
            plan_id: "p1".to_string(),
            expected: 2,
            actual: 3,
        }
        .into();

        match err {
            ApiError::OptimisticLockFailure(msg) => {
                assert!(msg.contains("p1"));
                assert!(msg.contains("revision=2"));
                assert!(msg.contains("revision=3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_found_message() {
        let err: ApiError = RepositoryError::NotFound {
            entity: "DegreePlan".to_string(),
            id: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "资源未找到: DegreePlan(id=x)不存在");
    }
}
