// ==========================================
// 学位规划系统 - 数据导入层
// ==========================================
// 职责: 课程目录 / 需求表 / 预设方案 的加载与归一化
// 红线: 归一化只在加载边界做一次
// ==========================================

pub mod data_source;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出
pub use data_source::{FileDataSource, PlannerData, PlannerDataSource};
pub use error::{ImportError, ImportResult};
pub use field_mapper::CatalogFieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, UniversalFileParser};
