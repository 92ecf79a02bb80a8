// ==========================================
// 学位规划系统 - 规划数据加载
// ==========================================
// 职责: 异步加载 课程目录 / 需求表 / 预设方案
// 约束: 三类数据并发加载，全部完成后才交给课表使用
// 格式: 目录 JSON / CSV / XLSX；需求表与预设方案 JSON
// ==========================================

use crate::domain::course::{CourseRecord, RawCourseRecord};
use crate::domain::preset::PresetCatalog;
use crate::domain::requirement::RequirementTable;
use crate::engine::catalog::CatalogIndex;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::CatalogFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// 一次加载的全部规划数据
#[derive(Debug, Clone, Default)]
pub struct PlannerData {
    pub catalog: CatalogIndex,
    pub requirements: Option<RequirementTable>,
    pub presets: PresetCatalog,
}

// ==========================================
// PlannerDataSource Trait
// ==========================================
#[async_trait]
pub trait PlannerDataSource: Send + Sync {
    async fn load_catalog(&self) -> ImportResult<CatalogIndex>;

    /// 需求表（未配置时为 None）
    async fn load_requirements(&self) -> ImportResult<Option<RequirementTable>>;

    /// 预设方案（未配置时为空集合）
    async fn load_presets(&self) -> ImportResult<PresetCatalog>;

    /// 并发加载全部数据
    async fn load_all(&self) -> ImportResult<PlannerData> {
        let (catalog, requirements, presets) = futures::try_join!(
            self.load_catalog(),
            self.load_requirements(),
            self.load_presets()
        )?;

        info!(
            course_count = catalog.len(),
            has_requirements = requirements.is_some(),
            preset_count = presets.len(),
            "规划数据加载完成"
        );

        Ok(PlannerData {
            catalog,
            requirements,
            presets,
        })
    }
}

// ==========================================
// FileDataSource - 本地文件数据源
// ==========================================
#[derive(Debug, Clone)]
pub struct FileDataSource {
    catalog_path: PathBuf,
    requirements_path: Option<PathBuf>,
    presets_path: Option<PathBuf>,
}

impl FileDataSource {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            requirements_path: None,
            presets_path: None,
        }
    }

    pub fn with_requirements(mut self, path: impl Into<PathBuf>) -> Self {
        self.requirements_path = Some(path.into());
        self
    }

    pub fn with_presets(mut self, path: impl Into<PathBuf>) -> Self {
        self.presets_path = Some(path.into());
        self
    }
}

#[async_trait]
impl PlannerDataSource for FileDataSource {
    #[instrument(skip(self), fields(path = %self.catalog_path.display()))]
    async fn load_catalog(&self) -> ImportResult<CatalogIndex> {
        let path = self.catalog_path.clone();

        let records = if UniversalFileParser::is_tabular(&path) {
            // 表格解析为阻塞 IO
            tokio::task::spawn_blocking(move || -> ImportResult<Vec<CourseRecord>> {
                let rows = UniversalFileParser.parse(&path)?;
                Ok(CatalogFieldMapper.map_rows(&rows))
            })
            .await??
        } else {
            let value: Value = read_json(&path).await?;
            catalog_records_from_json(value, &path)?
        };

        Ok(CatalogIndex::new(records))
    }

    async fn load_requirements(&self) -> ImportResult<Option<RequirementTable>> {
        match &self.requirements_path {
            Some(path) => Ok(Some(read_json(path).await?)),
            None => Ok(None),
        }
    }

    async fn load_presets(&self) -> ImportResult<PresetCatalog> {
        match &self.presets_path {
            Some(path) => read_json(path).await,
            None => Ok(PresetCatalog::default()),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> ImportResult<T> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&text).map_err(|e| ImportError::JsonParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// JSON 目录：记录数组，或 {代码: 记录} 对象
fn catalog_records_from_json(value: Value, path: &Path) -> ImportResult<Vec<CourseRecord>> {
    let entries: Vec<(Option<String>, Value)> = match value {
        Value::Array(items) => items.into_iter().map(|v| (None, v)).collect(),
        Value::Object(map) => map.into_iter().map(|(k, v)| (Some(k), v)).collect(),
        other => {
            return Err(ImportError::JsonParseError {
                path: path.display().to_string(),
                message: format!("课程目录应为数组或对象，实际为: {}", json_kind(&other)),
            })
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, (key, item)) in entries.into_iter().enumerate() {
        let mut raw: RawCourseRecord = match serde_json::from_value(item) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(index, error = %e, "跳过无法解析的课程记录");
                continue;
            }
        };
        if raw.code.as_deref().map_or(true, |c| c.trim().is_empty()) {
            raw.code = key;
        }
        match CourseRecord::from_raw(raw) {
            Some(record) => records.push(record),
            None => warn!(index, "跳过课程代码为空的记录"),
        }
    }
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
