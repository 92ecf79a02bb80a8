// ==========================================
// 学位规划系统 - 规划导出
// ==========================================
// 格式: CSV
//   第一段: 学期, 槽位, 课程代码, 课程名称, 学分, 来源, 补充槽位, 缺失先修
//   第二段: 类别, 已选学分, 要求学分（空行分隔）
// ==========================================

use crate::domain::schedule::{Schedule, SlotPosition};
use crate::engine::catalog::CatalogIndex;
use crate::engine::categorizer::format_credits;
use crate::engine::evaluator::PlanEvaluation;
use crate::i18n::t;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

const SCHEDULE_HEADER: [&str; 8] = [
    "semester",
    "slot",
    "course_code",
    "title",
    "credits",
    "origin",
    "supplemental",
    "missing_prerequisites",
];

// ==========================================
// PlanExporter - 规划导出器
// ==========================================
pub struct PlanExporter<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> PlanExporter<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self { catalog }
    }

    /// 写出 CSV
    ///
    /// # 参数
    /// - `writer`: 输出目标
    /// - `schedule`: 课表（只导出已填槽位）
    /// - `evaluation`: 同一课表的评估结果
    ///
    /// # 返回
    /// 导出的课程行数
    pub fn write_csv<W: Write>(
        &self,
        writer: W,
        schedule: &Schedule,
        evaluation: &PlanEvaluation,
    ) -> ExportResult<usize> {
        let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        csv_writer.write_record(SCHEDULE_HEADER)?;

        let mut count = 0;
        for (semester_index, semester) in schedule.semesters().iter().enumerate() {
            for (slot_index, slot) in semester.slots().enumerate() {
                let Some(code) = slot.course_code() else {
                    continue;
                };
                let position = SlotPosition::new(semester_index, slot_index);
                let record = self.catalog.lookup(code);

                let missing = evaluation
                    .validation
                    .missing_for(position)
                    .map(|codes| {
                        codes
                            .iter()
                            .map(|c| self.catalog.display_code(c))
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .unwrap_or_default();

                csv_writer.write_record([
                    semester.name().to_string(),
                    slot_index.to_string(),
                    record.map_or_else(|| code.to_string(), |r| r.code.clone()),
                    record.map(|r| r.title.clone()).unwrap_or_default(),
                    record.map(|r| format_credits(r.credits)).unwrap_or_default(),
                    slot.origin().to_string(),
                    semester.is_supplemental(slot_index).to_string(),
                    missing,
                ])?;
                count += 1;
            }
        }

        // 学分汇总段
        csv_writer.write_record([""])?;
        csv_writer.write_record(["category", "selected", "required"])?;
        for line in evaluation.credits.lines() {
            csv_writer.write_record([
                t(&line.category.label_key()),
                format_credits(line.selected),
                format_credits(line.required),
            ])?;
        }
        if !evaluation.credits.missing_required.is_empty() {
            csv_writer.write_record([
                t("credits.missing_required_label"),
                evaluation.credits.missing_required.join(" "),
            ])?;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// 导出到文件
    pub fn export_to_path(
        &self,
        path: &Path,
        schedule: &Schedule,
        evaluation: &PlanEvaluation,
    ) -> ExportResult<usize> {
        let file = File::create(path)?;
        let count = self.write_csv(file, schedule, evaluation)?;
        info!(path = %path.display(), course_count = count, "规划已导出");
        Ok(count)
    }
}
