// ==========================================
// 学位规划系统 - 预设方案导入引擎
// ==========================================
// 职责: 将专业预设方案逐行落位到课表
// 规则: 目标学期的第一个空槽位；已满时新增补充槽位
// 规则: 大四夏季无学期，整行丢弃
// 输出: PresetApplyReport（落位 / 丢弃 / 重复 / 无法识别）
// ==========================================

use crate::domain::preset::{Preset, PresetCatalog, PresetPlacement, PresetRow};
use crate::domain::schedule::{Schedule, SlotPosition};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// 导入选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetApplyOptions {
    /// 先清空同一预设方案此前导入的课程
    pub replace_existing: bool,
    /// 跳过课表中已存在的课程
    pub skip_duplicates: bool,
}

impl Default for PresetApplyOptions {
    fn default() -> Self {
        Self {
            replace_existing: true,
            skip_duplicates: true,
        }
    }
}

/// 导入结果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PresetApplyReport {
    pub preset_id: String,
    pub cleared: usize,
    pub placed: Vec<(SlotPosition, String)>,
    pub dropped_senior_summer: Vec<String>,
    pub duplicates: Vec<String>,
    pub unrecognized: Vec<PresetRow>,
}

impl PresetApplyReport {
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.dropped_senior_summer.len() + self.duplicates.len() + self.unrecognized.len()
    }
}

// ==========================================
// PresetApplier - 预设方案导入引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PresetApplier {
    options: PresetApplyOptions,
}

impl PresetApplier {
    pub fn new(options: PresetApplyOptions) -> Self {
        Self { options }
    }

    /// 按预设ID导入
    ///
    /// # 返回
    /// - Some(report): 导入完成
    /// - None: 预设方案不存在
    pub fn apply_by_id(
        &self,
        schedule: &mut Schedule,
        presets: &PresetCatalog,
        preset_id: &str,
    ) -> Option<PresetApplyReport> {
        match presets.get(preset_id) {
            Some(preset) => Some(self.apply(schedule, preset)),
            None => {
                warn!(preset_id, "预设方案不存在");
                None
            }
        }
    }

    /// 导入预设方案
    ///
    /// # 参数
    /// - `schedule`: 课表（会被修改）
    /// - `preset`: 预设方案
    #[instrument(skip(self, schedule, preset), fields(
        preset_id = %preset.preset_id,
        row_count = preset.rows.len()
    ))]
    pub fn apply(&self, schedule: &mut Schedule, preset: &Preset) -> PresetApplyReport {
        let mut report = PresetApplyReport {
            preset_id: preset.preset_id.clone(),
            ..PresetApplyReport::default()
        };

        if self.options.replace_existing {
            report.cleared = schedule.clear_preset_entries(Some(&preset.preset_id));
        }

        for row in &preset.rows {
            let code = row.course_code.trim();
            if code.is_empty() {
                report.unrecognized.push(row.clone());
                continue;
            }

            let semester = match row.placement() {
                PresetPlacement::Semester(index) => index,
                PresetPlacement::SeniorSummer => {
                    report.dropped_senior_summer.push(code.to_string());
                    continue;
                }
                PresetPlacement::Unrecognized => {
                    debug!(code, year = %row.year, semester = %row.semester, "无法识别的学年/学期");
                    report.unrecognized.push(row.clone());
                    continue;
                }
            };

            if self.options.skip_duplicates && schedule.contains_course(code) {
                report.duplicates.push(code.to_string());
                continue;
            }

            while schedule.semester_count() <= semester {
                schedule.append_semester();
            }

            let slot = match schedule.first_empty_slot(semester) {
                Some(slot) => slot,
                None => match schedule.add_supplemental_slot(semester) {
                    Some(slot) => slot,
                    None => continue,
                },
            };

            if schedule.place_preset_course(semester, slot, code, &preset.preset_id) {
                report.placed.push((SlotPosition::new(semester, slot), code.to_string()));
            }
        }

        info!(
            placed = report.placed_count(),
            cleared = report.cleared,
            dropped_senior_summer = report.dropped_senior_summer.len(),
            duplicates = report.duplicates.len(),
            unrecognized = report.unrecognized.len(),
            "预设方案导入完成"
        );

        report
    }
}
