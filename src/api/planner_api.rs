// ==========================================
// 学位规划系统 - 规划 API
// ==========================================
// 职责: 持有当前课表，转发课表操作，评估 / 导入预设 / 保存 / 加载 / 导出
// 约束: 课表变更后由调用方按需调用 evaluate() 全量重算
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PlannerConfig;
use crate::domain::plan::SavedPlan;
use crate::domain::preset::PresetCatalog;
use crate::domain::requirement::RequirementTable;
use crate::domain::schedule::{Schedule, SlotPosition};
use crate::engine::evaluator::{PlanEvaluation, PlanEvaluator};
use crate::engine::preset::{PresetApplier, PresetApplyOptions, PresetApplyReport};
use crate::export::PlanExporter;
use crate::importer::PlannerData;
use crate::repository::schedule_repo::{PlanSummary, ScheduleRepository};
use std::path::Path;
use tracing::{info, instrument};

// ==========================================
// PlannerApi - 规划 API
// ==========================================
pub struct PlannerApi {
    config: PlannerConfig,
    schedule: Schedule,
    evaluator: PlanEvaluator,
    presets: PresetCatalog,
    major_id: Option<String>,
    repository: Option<ScheduleRepository>,
    // 当前已保存方案（save() 时按其 revision 做乐观锁更新）
    current_plan: Option<SavedPlan>,
}

impl PlannerApi {
    /// 创建新的 PlannerApi 实例
    ///
    /// # 参数
    /// - `data`: 已加载完成的目录 / 需求表 / 预设方案
    /// - `config`: 规划配置
    pub fn new(data: PlannerData, config: PlannerConfig) -> Self {
        let PlannerData {
            catalog,
            requirements,
            presets,
        } = data;

        Self {
            schedule: Schedule::new(config.schedule_layout()),
            evaluator: PlanEvaluator::new(catalog, requirements, &config),
            presets,
            major_id: None,
            repository: None,
            current_plan: None,
            config,
        }
    }

    /// 挂载方案存储
    pub fn with_repository(mut self, repository: ScheduleRepository) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn evaluator(&self) -> &PlanEvaluator {
        &self.evaluator
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    pub fn major_id(&self) -> Option<&str> {
        self.major_id.as_deref()
    }

    pub fn current_plan(&self) -> Option<&SavedPlan> {
        self.current_plan.as_ref()
    }

    /// 选择专业（None 表示未选择）
    ///
    /// 未知专业同样被接受：归集时按 "无专业" 处理
    pub fn set_major(&mut self, major_id: Option<&str>) {
        self.major_id = major_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }

    /// 替换需求表
    pub fn set_requirements(&mut self, requirements: Option<RequirementTable>) {
        self.evaluator.set_requirements(requirements);
    }

    // ==========================================
    // 课表操作（转发）
    // ==========================================

    pub fn select_course(&mut self, semester: usize, slot: usize, code: &str) -> bool {
        self.schedule.select_course(semester, slot, code)
    }

    pub fn clear_course(&mut self, semester: usize, slot: usize) -> bool {
        self.schedule.clear_course(semester, slot)
    }

    pub fn move_course(
        &mut self,
        from_semester: usize,
        from_slot: usize,
        to_semester: usize,
        to_slot: Option<usize>,
    ) -> Option<SlotPosition> {
        self.schedule
            .move_course(from_semester, from_slot, to_semester, to_slot)
    }

    pub fn add_supplemental_slot(&mut self, semester: usize) -> Option<usize> {
        self.schedule.add_supplemental_slot(semester)
    }

    pub fn remove_supplemental_slot(&mut self, semester: usize, slot: usize) -> bool {
        self.schedule.remove_supplemental_slot(semester, slot)
    }

    pub fn append_semester(&mut self) -> usize {
        self.schedule.append_semester()
    }

    pub fn remove_last_semester(&mut self) -> bool {
        self.schedule.remove_last_semester()
    }

    pub fn clear_preset_entries(&mut self, preset_id: Option<&str>) -> usize {
        self.schedule.clear_preset_entries(preset_id)
    }

    /// 清空课表（恢复为默认学期布局）
    pub fn reset_schedule(&mut self) {
        self.schedule = Schedule::new(self.config.schedule_layout());
        self.current_plan = None;
    }

    // ==========================================
    // 预设方案
    // ==========================================

    /// 导入预设方案
    ///
    /// # 错误
    /// - `ApiError::NotFound`: 预设方案不存在
    pub fn apply_preset(&mut self, preset_id: &str) -> ApiResult<PresetApplyReport> {
        self.apply_preset_with(preset_id, PresetApplyOptions::default())
    }

    pub fn apply_preset_with(
        &mut self,
        preset_id: &str,
        options: PresetApplyOptions,
    ) -> ApiResult<PresetApplyReport> {
        PresetApplier::new(options)
            .apply_by_id(&mut self.schedule, &self.presets, preset_id)
            .ok_or_else(|| ApiError::NotFound(format!("预设方案(id={})不存在", preset_id)))
    }

    // ==========================================
    // 评估
    // ==========================================

    pub fn evaluate(&self) -> PlanEvaluation {
        self.evaluator.evaluate(&self.schedule, self.major_id())
    }

    /// 单个槽位的缺失先修提示（槽位合法时为 None）
    pub fn slot_message(&self, semester: usize, slot: usize) -> Option<String> {
        self.evaluator
            .validate(&self.schedule)
            .describe_slot(SlotPosition::new(semester, slot), self.evaluator.catalog())
    }

    // ==========================================
    // 方案存储
    // ==========================================

    fn repository(&self) -> ApiResult<&ScheduleRepository> {
        self.repository.as_ref().ok_or(ApiError::StorageUnavailable)
    }

    /// 另存为新方案
    #[instrument(skip(self))]
    pub fn save_as(&mut self, plan_name: &str) -> ApiResult<SavedPlan> {
        let plan = self.repository()?.create(
            plan_name,
            self.major_id.as_deref(),
            &self.schedule.to_snapshot(),
        )?;
        info!(plan_id = %plan.plan_id, filled = plan.filled_slot_count(), "方案已保存");
        self.current_plan = Some(plan.clone());
        Ok(plan)
    }

    /// 保存到当前方案（乐观锁）
    ///
    /// # 错误
    /// - `ApiError::InvalidInput`: 当前课表尚未保存过
    /// - `ApiError::OptimisticLockFailure`: 方案已被其他会话修改
    #[instrument(skip(self))]
    pub fn save(&mut self) -> ApiResult<SavedPlan> {
        let current = self
            .current_plan
            .as_ref()
            .ok_or_else(|| ApiError::InvalidInput("当前课表尚未保存，请先另存为".to_string()))?;

        let plan = SavedPlan {
            major_id: self.major_id.clone(),
            schedule: self.schedule.to_snapshot(),
            ..current.clone()
        };
        let updated = self.repository()?.update(&plan)?;
        info!(plan_id = %updated.plan_id, revision = updated.revision, "方案已更新");
        self.current_plan = Some(updated.clone());
        Ok(updated)
    }

    /// 加载方案并替换当前课表
    #[instrument(skip(self))]
    pub fn load(&mut self, plan_id: &str) -> ApiResult<SavedPlan> {
        let plan = self
            .repository()?
            .find_by_id(plan_id)?
            .ok_or_else(|| ApiError::NotFound(format!("方案(id={})不存在", plan_id)))?;

        self.schedule = Schedule::from_snapshot(self.config.schedule_layout(), &plan.schedule);
        self.major_id = plan.major_id.clone();
        self.current_plan = Some(plan.clone());
        info!(plan_id, semesters = self.schedule.semester_count(), "方案已加载");
        Ok(plan)
    }

    pub fn list_plans(&self) -> ApiResult<Vec<PlanSummary>> {
        Ok(self.repository()?.list()?)
    }

    pub fn delete_plan(&mut self, plan_id: &str) -> ApiResult<()> {
        self.repository()?.delete(plan_id)?;
        if self
            .current_plan
            .as_ref()
            .map_or(false, |p| p.plan_id == plan_id)
        {
            self.current_plan = None;
        }
        Ok(())
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出 CSV，返回导出的课程行数
    pub fn export_csv(&self, path: &Path) -> ApiResult<usize> {
        let evaluation = self.evaluate();
        let count = PlanExporter::new(self.evaluator.catalog()).export_to_path(
            path,
            &self.schedule,
            &evaluation,
        )?;
        Ok(count)
    }
}
