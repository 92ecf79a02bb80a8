// ==========================================
// 学位规划系统 - 领域模型层
// ==========================================
// 职责: 定义课程、需求表、预设方案、课表等领域实体
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod course;
pub mod plan;
pub mod preset;
pub mod requirement;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use course::{canonical_code, department_from_code, CourseRecord, RawCourseRecord};
pub use plan::SavedPlan;
pub use preset::{Preset, PresetCatalog, PresetPlacement, PresetRow};
pub use requirement::{CategoryCredits, MajorRequirement, RequirementEntry, RequirementTable};
pub use schedule::{
    OriginTag, Schedule, ScheduleLayout, ScheduleSnapshot, Semester, SemesterSnapshot, Slot,
    SlotPosition, SlotSnapshot,
};
pub use types::{
    semester_display_name, semester_index, AcademicYear, RequirementCategory, SlotOrigin, Term,
    STANDARD_SEMESTER_COUNT,
};
