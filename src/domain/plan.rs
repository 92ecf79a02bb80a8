// ==========================================
// 学位规划系统 - 已保存规划领域模型
// ==========================================
// 用途: 规划方案的持久化快照（不参与计算）
// ==========================================

use crate::domain::schedule::ScheduleSnapshot;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// SavedPlan - 已保存的规划方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub plan_id: String,             // 方案ID (uuid)
    pub plan_name: String,           // 方案名称
    pub major_id: Option<String>,    // 目标专业（可未选择）
    pub schedule: ScheduleSnapshot,  // 课表快照
    pub revision: i32,               // 乐观锁：修订号
    pub created_at: NaiveDateTime,   // 创建时间
    pub updated_at: NaiveDateTime,   // 更新时间
}

impl SavedPlan {
    /// 已排课程数量
    pub fn filled_slot_count(&self) -> usize {
        self.schedule
            .semesters
            .iter()
            .flat_map(|s| s.slots.iter())
            .filter(|slot| slot.course_code.is_some())
            .count()
    }
}
