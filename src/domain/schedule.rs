// ==========================================
// 学位规划系统 - 课表领域模型
// ==========================================
// 职责: 学期 / 槽位数据模型与四类变更操作
// 红线: 每个学期始终保有基础槽位数；学期只在尾部增删，不重排
// 红线: 越界下标一律静默忽略（返回未生效），不报错
// ==========================================
// 槽位布局: [基础区 (固定长度) | 补充区 (可增长)]
// 槽位下标 < 基础槽位数 → 基础区；否则 → 补充区
// ==========================================

use crate::domain::course::canonical_code;
use crate::domain::types::{semester_display_name, SlotOrigin};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SlotPosition - 槽位坐标
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotPosition {
    pub semester: usize,
    pub slot: usize,
}

impl SlotPosition {
    pub fn new(semester: usize, slot: usize) -> Self {
        Self { semester, slot }
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}#{}", self.semester, self.slot)
    }
}

// ==========================================
// ScheduleLayout - 课表布局参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLayout {
    pub base_slots_per_semester: usize, // 每学期基础槽位数
    pub default_semester_count: usize,  // 初始学期数
    pub min_semester_count: usize,      // 最少学期数
}

impl Default for ScheduleLayout {
    fn default() -> Self {
        Self {
            base_slots_per_semester: 6,
            default_semester_count: 11,
            min_semester_count: 11,
        }
    }
}

// ==========================================
// Slot - 槽位
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    course_code: Option<String>,
    origin: SlotOrigin,
}

impl Slot {
    pub fn course_code(&self) -> Option<&str> {
        self.course_code.as_deref()
    }

    pub fn origin(&self) -> &SlotOrigin {
        &self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.course_code.is_none()
    }

    fn fill(&mut self, code: &str, origin: SlotOrigin) {
        self.course_code = Some(code.to_string());
        self.origin = origin;
    }

    fn clear(&mut self) {
        self.course_code = None;
        self.origin = SlotOrigin::None;
    }
}

// ==========================================
// Semester - 学期
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semester {
    name: String,
    base: Vec<Slot>,
    supplemental: Vec<Slot>,
}

impl Semester {
    fn new(name: String, base_slots: usize) -> Self {
        Self {
            name,
            base: vec![Slot::default(); base_slots],
            supplemental: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot_count(&self) -> usize {
        self.base.len() + self.supplemental.len()
    }

    pub fn base_slot_count(&self) -> usize {
        self.base.len()
    }

    pub fn supplemental_slot_count(&self) -> usize {
        self.supplemental.len()
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        if index < self.base.len() {
            self.base.get(index)
        } else {
            self.supplemental.get(index - self.base.len())
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        if index < self.base.len() {
            self.base.get_mut(index)
        } else {
            let offset = index - self.base.len();
            self.supplemental.get_mut(offset)
        }
    }

    /// 是否为补充槽位（越界返回 false）
    pub fn is_supplemental(&self, index: usize) -> bool {
        index >= self.base.len() && index < self.slot_count()
    }

    /// 按顺序遍历全部槽位（基础区在前）
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.base.iter().chain(self.supplemental.iter())
    }

    /// 第一个空槽位
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots().position(Slot::is_empty)
    }

    fn push_supplemental(&mut self) -> usize {
        self.supplemental.push(Slot::default());
        self.slot_count() - 1
    }

    fn remove_supplemental(&mut self, index: usize) -> Option<Slot> {
        if !self.is_supplemental(index) {
            return None;
        }
        Some(self.supplemental.remove(index - self.base.len()))
    }
}

// ==========================================
// Schedule - 课表
// ==========================================
// 允许同一课程出现在多个槽位（引擎需容忍重复）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    layout: ScheduleLayout,
    semesters: Vec<Semester>,
}

impl Schedule {
    /// 按布局创建空课表
    pub fn new(layout: ScheduleLayout) -> Self {
        let count = layout.default_semester_count.max(layout.min_semester_count);
        let semesters = (0..count)
            .map(|i| Semester::new(semester_display_name(i), layout.base_slots_per_semester))
            .collect();
        Self { layout, semesters }
    }

    pub fn layout(&self) -> &ScheduleLayout {
        &self.layout
    }

    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn semester(&self, index: usize) -> Option<&Semester> {
        self.semesters.get(index)
    }

    pub fn slot(&self, semester: usize, slot: usize) -> Option<&Slot> {
        self.semesters.get(semester).and_then(|s| s.slot(slot))
    }

    fn slot_mut(&mut self, semester: usize, slot: usize) -> Option<&mut Slot> {
        self.semesters.get_mut(semester).and_then(|s| s.slot_mut(slot))
    }

    pub fn first_empty_slot(&self, semester: usize) -> Option<usize> {
        self.semesters.get(semester).and_then(Semester::first_empty_slot)
    }

    /// 遍历全部已填槽位（按学期、槽位顺序）
    pub fn filled_slots(&self) -> impl Iterator<Item = (SlotPosition, &str)> {
        self.semesters.iter().enumerate().flat_map(|(si, semester)| {
            semester.slots().enumerate().filter_map(move |(pi, slot)| {
                slot.course_code()
                    .map(|code| (SlotPosition::new(si, pi), code))
            })
        })
    }

    /// 课表中是否已有该课程（按规范代码比较）
    pub fn contains_course(&self, code: &str) -> bool {
        let target = canonical_code(code);
        !target.is_empty()
            && self
                .filled_slots()
                .any(|(_, existing)| canonical_code(existing) == target)
    }

    // ==========================================
    // 变更操作
    // ==========================================

    /// 人工选课（来源 = ManualEntry）
    pub fn select_course(&mut self, semester: usize, slot: usize, code: &str) -> bool {
        self.set_course(semester, slot, code, SlotOrigin::ManualEntry)
    }

    /// 预设方案落位（来源 = PresetEntry）
    pub fn place_preset_course(
        &mut self,
        semester: usize,
        slot: usize,
        code: &str,
        preset_id: &str,
    ) -> bool {
        self.set_course(
            semester,
            slot,
            code,
            SlotOrigin::PresetEntry {
                preset_id: preset_id.to_string(),
            },
        )
    }

    fn set_course(&mut self, semester: usize, slot: usize, code: &str, origin: SlotOrigin) -> bool {
        let code = code.trim();
        if code.is_empty() {
            return false;
        }
        match self.slot_mut(semester, slot) {
            Some(target) => {
                target.fill(code, origin);
                true
            }
            None => false,
        }
    }

    /// 清空槽位课程与来源（补充槽位本身保留）
    pub fn clear_course(&mut self, semester: usize, slot: usize) -> bool {
        match self.slot_mut(semester, slot) {
            Some(target) => {
                target.clear();
                true
            }
            None => false,
        }
    }

    /// 追加补充槽位，返回新槽位下标
    pub fn add_supplemental_slot(&mut self, semester: usize) -> Option<usize> {
        self.semesters
            .get_mut(semester)
            .map(Semester::push_supplemental)
    }

    /// 删除补充槽位
    ///
    /// 基础槽位或仍有课程的槽位拒绝删除（调用方需先 clear_course）
    pub fn remove_supplemental_slot(&mut self, semester: usize, slot: usize) -> bool {
        let Some(target) = self.semesters.get_mut(semester) else {
            return false;
        };
        if !target.is_supplemental(slot) {
            return false;
        }
        if target.slot(slot).map_or(true, |s| !s.is_empty()) {
            return false;
        }
        target.remove_supplemental(slot).is_some()
    }

    /// 移动课程
    ///
    /// - 未指定目标槽位：取目标学期第一个空槽位，没有则新建补充槽位
    /// - 目标已有课程：两门课程互换
    /// - 目标为空：移入后清空源槽位（源为补充槽位时一并删除）
    ///
    /// # 返回
    /// - Some(SlotPosition): 课程最终所在位置
    /// - None: 源槽位为空或下标越界
    pub fn move_course(
        &mut self,
        from_semester: usize,
        from_slot: usize,
        to_semester: usize,
        to_slot: Option<usize>,
    ) -> Option<SlotPosition> {
        if self.slot(from_semester, from_slot)?.is_empty() {
            return None;
        }
        // 未指定槽位的同学期移动：保持原位
        if to_slot.is_none() && from_semester == to_semester {
            return Some(SlotPosition::new(from_semester, from_slot));
        }
        let target_semester = self.semesters.get_mut(to_semester)?;

        let mut target = match to_slot {
            Some(index) if index < target_semester.slot_count() => index,
            Some(_) => return None,
            None => match target_semester.first_empty_slot() {
                Some(index) => index,
                None => target_semester.push_supplemental(),
            },
        };

        if from_semester == to_semester && from_slot == target {
            return Some(SlotPosition::new(to_semester, target));
        }

        let target_occupied = self
            .slot(to_semester, target)
            .map_or(false, |s| !s.is_empty());

        let source = std::mem::take(self.slot_mut(from_semester, from_slot)?);
        let displaced = std::mem::take(self.slot_mut(to_semester, target)?);
        *self.slot_mut(to_semester, target)? = source;

        if target_occupied {
            *self.slot_mut(from_semester, from_slot)? = displaced;
        } else if self.semesters[from_semester].is_supplemental(from_slot) {
            self.semesters[from_semester].remove_supplemental(from_slot);
            if from_semester == to_semester && target > from_slot {
                target -= 1;
            }
        }

        Some(SlotPosition::new(to_semester, target))
    }

    /// 追加学期，返回新学期下标
    pub fn append_semester(&mut self) -> usize {
        let index = self.semesters.len();
        self.semesters.push(Semester::new(
            semester_display_name(index),
            self.layout.base_slots_per_semester,
        ));
        index
    }

    /// 删除最后一个学期（不得低于最少学期数）
    pub fn remove_last_semester(&mut self) -> bool {
        if self.semesters.len() <= self.layout.min_semester_count {
            return false;
        }
        self.semesters.pop().is_some()
    }

    /// 清空预设方案导入的课程
    ///
    /// preset_id 为 None 时清空全部预设来源；因此变空的补充槽位一并删除
    ///
    /// # 返回
    /// 清空的课程数
    pub fn clear_preset_entries(&mut self, preset_id: Option<&str>) -> usize {
        let matches = |origin: &SlotOrigin| match (origin.preset_id(), preset_id) {
            (Some(_), None) => true,
            (Some(id), Some(wanted)) => id.eq_ignore_ascii_case(wanted),
            (None, _) => false,
        };

        let mut cleared = 0;
        for semester in &mut self.semesters {
            for slot in semester.base.iter_mut() {
                if matches(&slot.origin) {
                    slot.clear();
                    cleared += 1;
                }
            }
            let before = semester.supplemental.len();
            semester.supplemental.retain(|slot| !matches(&slot.origin));
            cleared += before - semester.supplemental.len();
        }
        cleared
    }

    // ==========================================
    // 快照（持久化 / 导出的纯数据形状）
    // ==========================================

    pub fn to_snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            semesters: self
                .semesters
                .iter()
                .map(|semester| SemesterSnapshot {
                    name: semester.name.clone(),
                    slots: semester
                        .slots()
                        .enumerate()
                        .map(|(i, slot)| SlotSnapshot {
                            course_code: slot.course_code.clone(),
                            origin: OriginTag::from(&slot.origin),
                            preset_id: slot.origin.preset_id().map(str::to_string),
                            supplemental: semester.is_supplemental(i),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// 从快照恢复
    ///
    /// 每学期前 N 个槽位进入基础区（不足补空），其余进入补充区；
    /// 学期数不足最少学期数时补齐
    pub fn from_snapshot(layout: ScheduleLayout, snapshot: &ScheduleSnapshot) -> Self {
        let mut semesters: Vec<Semester> = snapshot
            .semesters
            .iter()
            .enumerate()
            .map(|(index, saved)| {
                let name = if saved.name.trim().is_empty() {
                    semester_display_name(index)
                } else {
                    saved.name.clone()
                };
                let mut semester = Semester::new(name, layout.base_slots_per_semester);
                for (i, saved_slot) in saved.slots.iter().enumerate() {
                    let slot = saved_slot.to_slot();
                    if i < semester.base.len() {
                        semester.base[i] = slot;
                    } else {
                        semester.supplemental.push(slot);
                    }
                }
                semester
            })
            .collect();

        while semesters.len() < layout.min_semester_count {
            let index = semesters.len();
            semesters.push(Semester::new(
                semester_display_name(index),
                layout.base_slots_per_semester,
            ));
        }

        Self { layout, semesters }
    }
}

// ==========================================
// 快照类型
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginTag {
    #[default]
    None,
    Manual,
    Preset,
}

impl From<&SlotOrigin> for OriginTag {
    fn from(origin: &SlotOrigin) -> Self {
        match origin {
            SlotOrigin::None => OriginTag::None,
            SlotOrigin::ManualEntry => OriginTag::Manual,
            SlotOrigin::PresetEntry { .. } => OriginTag::Preset,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSnapshot {
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub origin: OriginTag,
    #[serde(default)]
    pub preset_id: Option<String>,
    #[serde(default)]
    pub supplemental: bool,
}

impl SlotSnapshot {
    fn to_slot(&self) -> Slot {
        let code = self
            .course_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        match code {
            None => Slot::default(),
            Some(code) => {
                let origin = match self.origin {
                    OriginTag::Preset => SlotOrigin::PresetEntry {
                        preset_id: self.preset_id.clone().unwrap_or_default(),
                    },
                    OriginTag::Manual | OriginTag::None => SlotOrigin::ManualEntry,
                };
                Slot {
                    course_code: Some(code.to_string()),
                    origin,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slots: Vec<SlotSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    #[serde(default)]
    pub semesters: Vec<SemesterSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_layout() -> ScheduleLayout {
        ScheduleLayout {
            base_slots_per_semester: 2,
            default_semester_count: 3,
            min_semester_count: 2,
        }
    }

    fn code_at(schedule: &Schedule, semester: usize, slot: usize) -> Option<String> {
        schedule
            .slot(semester, slot)
            .and_then(|s| s.course_code().map(str::to_string))
    }

    #[test]
    fn test_new_schedule_has_base_slots() {
        let schedule = Schedule::new(small_layout());
        assert_eq!(schedule.semester_count(), 3);
        for semester in schedule.semesters() {
            assert_eq!(semester.slot_count(), 2);
            assert_eq!(semester.supplemental_slot_count(), 0);
        }
        assert_eq!(schedule.semester(0).unwrap().name(), "Freshman Fall");
    }

    #[test]
    fn test_select_and_clear() {
        let mut schedule = Schedule::new(small_layout());
        assert!(schedule.select_course(0, 1, "CS 101"));
        assert_eq!(code_at(&schedule, 0, 1).as_deref(), Some("CS 101"));
        assert_eq!(schedule.slot(0, 1).unwrap().origin(), &SlotOrigin::ManualEntry);

        assert!(schedule.place_preset_course(0, 1, "CS 102", "CSSE"));
        assert_eq!(
            schedule.slot(0, 1).unwrap().origin().preset_id(),
            Some("CSSE")
        );

        assert!(schedule.clear_course(0, 1));
        assert!(schedule.slot(0, 1).unwrap().is_empty());
        assert_eq!(schedule.slot(0, 1).unwrap().origin(), &SlotOrigin::None);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut schedule = Schedule::new(small_layout());
        let before = schedule.clone();
        assert!(!schedule.select_course(9, 0, "CS 101"));
        assert!(!schedule.select_course(0, 9, "CS 101"));
        assert!(!schedule.select_course(0, 0, "   "));
        assert!(!schedule.clear_course(7, 0));
        assert!(schedule.add_supplemental_slot(7).is_none());
        assert!(schedule.move_course(0, 0, 1, None).is_none());
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_supplemental_slot_removal_rules() {
        let mut schedule = Schedule::new(small_layout());
        // 基础槽位不可删除
        assert!(!schedule.remove_supplemental_slot(0, 0));

        let index = schedule.add_supplemental_slot(0).unwrap();
        assert_eq!(index, 2);
        assert!(schedule.select_course(0, index, "CS 101"));

        // 有课程时拒绝删除
        assert!(!schedule.remove_supplemental_slot(0, index));

        // 清空不删除槽位
        assert!(schedule.clear_course(0, index));
        assert_eq!(schedule.semester(0).unwrap().slot_count(), 3);

        assert!(schedule.remove_supplemental_slot(0, index));
        assert_eq!(schedule.semester(0).unwrap().slot_count(), 2);
    }

    #[test]
    fn test_move_into_occupied_slot_swaps() {
        let mut schedule = Schedule::new(small_layout());
        schedule.select_course(0, 0, "CS 101");
        schedule.place_preset_course(1, 1, "MA 111", "CSSE");

        let landed = schedule.move_course(0, 0, 1, Some(1)).unwrap();
        assert_eq!(landed, SlotPosition::new(1, 1));
        assert_eq!(code_at(&schedule, 1, 1).as_deref(), Some("CS 101"));
        assert_eq!(code_at(&schedule, 0, 0).as_deref(), Some("MA 111"));
        assert_eq!(schedule.slot(0, 0).unwrap().origin().preset_id(), Some("CSSE"));
        assert_eq!(schedule.filled_slots().count(), 2);
    }

    #[test]
    fn test_move_to_first_empty_or_new_supplemental() {
        let mut schedule = Schedule::new(small_layout());
        schedule.select_course(0, 0, "CS 101");
        schedule.select_course(1, 0, "MA 111");

        let landed = schedule.move_course(0, 0, 1, None).unwrap();
        assert_eq!(landed, SlotPosition::new(1, 1));
        assert!(schedule.slot(0, 0).unwrap().is_empty());

        // 目标学期已满 → 新建补充槽位
        schedule.select_course(0, 0, "PH 111");
        let landed = schedule.move_course(0, 0, 1, None).unwrap();
        assert_eq!(landed, SlotPosition::new(1, 2));
        assert!(schedule.semester(1).unwrap().is_supplemental(2));
        assert_eq!(code_at(&schedule, 1, 2).as_deref(), Some("PH 111"));
    }

    #[test]
    fn test_move_from_supplemental_removes_source() {
        let mut schedule = Schedule::new(small_layout());
        let extra = schedule.add_supplemental_slot(0).unwrap();
        schedule.select_course(0, extra, "CS 101");

        let landed = schedule.move_course(0, extra, 1, Some(0)).unwrap();
        assert_eq!(landed, SlotPosition::new(1, 0));
        assert_eq!(schedule.semester(0).unwrap().slot_count(), 2);
    }

    #[test]
    fn test_move_within_semester_adjusts_target_index() {
        let mut schedule = Schedule::new(small_layout());
        let first = schedule.add_supplemental_slot(0).unwrap();
        let second = schedule.add_supplemental_slot(0).unwrap();
        schedule.select_course(0, first, "CS 101");

        let landed = schedule.move_course(0, first, 0, Some(second)).unwrap();
        assert_eq!(landed, SlotPosition::new(0, 2));
        assert_eq!(code_at(&schedule, 0, 2).as_deref(), Some("CS 101"));
        assert_eq!(schedule.semester(0).unwrap().slot_count(), 3);
    }

    #[test]
    fn test_move_without_target_in_same_semester_is_noop() {
        let mut schedule = Schedule::new(small_layout());
        schedule.select_course(0, 0, "CS 101");
        schedule.select_course(0, 1, "MA 111");
        let before = schedule.clone();

        // 学期已满：不新建补充槽位
        let landed = schedule.move_course(0, 0, 0, None).unwrap();
        assert_eq!(landed, SlotPosition::new(0, 0));
        assert_eq!(schedule, before);

        // 学期有空位：也不挪动
        schedule.clear_course(0, 0);
        let before = schedule.clone();
        assert_eq!(
            schedule.move_course(0, 1, 0, None),
            Some(SlotPosition::new(0, 1))
        );
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_semester_append_and_min_count() {
        let mut schedule = Schedule::new(small_layout());
        assert!(schedule.remove_last_semester());
        assert_eq!(schedule.semester_count(), 2);
        assert!(!schedule.remove_last_semester());

        let index = schedule.append_semester();
        assert_eq!(index, 2);
        assert_eq!(schedule.semester(2).unwrap().base_slot_count(), 2);
    }

    #[test]
    fn test_clear_preset_entries_prunes_emptied_supplemental() {
        let mut schedule = Schedule::new(small_layout());
        schedule.place_preset_course(0, 0, "CS 101", "CSSE");
        schedule.select_course(0, 1, "MA 111");
        let extra = schedule.add_supplemental_slot(0).unwrap();
        schedule.place_preset_course(0, extra, "CS 102", "CSSE");
        schedule.place_preset_course(1, 0, "ME 101", "ME");

        assert_eq!(schedule.clear_preset_entries(Some("csse")), 2);
        assert!(schedule.slot(0, 0).unwrap().is_empty());
        assert_eq!(code_at(&schedule, 0, 1).as_deref(), Some("MA 111"));
        assert_eq!(schedule.semester(0).unwrap().slot_count(), 2);
        assert_eq!(code_at(&schedule, 1, 0).as_deref(), Some("ME 101"));

        assert_eq!(schedule.clear_preset_entries(None), 1);
    }

    #[test]
    fn test_snapshot_restores_regions() {
        let mut schedule = Schedule::new(small_layout());
        schedule.select_course(0, 0, "CS 101");
        let extra = schedule.add_supplemental_slot(0).unwrap();
        schedule.place_preset_course(0, extra, "CS 102", "CSSE");

        let snapshot = schedule.to_snapshot();
        assert!(snapshot.semesters[0].slots[2].supplemental);
        assert_eq!(snapshot.semesters[0].slots[2].origin, OriginTag::Preset);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"courseCode\":\"CS 101\""));
        assert!(json.contains("\"presetId\":\"CSSE\""));

        let restored = Schedule::from_snapshot(small_layout(), &snapshot);
        assert_eq!(restored, schedule);
    }

    #[test]
    fn test_snapshot_pads_to_minimum() {
        let snapshot = ScheduleSnapshot {
            semesters: vec![SemesterSnapshot {
                name: String::new(),
                slots: vec![SlotSnapshot {
                    course_code: Some("CS 101".to_string()),
                    ..Default::default()
                }],
            }],
        };
        let restored = Schedule::from_snapshot(small_layout(), &snapshot);
        assert_eq!(restored.semester_count(), 2);
        assert_eq!(restored.semester(0).unwrap().slot_count(), 2);
        assert_eq!(
            restored.slot(0, 0).unwrap().origin(),
            &SlotOrigin::ManualEntry
        );
    }
}
