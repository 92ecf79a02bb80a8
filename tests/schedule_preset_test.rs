// ==========================================
// 课表模型 + 预设方案导入集成测试
// ==========================================

mod helpers;

use degree_planner::domain::preset::PresetCatalog;
use degree_planner::domain::schedule::{Schedule, ScheduleLayout, SlotPosition};
use degree_planner::domain::types::SlotOrigin;
use degree_planner::engine::{PresetApplier, PresetApplyOptions};
use helpers::test_data_builder::{empty_schedule, sample_presets};

fn codes_in(schedule: &Schedule, semester: usize) -> Vec<String> {
    schedule
        .semester(semester)
        .unwrap()
        .slots()
        .filter_map(|s| s.course_code().map(str::to_string))
        .collect()
}

#[test]
fn test_move_into_occupied_slot_swaps() {
    let mut schedule = empty_schedule();
    schedule.select_course(0, 0, "CS 101");
    schedule.select_course(2, 3, "MA 111");

    let landed = schedule.move_course(0, 0, 2, Some(3));
    assert_eq!(landed, Some(SlotPosition::new(2, 3)));
    assert_eq!(schedule.slot(2, 3).unwrap().course_code(), Some("CS 101"));
    assert_eq!(schedule.slot(0, 0).unwrap().course_code(), Some("MA 111"));
    assert_eq!(schedule.filled_slots().count(), 2);
}

#[test]
fn test_move_to_full_semester_grows_supplemental_slot() {
    let mut schedule = empty_schedule();
    for slot in 0..6 {
        schedule.select_course(1, slot, &format!("CS {}", 100 + slot));
    }
    schedule.select_course(0, 0, "MA 111");

    let landed = schedule.move_course(0, 0, 1, None).unwrap();
    assert_eq!(landed, SlotPosition::new(1, 6));
    let semester = schedule.semester(1).unwrap();
    assert!(semester.is_supplemental(6));
    assert_eq!(semester.slot_count(), 7);
    assert!(schedule.slot(0, 0).unwrap().is_empty());
}

#[test]
fn test_move_out_of_supplemental_slot_removes_it() {
    let mut schedule = empty_schedule();
    let extra = schedule.add_supplemental_slot(0).unwrap();
    schedule.select_course(0, extra, "ENGL 101");

    schedule.move_course(0, extra, 4, None).unwrap();
    assert_eq!(schedule.semester(0).unwrap().supplemental_slot_count(), 0);
    assert_eq!(codes_in(&schedule, 4), vec!["ENGL 101"]);
}

#[test]
fn test_remove_slot_rules() {
    let mut schedule = empty_schedule();
    // 基础槽位不可删除
    assert!(!schedule.remove_supplemental_slot(0, 0));

    let extra = schedule.add_supplemental_slot(0).unwrap();
    schedule.select_course(0, extra, "CS 101");
    // 有课程的补充槽位需先清空
    assert!(!schedule.remove_supplemental_slot(0, extra));

    assert!(schedule.clear_course(0, extra));
    assert_eq!(schedule.semester(0).unwrap().slot_count(), 7);
    assert!(schedule.remove_supplemental_slot(0, extra));
    assert_eq!(schedule.semester(0).unwrap().slot_count(), 6);
}

#[test]
fn test_out_of_range_operations_are_noops() {
    let mut schedule = empty_schedule();
    assert!(!schedule.select_course(99, 0, "CS 101"));
    assert!(!schedule.select_course(0, 99, "CS 101"));
    assert!(!schedule.clear_course(42, 1));
    assert_eq!(schedule.add_supplemental_slot(42), None);
    assert_eq!(schedule.move_course(0, 0, 1, None), None);
    assert_eq!(schedule.filled_slots().count(), 0);
}

#[test]
fn test_semester_count_respects_minimum() {
    let mut schedule = Schedule::new(ScheduleLayout::default());
    assert_eq!(schedule.semester_count(), 11);
    assert!(!schedule.remove_last_semester());

    let index = schedule.append_semester();
    assert_eq!(index, 11);
    assert_eq!(
        schedule.semester(11).unwrap().name(),
        "Additional Semester 1"
    );
    assert!(schedule.remove_last_semester());
    assert_eq!(schedule.semester_count(), 11);
}

#[test]
fn test_apply_preset_places_rows_by_year_and_term() {
    let presets = sample_presets();
    let mut schedule = empty_schedule();
    schedule.select_course(0, 0, "ENGL 101");

    let report = PresetApplier::new(PresetApplyOptions::default())
        .apply_by_id(&mut schedule, &presets, "csse")
        .unwrap();

    assert_eq!(report.placed_count(), 4);
    assert_eq!(report.dropped_senior_summer.len(), 1);
    assert_eq!(report.unrecognized.len(), 1);

    assert_eq!(codes_in(&schedule, 0), vec!["ENGL 101", "CS 101", "MA 111"]);
    assert_eq!(codes_in(&schedule, 1), vec!["CSSE 220"]);
    assert_eq!(codes_in(&schedule, 3), vec!["CSSE 332"]);
    assert_eq!(
        schedule.slot(0, 1).unwrap().origin(),
        &SlotOrigin::PresetEntry {
            preset_id: "CSSE".to_string()
        }
    );
    assert_eq!(schedule.slot(0, 0).unwrap().origin(), &SlotOrigin::ManualEntry);
}

#[test]
fn test_reapplying_preset_replaces_previous_entries() {
    let presets = sample_presets();
    let applier = PresetApplier::new(PresetApplyOptions::default());
    let mut schedule = empty_schedule();

    applier.apply_by_id(&mut schedule, &presets, "CSSE").unwrap();
    let second = applier.apply_by_id(&mut schedule, &presets, "CSSE").unwrap();

    assert_eq!(second.cleared, 4);
    assert_eq!(second.placed_count(), 4);
    assert_eq!(schedule.filled_slots().count(), 4);
}

#[test]
fn test_rows_without_code_are_reported_not_fatal() {
    let presets: PresetCatalog = serde_json::from_str(
        r#"{"CSSE": [
            {"course_code": "CS 101", "year": "freshman", "semester": "fall"},
            {"year": "x"},
            {"code": null, "year": "freshman", "semester": "spring"}
        ]}"#,
    )
    .unwrap();
    let mut schedule = empty_schedule();

    let report = PresetApplier::new(PresetApplyOptions::default())
        .apply_by_id(&mut schedule, &presets, "CSSE")
        .unwrap();

    assert_eq!(report.placed_count(), 1);
    assert_eq!(report.unrecognized.len(), 2);
    assert_eq!(codes_in(&schedule, 0), vec!["CS 101"]);
    assert!(codes_in(&schedule, 1).is_empty());
}

#[test]
fn test_unknown_preset_returns_none() {
    let presets = sample_presets();
    let mut schedule = empty_schedule();
    assert!(PresetApplier::new(PresetApplyOptions::default())
        .apply_by_id(&mut schedule, &presets, "ME")
        .is_none());
}

#[test]
fn test_snapshot_restores_schedule() {
    let mut schedule = empty_schedule();
    schedule.select_course(0, 0, "CS 101");
    schedule.place_preset_course(2, 1, "MA 111", "CSSE");
    let extra = schedule.add_supplemental_slot(3).unwrap();
    schedule.select_course(3, extra, "ENGL 101");
    schedule.append_semester();

    let json = serde_json::to_string(&schedule.to_snapshot()).unwrap();
    let snapshot = serde_json::from_str(&json).unwrap();
    let restored = Schedule::from_snapshot(ScheduleLayout::default(), &snapshot);

    assert_eq!(restored, schedule);
}
