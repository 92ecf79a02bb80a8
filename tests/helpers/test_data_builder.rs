// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use degree_planner::config::PlannerConfig;
use degree_planner::domain::course::CourseRecord;
use degree_planner::domain::preset::PresetCatalog;
use degree_planner::domain::requirement::RequirementTable;
use degree_planner::domain::schedule::{Schedule, ScheduleLayout};
use degree_planner::engine::CatalogIndex;
use degree_planner::importer::PlannerData;
use serde_json::json;

// ==========================================
// CourseRecord 构建器
// ==========================================

pub struct CourseBuilder {
    code: String,
    title: String,
    department: String,
    level: String,
    credits: f64,
    prerequisite_text: String,
}

impl CourseBuilder {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            title: format!("{} Title", code),
            department: String::new(),
            level: "100".to_string(),
            credits: 4.0,
            prerequisite_text: String::new(),
        }
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub fn credits(mut self, credits: f64) -> Self {
        self.credits = credits;
        self
    }

    pub fn prereq(mut self, text: &str) -> Self {
        self.prerequisite_text = text.to_string();
        self
    }

    pub fn build(self) -> CourseRecord {
        CourseRecord::new(
            &self.code,
            &self.title,
            &self.department,
            &self.level,
            self.credits,
            &self.prerequisite_text,
        )
    }
}

// ==========================================
// 样例数据
// ==========================================

/// 样例课程目录（CSSE 专业视角）
pub fn sample_catalog() -> CatalogIndex {
    CatalogIndex::new(vec![
        CourseBuilder::new("CS 101").build(),
        CourseBuilder::new("MA 111").build(),
        CourseBuilder::new("MA 113").build(),
        CourseBuilder::new("CS 301").prereq("CS 101 and (MA 111 or MA 113)").build(),
        CourseBuilder::new("CS 201").prereq("CS 101").build(),
        CourseBuilder::new("CSSE 220").prereq("CS 101").build(),
        CourseBuilder::new("CSSE 332").credits(6.0).prereq("CSSE 220").build(),
        CourseBuilder::new("CSSE 333").build(),
        CourseBuilder::new("ECE 233").build(),
        CourseBuilder::new("ECE 250").build(),
        CourseBuilder::new("ENGL 101").build(),
        CourseBuilder::new("ART 110").build(),
        CourseBuilder::new("MUS 150").department("ART").build(),
    ])
}

/// 样例需求表
///
/// CSSE: 专业选修上限 4，工程选修上限 8
pub fn sample_requirements() -> RequirementTable {
    serde_json::from_value(json!({
        "majors": {
            "CSSE": {
                "label": "Computer Science",
                "credits": {
                    "required_coursework": 60,
                    "degree_electives": 4,
                    "engineering_electives": 8,
                    "free_electives": 12,
                    "humanities_social_science_electives": 36
                }
            },
            "ECE": {
                "label": "Electrical Engineering",
                "credits": {
                    "degree_electives": 8,
                    "engineering_electives": 4
                }
            }
        },
        "courseRequirements": {
            "CS101": {
                "code": "CS 101",
                "requirement_type": "required_coursework",
                "required_for_majors": ["CSSE"]
            },
            "CSSE220": {
                "code": "CSSE 220",
                "requirement_type": "required_coursework",
                "required_for_majors": ["CSSE"]
            },
            "CSSE332": {
                "code": "CSSE 332",
                "requirement_type": "engineering_electives",
                "elective_for_majors": ["CSSE"]
            },
            "ECE233": {
                "code": "ECE 233",
                "requirement_type": "required_coursework",
                "required_for_majors": ["ECE"]
            }
        }
    }))
    .unwrap()
}

/// 样例预设方案
pub fn sample_presets() -> PresetCatalog {
    serde_json::from_value(json!({
        "CSSE": [
            {"course_code": "CS 101", "year": "Freshman", "semester": "Fall"},
            {"courseCode": "MA 111", "year": "freshman", "semester": "fall"},
            {"code": "CSSE 220", "year": "FR", "semester": "Spring"},
            {"code": "CSSE 332", "year": "Sophomore", "semester": "Fall"},
            {"code": "CSSE 497", "year": "Senior", "semester": "Summer"},
            {"code": "CSSE 498", "year": "Fifth", "semester": "Fall"}
        ]
    }))
    .unwrap()
}

pub fn sample_data() -> PlannerData {
    PlannerData {
        catalog: sample_catalog(),
        requirements: Some(sample_requirements()),
        presets: sample_presets(),
    }
}

pub fn empty_schedule() -> Schedule {
    Schedule::new(ScheduleLayout::default())
}

pub fn default_config() -> PlannerConfig {
    PlannerConfig::default()
}
