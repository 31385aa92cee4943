//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the grid engine integration tests.

#![allow(dead_code)]

use grid_engine::{ColumnDescriptor, ColumnFilterEngine, Row};
use std::cell::RefCell;
use std::rc::Rc;

/// A small student roster, shaped like the rows a school admin grid shows.
pub struct StudentFixture;

impl StudentFixture {
    pub fn json() -> &'static str {
        r#"[
            {"id": 1, "nameAr": "سارة", "nameEn": "Sara", "grade": "5", "branch": "North", "fees": 1200, "createdAt": "2024-01-02"},
            {"id": 2, "nameAr": "علي", "nameEn": "Ali", "grade": "6", "branch": "South", "fees": 1500, "createdAt": "2024-01-03"},
            {"id": 3, "nameAr": "منى", "nameEn": "Mona", "grade": "5", "branch": "South", "fees": 1200, "createdAt": "2024-01-04"},
            {"id": 4, "nameAr": "عمر", "nameEn": "Omar", "grade": "7", "branch": null, "fees": 900, "createdAt": "2024-01-05"},
            {"id": 5, "nameAr": "ليلى", "nameEn": "Laila", "grade": "6", "branch": "North", "fees": 1500, "createdAt": "2024-01-06"}
        ]"#
    }

    pub fn rows() -> Vec<Row> {
        serde_json::from_str(Self::json()).expect("fixture rows parse")
    }

    pub fn descriptors() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("nameAr", "الاسم"),
            ColumnDescriptor::new("grade", "Grade"),
            ColumnDescriptor::new("branch", "Branch"),
            ColumnDescriptor::new("fees", "Fees"),
            ColumnDescriptor {
                caption: "Actions".to_string(),
                ..Default::default()
            },
        ]
    }
}

/// Engine wired to a listener that records the size of every notification.
pub struct FilterHarness {
    pub engine: ColumnFilterEngine,
    pub notifications: Rc<RefCell<Vec<Vec<Row>>>>,
}

impl FilterHarness {
    pub fn new(rows: Vec<Row>) -> Self {
        Self::with_engine(ColumnFilterEngine::new(rows))
    }

    pub fn with_engine(mut engine: ColumnFilterEngine) -> Self {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        engine.on_filter(move |rows| sink.borrow_mut().push(rows.to_vec()));
        FilterHarness {
            engine,
            notifications,
        }
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.borrow().len()
    }

    pub fn last_notification(&self) -> Option<Vec<Row>> {
        self.notifications.borrow().last().cloned()
    }
}
