use serde::{Deserialize, Serialize};

/// Month names offered by the due-date prompt. Index `i` is month `i + 1`.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month/day pair. Neither field is checked against the calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub month: i32,
    pub day: i32,
}

impl Date {
    pub fn new(month: i32, day: i32) -> Self {
        Self { month, day }
    }

    /// Build a date from a zero-based index into [`MONTHS`].
    pub fn from_month_index(index: usize, day: i32) -> Self {
        Self {
            month: index as i32 + 1,
            day,
        }
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "dueDate")]
    pub due: Date,
    pub category: String,
    pub title: String,
    pub important: bool,
}

/// The fields a task can be edited on, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Important,
    Category,
    DueDate,
    Title,
}

impl Property {
    pub const ALL: [Self; 4] = [Self::Important, Self::Category, Self::DueDate, Self::Title];

    pub fn label(self) -> &'static str {
        match self {
            Self::Important => "Important",
            Self::Category => "Category",
            Self::DueDate => "Due Date",
            Self::Title => "Title",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A replacement value for exactly one [`Property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Important(bool),
    Category(String),
    DueDate(Date),
    Title(String),
}

impl PropertyValue {
    pub fn property(&self) -> Property {
        match self {
            Self::Important(_) => Property::Important,
            Self::Category(_) => Property::Category,
            Self::DueDate(_) => Property::DueDate,
            Self::Title(_) => Property::Title,
        }
    }
}

impl Task {
    /// Overwrite the single field named by `value`, leaving the rest untouched.
    pub fn apply(&mut self, value: PropertyValue) {
        match value {
            PropertyValue::Important(important) => self.important = important,
            PropertyValue::Category(category) => self.category = category,
            PropertyValue::DueDate(due) => self.due = due,
            PropertyValue::Title(title) => self.title = title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Task {
        Task {
            due: Date::new(3, 5),
            category: "home".into(),
            title: "buy milk".into(),
            important: false,
        }
    }

    #[test]
    fn task_serializes_with_persisted_field_names() {
        let json = serde_json::to_string(&milk()).unwrap();
        assert_eq!(
            json,
            r#"{"dueDate":{"month":3,"day":5},"category":"home","title":"buy milk","important":false}"#
        );
    }

    #[test]
    fn every_field_is_required_on_read() {
        let missing_category = r#"{"dueDate":{"month":3,"day":5},"title":"x","important":false}"#;
        assert!(serde_json::from_str::<Task>(missing_category).is_err());
    }

    #[test]
    fn out_of_calendar_dates_are_accepted() {
        let json = r#"{"dueDate":{"month":13,"day":99},"category":"","title":"odd","important":true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.due, Date::new(13, 99));
    }

    #[test]
    fn month_index_is_one_based() {
        assert_eq!(Date::from_month_index(0, 1).month, 1);
        assert_eq!(Date::from_month_index(11, 31).month, 12);
        assert_eq!(MONTHS[Date::from_month_index(2, 5).month as usize - 1], "March");
    }

    #[test]
    fn apply_changes_only_the_named_field() {
        let original = milk();

        let mut task = original.clone();
        task.apply(PropertyValue::Title("buy oat milk".into()));
        assert_eq!(task.title, "buy oat milk");
        assert_eq!(task.due, original.due);
        assert_eq!(task.category, original.category);
        assert_eq!(task.important, original.important);

        let mut task = original.clone();
        task.apply(PropertyValue::Important(true));
        assert!(task.important);
        assert_eq!(task.title, original.title);
    }

    #[test]
    fn property_labels_follow_menu_order() {
        let labels: Vec<&str> = Property::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Important", "Category", "Due Date", "Title"]);
        assert_eq!(PropertyValue::DueDate(Date::default()).property(), Property::DueDate);
    }
}
