use std::fmt;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Display format shared by every timestamp the app shows or exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stable identifier of a task within one session.
///
/// Assigned by the store in creation order and never reused.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        TaskId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a single task in the session.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Session-unique identifier.
    pub id: TaskId,
    /// Free text as the user typed it.
    pub description: String,
    /// When the task was added.
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    /// When the task was completed; `None` while it is still active.
    #[serde(with = "timestamp::option")]
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// `created_at` in the display format.
    pub fn added_label(&self) -> String {
        format_timestamp(&self.created_at)
    }

    /// `completed_at` in the display format, empty while active.
    pub fn completed_label(&self) -> String {
        self.completed_at.as_ref().map(format_timestamp).unwrap_or_default()
    }
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serializes timestamps in [`TIMESTAMP_FORMAT`] rather than chrono's ISO form.
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(super::TIMESTAMP_FORMAT))
    }

    pub mod option {
        use chrono::NaiveDateTime;
        use serde::Serializer;

        pub fn serialize<S: Serializer>(ts: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, s),
                None => s.serialize_none(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_milli_opt(h, m, s, 750).unwrap()
    }

    #[test]
    fn labels_use_second_precision() {
        let task = Task {
            id: TaskId::new(1),
            description: "buy milk".into(),
            created_at: at(8, 4, 3),
            completed_at: Some(at(17, 30, 0)),
        };
        assert_eq!(task.added_label(), "2024-01-05 08:04:03");
        assert_eq!(task.completed_label(), "2024-01-05 17:30:00");
    }

    #[test]
    fn json_uses_display_format() {
        let task = Task {
            id: TaskId::new(7),
            description: "call mom".into(),
            created_at: at(10, 0, 0),
            completed_at: None,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["created_at"], "2024-01-05 10:00:00");
        assert!(json["completed_at"].is_null());
    }
}
