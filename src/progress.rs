use serde::Serialize;

pub const COMPLETED_LABEL: &str = "Completed";
pub const REMAINING_LABEL: &str = "Remaining";

/// Completed-versus-remaining counts behind the progress chart.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub remaining: usize,
}

impl Progress {
    pub fn new(completed: usize, remaining: usize) -> Progress {
        Progress { completed, remaining }
    }

    pub fn total(&self) -> usize {
        self.completed + self.remaining
    }

    /// Rounded share of completed tasks, 0 for an empty session.
    pub fn percent_complete(&self) -> u8 {
        match self.total() {
            0 => 0,
            total => ((self.completed as f64 / total as f64) * 100.0).round() as u8,
        }
    }

    /// The two labelled bars in display order.
    pub fn bars(&self) -> [(&'static str, usize); 2] {
        [(COMPLETED_LABEL, self.completed), (REMAINING_LABEL, self.remaining)]
    }
}
