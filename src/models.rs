use serde::{Deserialize, Serialize};

/// One recorded observation. `week` is a sequence ordinal assigned at
/// insertion, not a calendar week; `date` stays as the text the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub week: u32,
    pub weight: f64,
    pub date: String,
    pub dose: f64,
}

/// Raw form/JSON fields exactly as typed. Absent fields arrive as empty
/// strings so validation sees one shape for both transports.
#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub dose: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Notification event surfaced by the page's status line.
#[derive(Debug, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppendResponse {
    pub entry: WeightEntry,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<WeightEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub current_weight: f64,
    pub start_weight: f64,
    pub total_loss: f64,
    pub weight_trend: f64,
    pub entry_count: usize,
}
