/// Domain models for the application
use serde::{Deserialize, Serialize};

/// One scheduled broadcast, as stored in the snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramEntry {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub desc: String,
}

/// One channel's programs for one date. Only produced when `epg` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSchedule {
    pub date: String,
    pub channel_id: String,
    pub channel_title: String,
    pub epg: Vec<ProgramEntry>,
}
