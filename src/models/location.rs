use serde::{Deserialize, Serialize};

/// 场景位置信息(仅场景标题有效)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,        // 地点名称
    pub interior: bool,      // 内景
    pub exterior: bool,      // 外景
    pub time_of_day: String, // 时间段，如 DAY / NIGHT，无则为空
}
