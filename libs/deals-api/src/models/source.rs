use serde::{Deserialize, Serialize};

/// Source : Where a response body was served from. Responses are always served
/// from the local snapshot, never from a live upstream call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "disk")]
    #[default]
    Disk,
}
