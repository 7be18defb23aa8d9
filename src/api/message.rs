use serde::{Deserialize, Serialize};

/// Plain confirmation payload, e.g. `{"message": "Leave request deleted successfully"}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}
