pub mod alert;
pub mod neighbor;
pub mod notice;
pub mod status;

pub use alert::{AlertCategory, AlertRecord};
pub use neighbor::{NeighborInput, NeighborRecord};
pub use notice::{BroadcastOutcome, BroadcastPrompt, BroadcastReceipt, DialRequest, Notice, NoticeKind};
pub use status::{Badge, StatusTag, Tone};
