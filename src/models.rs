pub mod chat;
pub mod feedback;
pub mod scan;

pub use chat::{ChatQuery, ChatReply};
pub use feedback::{FeedbackRecord, FeedbackStatus, NewFeedback, TrustScore};
pub use scan::{ScanResult, ScanTarget, ThreatLookup, ThreatMatch};
