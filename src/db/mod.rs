pub mod feedback;
pub mod init;

pub use feedback::{FeedbackStore, MemoryFeedbackStore, PgFeedbackStore};
pub use init::connect;
