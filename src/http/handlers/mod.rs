pub mod assistant;
pub mod feedback;
pub mod health;
pub mod scan;

pub use assistant::scamgpt_handler;
pub use feedback::{feedback_handler, trust_score_handler};
pub use health::health_handler;
pub use scan::scan_handler;
