pub mod assistant;
pub mod scan;
pub mod trust;

pub use assistant::ask_scamgpt;
pub use scan::scan_url;
pub use trust::{get_trust_score, submit_feedback};
