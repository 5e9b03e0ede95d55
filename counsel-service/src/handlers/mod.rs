pub mod health;
pub mod index;
pub mod question;
pub mod report;

pub use health::{health_check, readiness_check};
pub use index::index;
pub use question::next_question;
pub use report::generate_report;
