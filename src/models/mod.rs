pub mod cluster;
pub mod condition;
pub mod enums;

pub use cluster::ResourceBundle;
pub use condition::{Condition, VideoRef};
pub use enums::Severity;
