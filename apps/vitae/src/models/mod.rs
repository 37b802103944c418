pub mod resume;
pub mod theme;

pub use resume::{LocalizedResume, Project, ResumeDocument};
