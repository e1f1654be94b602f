pub mod build;
pub mod computing;
