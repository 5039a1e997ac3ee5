pub mod bank;
pub mod handlers;

pub use bank::StudyProgress;
