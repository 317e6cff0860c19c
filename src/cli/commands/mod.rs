pub mod capsule;
pub mod export;
pub mod habit;
pub mod init;
pub mod workout;
