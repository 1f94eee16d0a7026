pub mod audit_logs;
pub mod common;
pub mod dashboard;
pub mod entities;
pub mod export;
