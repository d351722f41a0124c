pub mod equipment;
pub mod notice;
