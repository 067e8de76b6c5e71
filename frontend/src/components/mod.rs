pub mod catalog;
pub mod notice;
