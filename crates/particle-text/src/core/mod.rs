pub mod mode;
pub mod time;
