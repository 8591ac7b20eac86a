mod core;
mod report;


pub use self::core::run_check;
