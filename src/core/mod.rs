pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod list;
pub mod log;
pub mod rate;
pub mod session;
