pub mod chat;
pub mod checkin;
pub mod cycle;
pub mod greet;
pub mod journal;
pub mod status;
pub mod streak;
pub mod version;
