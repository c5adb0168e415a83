pub mod auth;
pub mod candidacy;
pub mod candidate;
pub mod counter;
pub mod election;
pub mod student;
