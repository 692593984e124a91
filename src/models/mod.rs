pub mod entry;
pub mod user;

pub use entry::{Entry, TIME_FORMAT};
pub use user::{User, DEFAULT_ROLE};
