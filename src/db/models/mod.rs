mod patient;
mod user;
mod worker;

pub use patient::*;
pub use user::*;
pub use worker::*;
