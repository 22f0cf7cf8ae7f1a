//! src/routes/mod.rs

mod health_check;
mod landing;
mod waitlist;

pub use health_check::*;
pub use landing::*;
pub use waitlist::*;
