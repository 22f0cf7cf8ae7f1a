//! src/routes/waitlist/mod.rs

mod post;

pub use post::*;
