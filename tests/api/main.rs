//! tests/api/main.rs

mod waitlist;
