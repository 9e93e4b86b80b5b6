mod fetch;

pub use fetch::{StatusClient, parse_status_body};
