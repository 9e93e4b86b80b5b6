pub use crate::features::status::{StatusClient, parse_status_body};
