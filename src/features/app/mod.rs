mod parsing;
mod state;

pub use parsing::{parse_service_specs, parse_service_url};
pub use state::{AppState, FocusColumn, ServiceCard};
