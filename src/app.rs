pub use crate::features::app::{
    AppState, FocusColumn, ServiceCard, parse_service_specs, parse_service_url,
};
