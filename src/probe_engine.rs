pub use crate::features::probe::engine::ProbeClient;
