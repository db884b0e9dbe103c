pub mod latency;
pub mod memory;
pub mod seed;

pub use latency::{NoLatency, SimulatedLatency};
pub use memory::InMemoryCatalog;
