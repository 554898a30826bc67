pub mod batch;
pub mod simulator;

pub use simulator::SimulationSession;
