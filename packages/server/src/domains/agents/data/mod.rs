pub mod agent;

pub use agent::{AgentData, SignupInput};
