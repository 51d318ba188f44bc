// HTTP routes
pub mod auth;
pub mod health;
pub mod leads;

pub use auth::*;
pub use health::*;
pub use leads::*;
