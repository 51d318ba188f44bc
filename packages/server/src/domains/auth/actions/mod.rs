//! Auth domain actions - credential checks and token resolution

mod authenticate;
mod login;

pub use authenticate::authenticate;
pub use login::{login, verify_credentials};
