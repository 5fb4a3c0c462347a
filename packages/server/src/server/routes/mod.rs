// HTTP routes
pub mod health;
pub mod locations;

pub use health::*;
pub use locations::*;
