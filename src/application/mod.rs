// Application layer - the services the console loops talk to.
// Each demo owns exactly one service instance for the life of the process.

pub mod error;
pub mod session;
pub mod teller;

pub use error::*;
pub use session::*;
pub use teller::*;
