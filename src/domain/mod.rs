mod account;
mod board;
mod money;

pub use account::*;
pub use board::*;
pub use money::*;
