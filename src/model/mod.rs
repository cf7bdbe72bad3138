//! Pure data structures shared by the actors, the clients and the handler.

pub mod account;
pub mod marker;

pub use account::*;
pub use marker::*;
