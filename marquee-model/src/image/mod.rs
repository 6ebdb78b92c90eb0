pub mod kind;
pub mod resolved;

pub use kind::*;
pub use resolved::*;
