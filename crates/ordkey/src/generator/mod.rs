mod batch;
mod between;
mod keygen;

pub use batch::*;
pub use between::*;
pub use keygen::*;
