mod arithmetic;
mod codec;

pub use arithmetic::*;
pub use codec::*;
