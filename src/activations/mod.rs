mod act_fn;
mod identity;
mod relu;
mod sigmoid;

pub use act_fn::{ActFn, FnPair};
pub use identity::Identity;
pub use relu::Relu;
pub use sigmoid::Sigmoid;
