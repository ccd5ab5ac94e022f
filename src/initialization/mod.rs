mod fixed;
mod param_gen;
mod random;

pub use fixed::FixedParamGen;
pub use param_gen::ParamGen;
pub use random::RandParamGen;
