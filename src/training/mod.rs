mod backprop;
mod forward;

pub(crate) use backprop::backpropagate;
pub(crate) use forward::forward;
