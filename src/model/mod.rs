pub mod forward;
pub mod model;
pub mod persist;

pub use forward::ForwardTrace;
pub use model::Model;
