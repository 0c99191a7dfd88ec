pub mod classifier;
pub mod usage_dto;

pub use classifier::{classify, ClassifiedError, ErrorKind, FailureSignal};
