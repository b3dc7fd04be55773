pub mod experiment;
pub mod gene;
pub mod insight;
pub mod space;

pub use experiment::*;
pub use gene::*;
pub use insight::*;
pub use space::*;

pub type Id = String;
