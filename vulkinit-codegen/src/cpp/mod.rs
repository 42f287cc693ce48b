//! C++ code generation modules.

pub mod format;
pub mod params;
pub mod simple;
pub mod untagged;

pub use params::ParamsInitGenerator;
pub use simple::SimpleInitGenerator;
pub use untagged::UntaggedInitGenerator;
