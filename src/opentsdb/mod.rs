pub mod converter;
mod descriptors;
mod response;
mod results;

pub use converter::*;
pub use descriptors::*;
pub use response::*;
pub use results::*;
