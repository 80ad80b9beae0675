mod product;
mod responses;

pub use product::*;
pub use responses::*;
