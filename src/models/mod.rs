// Resource schema and request shapes

pub mod user;
pub mod validation;

pub use user::*;
pub use validation::*;
