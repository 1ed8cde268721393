pub mod coordinates;
pub mod poi;
pub mod route;

pub use coordinates::*;
pub use poi::*;
pub use route::*;
