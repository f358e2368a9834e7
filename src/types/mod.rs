mod coordinate;
mod proximity_match;
mod radial;
mod route;

pub use coordinate::*;
pub use proximity_match::*;
pub use radial::*;
pub use route::*;
