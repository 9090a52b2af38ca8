mod record;
mod surface;

pub use self::{record::*, surface::*};
