mod input;
mod movement;
mod probe;

pub(crate) use input::*;
pub(crate) use movement::*;
pub(crate) use probe::*;
