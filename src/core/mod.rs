pub mod duration;
pub mod log;
pub mod project;
pub mod rounding;
pub mod timer;
pub mod worktype;
