pub(crate) mod clock;
pub(crate) mod frame_driver;
pub(crate) mod input;
pub(crate) mod surface;
