pub(crate) mod color;
pub(crate) mod dither;
pub(crate) mod effects;
pub(crate) mod generators;
pub(crate) mod noise;
pub(crate) mod pixel;
pub(crate) mod sampler;
pub(crate) mod source;
