pub(crate) mod presets;
pub(crate) mod quantize;
pub(crate) mod table;
