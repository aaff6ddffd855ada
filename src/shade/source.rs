use crate::assets::decode::SourceImage;
use crate::config::model::{GeneratorConfig, SourceKind};
use crate::foundation::core::{Point, Rgb};
use crate::shade::generators::generate;

/// Color returned for [`SourceKind::Image`] while no image has been decoded.
pub const IMAGE_FALLBACK: Rgb = Rgb::MID_GRAY;

/// Sample the active source at the (already pixelated) coordinate.
pub fn sample_source(
    kind: SourceKind,
    image: Option<&SourceImage>,
    uv: Point,
    time: f64,
    generator: &GeneratorConfig,
) -> Rgb {
    match kind {
        SourceKind::Image => image.map_or(IMAGE_FALLBACK, |img| img.sample_nearest(uv)),
        SourceKind::Generator => Rgb::gray(generate(uv, time, generator)),
    }
}
