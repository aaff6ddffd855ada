use crate::foundation::core::Rgb;

/// Brightness, then contrast, then saturation. Each stage consumes the previous one's output.
pub fn preprocess(color: Rgb, brightness: f64, contrast: f64, saturation: f64) -> Rgb {
    let c = apply_brightness(color, brightness);
    let c = apply_contrast(c, contrast);
    apply_saturation(c, saturation)
}

/// Add `brightness` to every channel.
pub fn apply_brightness(color: Rgb, brightness: f64) -> Rgb {
    color.offset(brightness)
}

/// `(c - 0.5) * contrast + 0.5` per channel.
pub fn apply_contrast(color: Rgb, contrast: f64) -> Rgb {
    color.map(|c| (c - 0.5) * contrast + 0.5)
}

/// Lerp from the luma gray toward the color; values above 1 extrapolate.
pub fn apply_saturation(color: Rgb, saturation: f64) -> Rgb {
    let gray = Rgb::gray(color.luma());
    Rgb::lerp(gray, color, saturation)
}

#[cfg(test)]
#[path = "../../tests/unit/shade/color.rs"]
mod tests;
