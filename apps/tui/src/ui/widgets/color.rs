use rand::Rng;
use ratatui::style::Color;

/// Translucent series color. Channels are sampled away from the dark end so
/// every series stays readable against the terminal background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl SeriesColor {
    /// Terminal cells have no alpha channel; approximate translucency by
    /// blending the color over a black background.
    pub fn to_color(self) -> Color {
        Color::Rgb(
            blend_channel(self.r, self.alpha),
            blend_channel(self.g, self.alpha),
            blend_channel(self.b, self.alpha),
        )
    }
}

/// Random series color: each channel uniform in [55, 255), alpha 0.7.
/// Every call is independent; identical data may color differently across
/// renders.
pub fn random_series_color() -> SeriesColor {
    let mut rng = rand::thread_rng();
    SeriesColor {
        r: rng.gen_range(55..255),
        g: rng.gen_range(55..255),
        b: rng.gen_range(55..255),
        alpha: 0.7,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(channel: u8, alpha: f32) -> u8 {
    (f32::from(channel) * alpha).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_stay_in_range_with_fixed_alpha() {
        for _ in 0..1000 {
            let color = random_series_color();
            for channel in [color.r, color.g, color.b] {
                assert!((55..255).contains(&channel), "channel {channel} out of range");
            }
            assert!((color.alpha - 0.7).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn blending_darkens_toward_black() {
        let color = SeriesColor {
            r: 200,
            g: 100,
            b: 60,
            alpha: 0.7,
        };
        assert_eq!(color.to_color(), Color::Rgb(140, 70, 42));
    }
}
