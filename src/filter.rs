use std::fmt::Display;

use pic_scale_safe::ResamplingFunction;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, strum::IntoStaticStr)]
/// Resampling filter used when changing an image's resolution.
///
/// The names follow the imagemagick `-filter` vocabulary.
pub enum Filter {
    Box,
    Catrom,
    Cubic,
    Gaussian,
    Hermite,
    #[default]
    Lanczos,
    Lanczos2,
    Mitchell,
    Point,
    Robidoux,
    Spline,
    Triangle,
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stringified: &'static str = self.into();
        f.write_str(stringified)
    }
}

impl Filter {
    pub fn into_resampling(self) -> ResamplingFunction {
        match self {
            Filter::Box => ResamplingFunction::Box,
            Filter::Catrom => ResamplingFunction::CatmullRom,
            Filter::Cubic => ResamplingFunction::Cubic,
            Filter::Gaussian => ResamplingFunction::Gaussian,
            Filter::Hermite => ResamplingFunction::Hermite,
            Filter::Lanczos => ResamplingFunction::Lanczos3,
            Filter::Lanczos2 => ResamplingFunction::Lanczos2,
            Filter::Mitchell => ResamplingFunction::MitchellNetravalli,
            Filter::Point => ResamplingFunction::Nearest,
            Filter::Robidoux => ResamplingFunction::Robidoux,
            Filter::Spline => ResamplingFunction::BSpline,
            Filter::Triangle => ResamplingFunction::Bilinear,
        }
    }
}
