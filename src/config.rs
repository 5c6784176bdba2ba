#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FixerConfig {
    pub policy: crate::Policy,
    pub aspect_ratio: crate::AspectRatio,
    pub canvas: crate::ReferenceCanvas,
}

impl FixerConfig {
    pub fn new(policy: crate::Policy) -> Self {
        Self { policy, ..Self::default() }
    }

    pub fn with_aspect_ratio(self, aspect_ratio: crate::AspectRatio) -> Self {
        Self { aspect_ratio, ..self }
    }

    pub fn with_canvas(self, canvas: crate::ReferenceCanvas) -> Self {
        Self { canvas, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AspectRatio, Policy, ReferenceCanvas};

    #[test]
    fn defaults_to_sixteen_by_nine_and_the_publishing_canvas() {
        let config = FixerConfig::new(Policy::ReducedCanvas);

        assert_eq!(config.policy, Policy::ReducedCanvas);
        assert_eq!(config.aspect_ratio, AspectRatio::SIXTEEN_BY_NINE);
        assert_eq!(config.canvas, ReferenceCanvas::new(1280., 720.));
    }

    #[test]
    fn builders_replace_single_fields() {
        let config = FixerConfig::new(Policy::LetterboxPillarbox)
            .with_aspect_ratio(AspectRatio::new(3., 4.))
            .with_canvas(ReferenceCanvas::new(800., 600.));

        assert_eq!(config.policy, Policy::LetterboxPillarbox);
        assert_eq!(config.aspect_ratio.consequent, 4.);
        assert_eq!(config.canvas.height, 600.);
    }
}
