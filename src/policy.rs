/// Selects how `ViewportFixer::fix` recomputes the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    LetterboxPillarbox, // Desktop: always letterbox or pillarbox
    ReducedCanvas,      // Browser: shrink into the reference canvas while windowed
}

impl Policy {
    pub fn for_target() -> Self {
        if cfg!(target_arch = "wasm32") { Self::ReducedCanvas } else { Self::LetterboxPillarbox }
    }

    pub fn uses_reduced_canvas(&self, fullscreen: bool) -> bool {
        match self {
            Self::LetterboxPillarbox => false,
            Self::ReducedCanvas => !fullscreen,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::for_target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_canvas_only_while_windowed() {
        assert!(Policy::ReducedCanvas.uses_reduced_canvas(false));
        assert!(!Policy::ReducedCanvas.uses_reduced_canvas(true));
        assert!(!Policy::LetterboxPillarbox.uses_reduced_canvas(false));
        assert!(!Policy::LetterboxPillarbox.uses_reduced_canvas(true));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn desktop_targets_letterbox() {
        assert_eq!(Policy::default(), Policy::LetterboxPillarbox);
    }
}
