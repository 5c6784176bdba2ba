use crate::{Transition, ViewportError};

/// Keeps a camera's viewport at the configured aspect ratio as the display
/// enters fullscreen. Call `start` once, then `update` every frame.
pub struct ViewportFixer {
    pub config: crate::FixerConfig,
    pub monitor: crate::FullscreenMonitor,
}

impl ViewportFixer {
    pub fn new(config: crate::FixerConfig) -> Self {
        Self { config, monitor: crate::FullscreenMonitor::new(false) }
    }

    pub fn start(&mut self, metrics: &crate::DisplayMetrics, target: &mut dyn crate::ViewportTarget) -> Result<crate::Viewport, ViewportError> {
        self.monitor = crate::FullscreenMonitor::new(metrics.fullscreen);
        self.fix(metrics, target)
    }

    /// Letterboxes on the frame the display enters fullscreen. Leaving
    /// fullscreen only records the new state and keeps the viewport.
    pub fn update(&mut self, metrics: &crate::DisplayMetrics, target: &mut dyn crate::ViewportTarget) -> Result<Option<crate::Viewport>, ViewportError> {
        match self.monitor.poll(metrics.fullscreen) {
            Transition::Unchanged => {
                log::trace!("fullscreen unchanged ({})", metrics.fullscreen);
                Ok(None)
            },
            Transition::Exited => {
                log::info!("left fullscreen, keeping the current viewport");
                Ok(None)
            },
            Transition::Entered => {
                log::info!("entered fullscreen at {}x{}", metrics.drawable_width, metrics.drawable_height);

                let viewport = match self.letterbox(metrics) {
                    Ok(viewport) => viewport,
                    Err(error) => {
                        self.monitor.last_fullscreen = false; // Retry the edge next poll.
                        return Err(error);
                    },
                };

                apply(viewport, target);
                Ok(Some(viewport))
            },
        }
    }

    /// Recomputes and applies the viewport regardless of transitions.
    pub fn fix(&self, metrics: &crate::DisplayMetrics, target: &mut dyn crate::ViewportTarget) -> Result<crate::Viewport, ViewportError> {
        let viewport = self.compute(metrics)?;

        apply(viewport, target);
        Ok(viewport)
    }

    pub fn compute(&self, metrics: &crate::DisplayMetrics) -> Result<crate::Viewport, ViewportError> {
        if self.config.policy.uses_reduced_canvas(metrics.fullscreen) {
            self.reduced_canvas(metrics)
        } else {
            self.letterbox(metrics)
        }
    }

    fn letterbox(&self, metrics: &crate::DisplayMetrics) -> Result<crate::Viewport, ViewportError> {
        let (width, height) = non_degenerate(metrics.drawable_size())?;

        Ok(crate::Viewport::letterbox(width, height, self.config.aspect_ratio))
    }

    fn reduced_canvas(&self, metrics: &crate::DisplayMetrics) -> Result<crate::Viewport, ViewportError> {
        let (width, height) = non_degenerate(metrics.resolution())?;
        let crate::FixerConfig { aspect_ratio, canvas, .. } = self.config;

        Ok(crate::Viewport::reduced_canvas(width, height, metrics.fullscreen, aspect_ratio, canvas))
    }
}

impl Default for ViewportFixer {
    fn default() -> Self {
        Self::new(crate::FixerConfig::default())
    }
}

fn apply(viewport: crate::Viewport, target: &mut dyn crate::ViewportTarget) {
    log::debug!("applying viewport {:?}", viewport);
    target.set_viewport(viewport);
}

// Minimized windows report a zero size. Skip them rather than apply a
// collapsed or non-finite viewport.
fn non_degenerate((width, height): (u32, u32)) -> Result<(f32, f32), ViewportError> {
    if width == 0 || height == 0 {
        log::warn!("skipping viewport fix for a {}x{} display", width, height);
        return Err(ViewportError::DegenerateDisplay { width, height });
    }

    Ok((width as f32, height as f32))
}
