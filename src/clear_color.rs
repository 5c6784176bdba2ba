#[derive(Clone, Copy, Debug)]
pub struct ClearColor {
    pub inner: wgpu::Color,
}

impl ClearColor {
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        let inner = wgpu::Color {
            r: red as f64,
            g: green as f64,
            b: blue as f64,
            a: alpha as f64,
        };

        Self { inner }
    }

    pub fn black() -> Self {
        Self { inner: wgpu::Color::BLACK }
    }
}

/// The colors of one letterboxed frame: the bars outside the viewport and
/// the scene background inside it.
#[derive(Clone, Copy, Debug)]
pub struct FrameColors {
    pub bars: ClearColor,
    pub scene: ClearColor,
}

impl FrameColors {
    pub fn new(bars: ClearColor, scene: ClearColor) -> Self {
        Self { bars, scene }
    }
}

impl Default for FrameColors {
    fn default() -> Self {
        Self { bars: ClearColor::black(), scene: ClearColor::new(0.1, 0.2, 0.3, 1.) }
    }
}
