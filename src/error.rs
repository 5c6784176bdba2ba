#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    #[error("display of {width}x{height} has no area to fit a viewport into")]
    DegenerateDisplay { width: u32, height: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("no graphics adapter is compatible with the window surface")]
    NoAdapter,
    #[error("the surface reports no preferred format for this adapter")]
    NoSurfaceFormat,
    #[error("failed to request a device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("failed to acquire the next surface texture: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
