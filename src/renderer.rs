use std::iter;
use futures::executor;
use winit::{dpi, window};

pub struct Renderer {
    pub window_size: dpi::PhysicalSize<u32>,
    pub surface: wgpu::Surface,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: crate::Pipeline,
}

impl Renderer {
    pub fn new(window: &window::Window, colors: crate::FrameColors) -> Result<Self, crate::RendererError> {
        let window_size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::Backends::PRIMARY);
        let surface = unsafe { instance.create_surface(window) };
        let adapter = get_adapter(&instance, &surface)?;
        let (device, queue) = get_device(&adapter)?;

        let format = surface.get_preferred_format(&adapter).ok_or(crate::RendererError::NoSurfaceFormat)?;
        let config = surface_configuration(format, window_size);
        configure_surface(&surface, &device, &config);

        let pipeline = crate::Pipeline::new(&device, format, colors.scene);
        log::info!("rendering to a {}x{} {:?} surface on {}", window_size.width, window_size.height, format, adapter.get_info().name);

        Ok(Self { window_size, surface, adapter, device, queue, config, pipeline })
    }

    pub fn resize(&mut self, new_size: &dpi::PhysicalSize<u32>) {
        self.window_size = *new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;

        configure_surface(&self.surface, &self.device, &self.config);
    }

    pub fn target_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn render(&mut self, camera: &crate::Camera, colors: crate::FrameColors) -> Result<(), crate::RendererError> {
        if self.window_size.width == 0 || self.window_size.height == 0 { return Ok(()); }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                configure_surface(&self.surface, &self.device, &self.config);
                return Ok(());
            },
            Err(error) => return Err(error.into()),
        };

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline.set_tint(&self.queue, colors.scene);
        let commands = crate::RenderPass::render(&self.device, &view, self.target_size(), &self.pipeline, camera, colors.bars);

        self.queue.submit(iter::once(commands));
        frame.present();

        Ok(())
    }
}

fn get_adapter(instance: &wgpu::Instance, surface: &wgpu::Surface) -> Result<wgpu::Adapter, crate::RendererError> {
    let options = wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        force_fallback_adapter: false,
        compatible_surface: Some(surface),
    };

    executor::block_on(instance.request_adapter(&options)).ok_or(crate::RendererError::NoAdapter)
}

fn get_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue), crate::RendererError> {
    let descriptor = wgpu::DeviceDescriptor {
        label: None,
        features: wgpu::Features::empty(),
        limits: wgpu::Limits::default(),
    };

    Ok(executor::block_on(adapter.request_device(&descriptor, None))?)
}

fn surface_configuration(format: wgpu::TextureFormat, window_size: dpi::PhysicalSize<u32>) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT, // Writes to the screen
        format,
        width: window_size.width,
        height: window_size.height,
        present_mode: wgpu::PresentMode::Fifo,         // Enable vsync
    }
}

// Minimized windows have no area and can't be configured.
fn configure_surface(surface: &wgpu::Surface, device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) {
    if config.width == 0 || config.height == 0 { return; }

    surface.configure(device, config);
}
