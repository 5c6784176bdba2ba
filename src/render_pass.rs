pub struct RenderPass;

impl RenderPass {
    /// Clears the whole target to the bar color, then draws the scene inside
    /// the camera's viewport.
    pub fn render(device: &wgpu::Device, target: &wgpu::TextureView, target_size: (u32, u32), pipeline: &crate::Pipeline, camera: &crate::Camera, bars: crate::ClearColor) -> wgpu::CommandBuffer {
        let color_attachments = color_attachments(target, bars);
        let descriptor = render_pass_descriptor(&color_attachments);
        let pixels = camera.pixel_viewport(target_size);

        let mut encoder = create_command_encoder(device);
        let mut render_pass = encoder.begin_render_pass(&descriptor);

        if !pixels.is_empty() {
            let (x, y, width, height) = pixels.scissor_rect();

            render_pass.set_pipeline(&pipeline.inner);
            render_pass.set_bind_group(0, &pipeline.bind_group, &[]);
            render_pass.set_viewport(pixels.x, pixels.y, pixels.width, pixels.height, 0., 1.);
            render_pass.set_scissor_rect(x, y, width, height);
            render_pass.draw(0..3, 0..1);
        }

        drop(render_pass);
        encoder.finish()
    }
}

fn color_attachments(target: &wgpu::TextureView, bars: crate::ClearColor) -> Vec<wgpu::RenderPassColorAttachment> {
    let ops = wgpu::Operations { load: wgpu::LoadOp::Clear(bars.inner), store: true };

    vec![wgpu::RenderPassColorAttachment { view: target, resolve_target: None, ops }]
}

fn render_pass_descriptor<'a>(color_attachments: &'a [wgpu::RenderPassColorAttachment<'a>]) -> wgpu::RenderPassDescriptor<'a, 'a> {
    wgpu::RenderPassDescriptor { label: None, color_attachments, depth_stencil_attachment: None }
}

fn create_command_encoder(device: &wgpu::Device) -> wgpu::CommandEncoder {
    let descriptor = wgpu::CommandEncoderDescriptor { label: None };

    device.create_command_encoder(&descriptor)
}
