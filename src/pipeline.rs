use wgpu::util::DeviceExt;

/// Draws a tinted gradient over whatever viewport the pass has set, so the
/// letterboxed region is visible against the bars.
pub struct Pipeline {
    pub inner: wgpu::RenderPipeline,
    pub bind_group: wgpu::BindGroup,
    pub uniform: wgpu::Buffer,
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniform {
    tint: [f32; 4],
}

impl Pipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, tint: crate::ClearColor) -> Self {
        let uniform = create_uniform_buffer(device, tint);
        let layout = create_bind_group_layout(device);
        let bind_group = create_bind_group(device, &layout, &uniform);
        let inner = create_render_pipeline(device, &layout, format);

        Self { inner, bind_group, uniform }
    }

    pub fn set_tint(&self, queue: &wgpu::Queue, tint: crate::ClearColor) {
        queue.write_buffer(&self.uniform, 0, bytemuck::bytes_of(&scene_uniform(tint)));
    }
}

fn scene_uniform(tint: crate::ClearColor) -> SceneUniform {
    let c = tint.inner;
    SceneUniform { tint: [c.r as f32, c.g as f32, c.b as f32, c.a as f32] }
}

fn create_uniform_buffer(device: &wgpu::Device, tint: crate::ClearColor) -> wgpu::Buffer {
    let uniform = scene_uniform(tint);
    let descriptor = wgpu::util::BufferInitDescriptor {
        label: None,
        contents: bytemuck::bytes_of(&uniform),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    };

    device.create_buffer_init(&descriptor)
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let entries = &[wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }];

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor { label: None, entries })
}

fn create_bind_group(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, uniform: &wgpu::Buffer) -> wgpu::BindGroup {
    let entries = &[wgpu::BindGroupEntry { binding: 0, resource: uniform.as_entire_binding() }];

    device.create_bind_group(&wgpu::BindGroupDescriptor { label: None, layout, entries })
}

fn create_render_pipeline(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let source = wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into());
    let module = device.create_shader_module(&wgpu::ShaderModuleDescriptor { label: None, source });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: None,
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    let targets = &[wgpu::ColorTargetState { format, blend: None, write_mask: wgpu::ColorWrites::ALL }];

    let descriptor = wgpu::RenderPipelineDescriptor {
        label: None,
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState { module: &module, entry_point: "vs_main", buffers: &[] },
        fragment: Some(wgpu::FragmentState { module: &module, entry_point: "fs_main", targets }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
    };

    device.create_render_pipeline(&descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_uniform_is_four_packed_floats() {
        let uniform = scene_uniform(crate::ClearColor::new(0.25, 0.5, 0.75, 1.));

        assert_eq!(uniform.tint, [0.25, 0.5, 0.75, 1.]);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 16);
    }
}
