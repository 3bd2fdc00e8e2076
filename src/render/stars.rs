use super::helpers::{self, DepthMode, PipelineDesc};
use landing_core::Star;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarInstance {
    pub(crate) pos_size: [f32; 4],
    pub(crate) color: [f32; 4],
}

impl From<&Star> for StarInstance {
    fn from(s: &Star) -> Self {
        Self {
            pos_size: s.position.extend(s.size).to_array(),
            color: s.color.extend(1.0).to_array(),
        }
    }
}

const STAR_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

/// Instanced point sprites; additive so overlapping stars brighten.
pub(crate) struct StarResources {
    pipeline: wgpu::RenderPipeline,
    instances: Option<wgpu::Buffer>,
    count: u32,
}

impl StarResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        globals_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(landing_core::STARS_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("stars_pl"),
            bind_group_layouts: &[globals_bgl],
            push_constant_ranges: &[],
        });
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StarInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &STAR_ATTRIBUTES,
        }];
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::Zero,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };
        let pipeline = helpers::make_pipeline(
            device,
            PipelineDesc {
                label: "stars_pipeline",
                layout: &layout,
                shader: &shader,
                buffers: &buffers,
                color_format,
                blend: Some(additive),
                cull_mode: None,
                depth: DepthMode::TestOnly,
            },
        );
        Self {
            pipeline,
            instances: None,
            count: 0,
        }
    }

    pub(crate) fn upload(&mut self, device: &wgpu::Device, stars: &[Star]) {
        let packed: Vec<StarInstance> = stars.iter().map(StarInstance::from).collect();
        if packed.is_empty() {
            self.instances = None;
            self.count = 0;
            return;
        }
        self.instances = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_instances"),
            contents: bytemuck::cast_slice(&packed),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.count = packed.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, globals: &wgpu::BindGroup) {
        let Some(instances) = &self.instances else {
            return;
        };
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals, &[]);
        rpass.set_vertex_buffer(0, instances.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
