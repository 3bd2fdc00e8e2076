use super::helpers::{self, DepthMode, PipelineDesc};
use crate::text::LabelBitmap;
use landing_core::{LabelFrame, LabelId};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LabelUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) rect: [f32; 4],
    pub(crate) color: [f32; 4],
}

struct LabelGpu {
    id: LabelId,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _texture: wgpu::Texture,
}

/// One textured quad per label; glyph coverage comes from the bitmap alpha.
pub(crate) struct LabelResources {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    entries: Vec<LabelGpu>,
}

impl LabelResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        globals_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("label_shader"),
            source: wgpu::ShaderSource::Wgsl(landing_core::LABEL_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("label_bgl"),
            entries: &[
                helpers::uniform_entry(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("label_pl"),
            bind_group_layouts: &[globals_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_pipeline(
            device,
            PipelineDesc {
                label: "label_pipeline",
                layout: &layout,
                shader: &shader,
                buffers: &[],
                color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                // labels stay readable from behind as they swing around
                cull_mode: None,
                // the shader discards empty texels, so only glyphs occlude
                depth: DepthMode::Write,
            },
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("label_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        Self {
            pipeline,
            bgl,
            sampler,
            entries: Vec::new(),
        }
    }

    /// Upload the glyph bitmap for `id`, replacing any earlier one.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        id: LabelId,
        bitmap: &LabelBitmap,
    ) {
        let (texture, view) = helpers::create_texture(
            device,
            "label_glyphs",
            bitmap.width,
            bitmap.height,
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * bitmap.width),
                rows_per_image: Some(bitmap.height),
            },
            wgpu::Extent3d {
                width: bitmap.width,
                height: bitmap.height,
                depth_or_array_layers: 1,
            },
        );
        let uniform_buffer = helpers::uniform_buffer::<LabelUniforms>(device, "label_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("label_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });
        self.entries.retain(|e| e.id != id);
        self.entries.push(LabelGpu {
            id,
            uniform_buffer,
            bind_group,
            _texture: texture,
        });
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, frames: &[LabelFrame]) {
        for entry in &self.entries {
            let Some(f) = frames.iter().find(|f| f.id == entry.id) else {
                continue;
            };
            let u = LabelUniforms {
                model: f.transform.to_cols_array_2d(),
                rect: [f.rect.min.x, f.rect.min.y, f.rect.max.x, f.rect.max.y],
                color: f.color.extend(1.0).to_array(),
            };
            queue.write_buffer(&entry.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    /// Draw in the order of `frames`, which the scene hands over far to near.
    pub(crate) fn draw(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        globals: &wgpu::BindGroup,
        frames: &[LabelFrame],
    ) {
        if self.entries.is_empty() {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals, &[]);
        for f in frames {
            let Some(entry) = self.entries.iter().find(|e| e.id == f.id) else {
                continue;
            };
            rpass.set_bind_group(1, &entry.bind_group, &[]);
            rpass.draw(0..6, 0..1);
        }
    }
}
