use crate::model::ModelMesh;
use crate::text::LabelBitmap;
use landing_core::{FrameSnapshot, LabelId, LightingConfig, Star, StarfieldParams};
use web_sys as web;

mod helpers;
mod labels;
mod mesh;
mod stars;
mod targets;

use labels::LabelResources;
use mesh::MeshResources;
use stars::StarResources;
use targets::DepthTarget;

/// Per-frame values shared by every pass (group 0, binding 0).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    params: [f32; 4],
    viewport: [f32; 4],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,

    mesh: MeshResources,
    labels: LabelResources,
    stars: StarResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    lighting: LightingConfig,
    star_speed: f32,
    star_fade: bool,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        lighting: &LightingConfig,
        starfield: &StarfieldParams,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {width}x{height} {:?}", format);

        let depth = DepthTarget::new(&device, width, height);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals_buffer = helpers::uniform_buffer::<GlobalUniforms>(&device, "globals");
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let mesh = MeshResources::new(&device, &globals_bgl, format);
        let labels = LabelResources::new(&device, &globals_bgl, format);
        let stars = StarResources::new(&device, &globals_bgl, format);

        let bg = lighting.background;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            globals_buffer,
            globals_bg,
            mesh,
            labels,
            stars,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
            lighting: lighting.clone(),
            star_speed: starfield.speed,
            star_fade: starfield.fade,
        })
    }

    pub fn upload_stars(&mut self, stars: &[Star]) {
        self.stars.upload(&self.device, stars);
        log::info!("[gpu] {} stars uploaded", stars.len());
    }

    pub fn upload_label(&mut self, id: LabelId, bitmap: &LabelBitmap) {
        self.labels.upload(&self.device, &self.queue, id, bitmap);
    }

    pub fn upload_model(&mut self, mesh: &ModelMesh) {
        self.mesh.upload(&self.device, mesh);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Reapply the current configuration after the surface was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn write_globals(&self, snap: &FrameSnapshot) {
        let light = self.lighting.directional_position.normalize_or_zero();
        let g = GlobalUniforms {
            view_proj: snap.view_projection().to_cols_array_2d(),
            view: snap.view.to_cols_array_2d(),
            proj: snap.projection.to_cols_array_2d(),
            light_dir: light.extend(self.lighting.directional_intensity).to_array(),
            params: [
                self.lighting.ambient,
                snap.elapsed_sec,
                self.star_speed,
                if self.star_fade { 1.0 } else { 0.0 },
            ],
            viewport: [self.width as f32, self.height as f32, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }

    pub fn render(&mut self, snap: &FrameSnapshot) -> Result<(), wgpu::SurfaceError> {
        self.write_globals(snap);
        if let Some(model) = snap.model {
            self.mesh.write(&self.queue, model);
        }
        self.labels.write(&self.queue, &snap.labels);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // opaque first, then blended
            if snap.model.is_some() {
                self.mesh.draw(&mut rpass, &self.globals_bg);
            }
            self.stars.draw(&mut rpass, &self.globals_bg);
            self.labels.draw(&mut rpass, &self.globals_bg, &snap.labels);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
