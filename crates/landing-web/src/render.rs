use glam::{Mat4, Vec3};
use landing_core::{
    BurstMotion, Camera, BG_REVEAL_FADE_SEC, BURST_COUNT, BURST_POINT_SIZE, STAR_COLOR,
    STAR_COUNT, STAR_POINT_SIZE,
};
use web_sys as web;

mod clouds;
mod helpers;
mod post;
mod targets;

use clouds::{create_cloud_resources, CloudResources, SceneUniforms};
use targets::RenderTargets;

// Shaders bundled as string constants
static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    clouds: CloudResources,
    burst_loaded: bool,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bg_hdr: wgpu::BindGroup,
    bg_from_bloom_a: wgpu::BindGroup,
    bg_from_bloom_b: wgpu::BindGroup,
    bg_bloom_a_only: wgpu::BindGroup,

    width: u32,
    height: u32,
    time_accum: f32,
    // 0..1 crossfade of the background gradient once revealing
    reveal_mix: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::create(&device, width, height);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let clouds = create_cloud_resources(&device, &scene_shader);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, targets::HDR_FORMAT, format);
        let (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only) = post::create_bind_groups(
            &device,
            &post,
            &linear_sampler,
            &targets.hdr_view,
            &targets.bloom_a_view,
            &targets.bloom_b_view,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            clouds,
            burst_loaded: false,
            targets,
            linear_sampler,
            post,
            bg_hdr,
            bg_from_bloom_a,
            bg_from_bloom_b,
            bg_bloom_a_only,
            width,
            height,
            time_accum: 0.0,
            reveal_mix: 0.0,
        })
    }

    /// Regenerate the confetti cloud for a fresh mount; previous contents are
    /// discarded, not pooled.
    pub fn spawn_burst(&mut self) {
        clouds::fill_burst(&self.queue, &self.clouds);
        self.burst_loaded = true;
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

            self.targets.recreate(&self.device, width, height);
            let (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only) =
                post::create_bind_groups(
                    &self.device,
                    &self.post,
                    &self.linear_sampler,
                    &self.targets.hdr_view,
                    &self.targets.bloom_a_view,
                    &self.targets.bloom_b_view,
                );
            self.bg_hdr = bg_hdr;
            self.bg_from_bloom_a = bg_from_bloom_a;
            self.bg_from_bloom_b = bg_from_bloom_b;
            self.bg_bloom_a_only = bg_bloom_a_only;
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        rotation: [f32; 2],
        star_scale: f32,
        burst: Option<BurstMotion>,
        revealing: bool,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let reveal_target = if revealing { 1.0 } else { 0.0 };
        let step = (dt_sec / BG_REVEAL_FADE_SEC).clamp(0.0, 1.0);
        self.reveal_mix += (reveal_target - self.reveal_mix).clamp(-step, step);

        let camera = Camera::fixed(self.width as f32 / self.height.max(1) as f32);
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();

        let star_model = Mat4::from_scale(Vec3::splat(star_scale))
            * Mat4::from_rotation_x(rotation[0])
            * Mat4::from_rotation_y(rotation[1]);
        let star_uniforms = SceneUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            model: star_model.to_cols_array_2d(),
            color: [STAR_COLOR[0], STAR_COLOR[1], STAR_COLOR[2], 1.0],
            misc: [STAR_POINT_SIZE, 0.0, 0.0, 0.0],
        };
        self.queue.write_buffer(
            &self.clouds.stars_uniforms,
            0,
            bytemuck::bytes_of(&star_uniforms),
        );

        let draw_burst = burst.is_some() && self.burst_loaded;
        if let Some(b) = burst {
            let burst_uniforms = SceneUniforms {
                view: view.to_cols_array_2d(),
                proj: proj.to_cols_array_2d(),
                model: Mat4::from_scale(Vec3::splat(b.scale)).to_cols_array_2d(),
                color: [1.0, 1.0, 1.0, b.opacity],
                misc: [BURST_POINT_SIZE, 0.0, 0.0, 0.0],
            };
            self.queue.write_buffer(
                &self.clouds.burst_uniforms,
                0,
                bytemuck::bytes_of(&burst_uniforms),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: clouds into the HDR target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.clouds.stars_pipeline);
            rpass.set_bind_group(0, &self.clouds.stars_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.clouds.stars_instances.slice(..));
            rpass.draw(0..6, 0..STAR_COUNT as u32);
            if draw_burst {
                rpass.set_pipeline(&self.clouds.burst_pipeline);
                rpass.set_bind_group(0, &self.clouds.burst_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.clouds.burst_instances.slice(..));
                rpass.draw(0..6, 0..BURST_COUNT as u32);
            }
        }

        let res = [self.width as f32 / 2.0, self.height as f32 / 2.0];

        // Pass 2: bright pass -> bloom_a
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.time_accum,
            self.reveal_mix,
            [0.0, 0.0],
        );
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bg_hdr,
            None,
        );

        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.time_accum,
            self.reveal_mix,
            [1.0, 0.0],
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_a,
            None,
        );

        // Pass 4: blur vertical bloom_b -> bloom_a
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.time_accum,
            self.reveal_mix,
            [0.0, 1.0],
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_b,
            None,
        );

        // Pass 5: composite to the swapchain
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.time_accum,
            self.reveal_mix,
            [0.0, 0.0],
        );
        post::blit(
            &mut encoder,
            "composite",
            &frame_view,
            wgpu::Color::BLACK,
            &self.post.composite_pipeline,
            &self.bg_hdr,
            Some(&self.bg_bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
