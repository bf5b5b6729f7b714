//! GPU resources and draw calls for each scene variant

use crate::engine::WallpaperEngine;
use crate::gradient::GradientConfig;
use crate::starburst::{box_geometry, BoxVertex, Starburst, StarburstInstance};
use crate::starfield::{LineVertex, Starfield};

use super::init::*;
use super::shaders::{SHADER_GRADIENT, SHADER_STARBURST, SHADER_STARFIELD};

/// Pipeline and buffers for the active scene
pub enum ScenePass {
    Starburst(StarburstPass),
    Starfield(StarfieldPass),
    Gradient(GradientPass),
}

impl ScenePass {
    /// Build GPU resources for whichever scene the engine runs
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, engine: &WallpaperEngine) -> Self {
        if let Some(scene) = engine.starburst() {
            ScenePass::Starburst(StarburstPass::new(device, format, scene))
        } else if let Some(field) = engine.starfield() {
            ScenePass::Starfield(StarfieldPass::new(device, format, field))
        } else {
            let config = engine.gradient().cloned().unwrap_or_default();
            ScenePass::Gradient(GradientPass::new(device, format, &config))
        }
    }

    /// Whether the scene overwrites every pixel (no blending)
    pub fn is_opaque(&self) -> bool {
        matches!(self, ScenePass::Gradient(_))
    }

    /// Upload this frame's uniforms and buffers
    pub fn update(&mut self, queue: &wgpu::Queue, engine: &WallpaperEngine, width: u32, height: u32) {
        match self {
            ScenePass::Starburst(pass) => pass.update(queue, engine),
            ScenePass::Starfield(pass) => pass.update(queue, engine),
            ScenePass::Gradient(pass) => pass.update(queue, engine, width, height),
        }
    }

    /// Record the draw into an open render pass
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        match self {
            ScenePass::Starburst(pass) => pass.draw(render_pass),
            ScenePass::Starfield(pass) => pass.draw(render_pass),
            ScenePass::Gradient(pass) => pass.draw(render_pass),
        }
    }
}

const BOX_VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4];

const LINE_VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Instanced boxes; instance seeds are uploaded once
pub struct StarburstPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    vertex_count: u32,
    instance_count: u32,
}

impl StarburstPass {
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat, scene: &Starburst) -> Self {
        let initial = scene.uniforms(0.0, &crate::math::Mat4::IDENTITY);
        let (uniform_buffer, bind_group_layout, bind_group) =
            create_uniform_resources(device, "Starburst", bytemuck::cast_slice(&[initial]));

        let vertices = box_geometry();
        let vertex_buffer =
            create_vertex_buffer(device, "Starburst Box Vertices", bytemuck::cast_slice(&vertices));
        let instance_buffer = create_vertex_buffer(
            device,
            "Starburst Instances",
            bytemuck::cast_slice(scene.instances()),
        );

        let buffers = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<BoxVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &BOX_VERTEX_ATTRIBUTES,
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<StarburstInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            },
        ];

        let pipeline = create_pipeline(
            device,
            format,
            &PipelineSpec {
                label: "Starburst",
                source: SHADER_STARBURST,
                bind_group_layouts: &[&bind_group_layout],
                buffers: &buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: Some(ADDITIVE_BLEND),
            },
        );

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            instance_buffer,
            vertex_count: vertices.len() as u32,
            instance_count: scene.instances().len() as u32,
        }
    }

    fn update(&mut self, queue: &wgpu::Queue, engine: &WallpaperEngine) {
        if let Some(scene) = engine.starburst() {
            let uniforms = scene.uniforms(engine.time(), &engine.view_projection());
            queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        }
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.instance_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..self.instance_count);
    }
}

/// Line streaks; the vertex buffer is rewritten every frame
pub struct StarfieldPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    scratch: Vec<LineVertex>,
}

impl StarfieldPass {
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat, field: &Starfield) -> Self {
        let initial = field.uniforms(&crate::math::Mat4::IDENTITY);
        let (uniform_buffer, bind_group_layout, bind_group) =
            create_uniform_resources(device, "Starfield", bytemuck::cast_slice(&[initial]));

        let vertex_count = (field.stars().len() * 2) as u32;
        let vertex_buffer = create_dynamic_vertex_buffer(
            device,
            "Starfield Line Vertices",
            vertex_count as u64 * std::mem::size_of::<LineVertex>() as u64,
        );

        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &LINE_VERTEX_ATTRIBUTES,
        }];

        let pipeline = create_pipeline(
            device,
            format,
            &PipelineSpec {
                label: "Starfield",
                source: SHADER_STARFIELD,
                bind_group_layouts: &[&bind_group_layout],
                buffers: &buffers,
                topology: wgpu::PrimitiveTopology::LineList,
                blend: Some(ADDITIVE_BLEND),
            },
        );

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_count,
            scratch: Vec::with_capacity(vertex_count as usize),
        }
    }

    fn update(&mut self, queue: &wgpu::Queue, engine: &WallpaperEngine) {
        if let Some(field) = engine.starfield() {
            let uniforms = field.uniforms(&engine.view_projection());
            queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

            field.fill_line_vertices(&mut self.scratch);
            if !self.scratch.is_empty() {
                queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.scratch));
            }
        }
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

/// Fullscreen triangle; everything happens in the fragment shader
pub struct GradientPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GradientPass {
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat, config: &GradientConfig) -> Self {
        let initial = config.uniforms(0.0, 1, 1);
        let (uniform_buffer, bind_group_layout, bind_group) =
            create_uniform_resources(device, "Gradient", bytemuck::cast_slice(&[initial]));

        let pipeline = create_pipeline(
            device,
            format,
            &PipelineSpec {
                label: "Gradient",
                source: SHADER_GRADIENT,
                bind_group_layouts: &[&bind_group_layout],
                buffers: &[],
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: None,
            },
        );

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    fn update(&mut self, queue: &wgpu::Queue, engine: &WallpaperEngine, width: u32, height: u32) {
        if let Some(config) = engine.gradient() {
            let uniforms = config.uniforms(engine.time(), width, height);
            queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        }
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.draw(0..3, 0..1);
    }
}
