use crate::engine::WallpaperEngine;
use crate::error::WallpaperError;

use super::init::*;
use super::overlay_layer::OverlayLayer;
use super::passes::ScenePass;
use super::render::render_scene_pass;

/// Intermediate struct for GPU resources during initialization
struct GpuResources {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    surface_format: wgpu::TextureFormat,
}

/// Draws one wallpaper variant onto a canvas
pub struct WallpaperRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    scene: ScenePass,
    overlay: Option<OverlayLayer>,
}

impl WallpaperRenderer {
    /// Create a renderer for the engine's variant.
    ///
    /// `with_overlay` builds the overlay pipeline up front; the image itself
    /// arrives later through [`WallpaperRenderer::set_overlay_image`].
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        engine: &WallpaperEngine,
        with_overlay: bool,
    ) -> Result<Self, WallpaperError> {
        let (instance, surface, width, height) = create_surface(canvas)?;
        let gpu = Self::setup_gpu(&instance, &surface, width, height).await?;

        let scene = ScenePass::new(&gpu.device, gpu.surface_format, engine);
        let overlay = with_overlay.then(|| OverlayLayer::new(&gpu.device, gpu.surface_format));

        Ok(Self::assemble(surface, gpu, scene, overlay))
    }

    /// Setup GPU device, queue, and surface configuration
    async fn setup_gpu(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
        width: u32,
        height: u32,
    ) -> Result<GpuResources, WallpaperError> {
        let (device, queue, adapter) = create_device(instance, surface).await?;
        let (surface_config, surface_format) =
            configure_surface(surface, &adapter, &device, width, height)?;

        Ok(GpuResources {
            device,
            queue,
            surface_config,
            surface_format,
        })
    }

    fn assemble(
        surface: wgpu::Surface<'static>,
        gpu: GpuResources,
        scene: ScenePass,
        overlay: Option<OverlayLayer>,
    ) -> Self {
        Self {
            device: gpu.device,
            queue: gpu.queue,
            surface,
            surface_config: gpu.surface_config,
            scene,
            overlay,
        }
    }

    /// Reconfigure the surface for a new backing size in device pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Upload a decoded overlay image. Ignored when built without an overlay.
    #[cfg(target_arch = "wasm32")]
    pub fn set_overlay_image(&mut self, bitmap: &web_sys::ImageBitmap) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.set_image(&self.device, &self.queue, bitmap);
        }
    }

    /// Render the engine's current state
    pub fn render(&mut self, engine: &WallpaperEngine) -> Result<(), WallpaperError> {
        let (width, height) = self.size();
        self.scene.update(&self.queue, engine, width, height);
        if let Some(overlay) = &self.overlay {
            overlay.update(&self.queue, engine);
        }

        let output = self.get_surface_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Wallpaper Encoder"),
            });

        render_scene_pass(&mut encoder, &view, &self.scene, self.overlay.as_ref());

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get surface texture with error handling
    fn get_surface_texture(&mut self) -> Result<wgpu::SurfaceTexture, WallpaperError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(WallpaperError::SkipFrame("surface reconfigured"))
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(WallpaperError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => Err(WallpaperError::SkipFrame("gpu timeout")),
        }
    }
}
