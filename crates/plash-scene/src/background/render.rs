use crate::overlay::{draw_order, DrawLayer};

use super::overlay_layer::OverlayLayer;
use super::passes::ScenePass;

/// Clear to black, then draw each layer back to front
pub fn render_scene_pass(
    encoder: &mut wgpu::CommandEncoder,
    output_view: &wgpu::TextureView,
    scene: &ScenePass,
    overlay: Option<&OverlayLayer>,
) {
    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Wallpaper Render Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: output_view,
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

    for layer in draw_order(scene.is_opaque()) {
        match layer {
            DrawLayer::Overlay => {
                if let Some(overlay) = overlay {
                    overlay.draw(&mut render_pass);
                }
            }
            DrawLayer::Scene => scene.draw(&mut render_pass),
        }
    }
}
