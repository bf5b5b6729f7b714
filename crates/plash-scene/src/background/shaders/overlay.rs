/// Overlay image quad with wave, RGB split and scanlines
pub const SHADER_OVERLAY: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    center: vec3<f32>,
    time: f32,
    size: vec2<f32>,
    _pad0: f32,
    _pad1: f32,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;
@group(1) @binding(0) var overlay_texture: texture_2d<f32>;
@group(1) @binding(1) var overlay_sampler: sampler;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VsOut {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-0.5, -0.5),
        vec2<f32>(0.5, -0.5),
        vec2<f32>(0.5, 0.5),
        vec2<f32>(-0.5, -0.5),
        vec2<f32>(0.5, 0.5),
        vec2<f32>(-0.5, 0.5),
    );
    let c = corners[vertex_index];

    var out: VsOut;
    let world = uniforms.center + vec3<f32>(c * uniforms.size, 0.0);
    out.position = uniforms.view_proj * vec4<f32>(world, 1.0);
    out.uv = vec2<f32>(c.x + 0.5, 0.5 - c.y);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    // Horizontal wave
    var wave_uv = in.uv;
    wave_uv.x = wave_uv.x + sin(wave_uv.y * 10.0 + uniforms.time * 2.0) * 0.01;

    // RGB split
    let split = vec2<f32>(0.005, 0.0);
    let r = textureSample(overlay_texture, overlay_sampler, wave_uv + split).r;
    let g = textureSample(overlay_texture, overlay_sampler, wave_uv).g;
    let b = textureSample(overlay_texture, overlay_sampler, wave_uv - split).b;

    let scanline = sin(in.uv.y * 200.0 + uniforms.time * 5.0) * 0.05 + 0.95;

    // Unwarped alpha keeps the silhouette crisp
    let a = textureSample(overlay_texture, overlay_sampler, in.uv).a;

    let color = vec3<f32>(r, g, b) * scanline * 1.2;
    return vec4<f32>(color, a);
}
"#;
