/// Instanced starburst streaks: boxes stretched along Z flying toward the viewer
pub const SHADER_STARBURST: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    bounding_box: vec3<f32>,
    time: f32,
    min_scale: vec3<f32>,
    trail: f32,
    max_scale: vec3<f32>,
    glow_intensity: f32,
    color: vec3<f32>,
    brightness: f32,
    color_gradient: vec3<f32>,
    global_alpha: f32,
};

struct VsIn {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
    @location(2) random_scale: vec4<f32>,
    @location(3) random_vertex: vec4<f32>,
    @location(4) random_simulation: vec4<f32>,
    @location(5) random_fragment: vec4<f32>,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) random: vec4<f32>,
    @location(2) life: f32,
    @location(3) scale_grad: f32,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

fn map_range(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    return min2 + (value - min1) * (max2 - min2) / (max1 - min1);
}

fn ease_in_out_quad(x: f32) -> f32 {
    if (x < 0.5) {
        return 2.0 * x * x;
    }
    let k = -2.0 * x + 2.0;
    return 1.0 - k * k / 2.0;
}

@vertex
fn vs_main(in: VsIn) -> VsOut {
    var out: VsOut;

    let local_pos = in.position * mix(uniforms.min_scale, uniforms.max_scale, in.random_scale.xxz);
    var pos = in.random_vertex.xyz * uniforms.bounding_box;

    // 0 at the back face of the box, 1 at the front
    out.scale_grad = in.position.z + 0.5;

    // Each particle runs on its own clock, offset by its seed
    let t = uniforms.time * 0.1 * (in.random_simulation.x + 0.5) + in.random_vertex.z;
    let life = ease_in_out_quad(fract(t));
    out.life = life;

    pos.z = clamp(map_range(life, 0.0, 1.0, -uniforms.bounding_box.z, 20.0), -uniforms.bounding_box.z, 20.0);
    pos = pos + local_pos;

    out.uv = in.uv;
    out.random = in.random_fragment;
    out.position = uniforms.view_proj * vec4<f32>(pos, 1.0);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let trail = vec2<f32>(1.0, uniforms.trail);

    // Soft elongated glow
    let centered = in.uv * 2.0 - 1.0;
    let dist = length(centered * trail);
    var alpha = 1.0 - smoothstep(0.0, 1.0, dist);
    alpha = pow(max(alpha, 1e-6), uniforms.glow_intensity);

    // Fade in at birth, out before recycling
    let life_alpha = smoothstep(0.0, 0.1, in.life) * (1.0 - smoothstep(0.9, 1.0, in.life));
    alpha = alpha * life_alpha * uniforms.global_alpha;

    var color = mix(uniforms.color, uniforms.color_gradient, in.scale_grad);
    color = color * uniforms.brightness;
    color = color + vec3<f32>(in.random.x * 0.2, in.random.y * 0.1, in.random.z * 0.2);

    // Offset channels for a chromatic fringe
    let offset = vec2<f32>(0.02, 0.05);
    let rr = 1.0 - smoothstep(0.1, 1.0, length((in.uv + offset) * trail));
    let gg = 1.0 - smoothstep(0.6, 1.0, length(in.uv * trail));
    let bb = 1.0 - smoothstep(0.77, 1.0, length((in.uv - offset) * trail));
    color = color + vec3<f32>(rr, gg, bb);

    return vec4<f32>(color, alpha);
}
"#;
