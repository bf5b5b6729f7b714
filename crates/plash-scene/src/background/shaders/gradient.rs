/// Domain-warped gradient field over a fullscreen triangle
pub const SHADER_GRADIENT: &str = r#"
struct Uniforms {
    time: f32,
    warp_strength: f32,
    resolution: vec2<f32>,
    noise_scale: f32,
    drift_speed: f32,
    _pad0: vec2<f32>,
    color_a: vec3<f32>,
    _pad1: f32,
    color_b: vec3<f32>,
    _pad2: f32,
    color_c: vec3<f32>,
    _pad3: f32,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VsOut {
    var out: VsOut;

    // Oversized triangle covering the screen
    let x = f32(i32(vertex_index & 1u) * 4 - 1);
    let y = f32(i32(vertex_index >> 1u) * 4 - 1);

    out.position = vec4<f32>(x, y, 0.0, 1.0);
    out.uv = vec2<f32>((x + 1.0) * 0.5, (1.0 - y) * 0.5);
    return out;
}

fn hash21(p: vec2<f32>) -> f32 {
    let p3 = fract(vec3<f32>(p.x, p.y, p.x) * 0.1031);
    let q = p3 + dot(p3, p3.yzx + 33.33);
    return fract((q.x + q.y) * q.z);
}

fn noise(p: vec2<f32>) -> f32 {
    let i = floor(p);
    let f = fract(p);
    let u = f * f * (3.0 - 2.0 * f);
    return mix(
        mix(hash21(i), hash21(i + vec2<f32>(1.0, 0.0)), u.x),
        mix(hash21(i + vec2<f32>(0.0, 1.0)), hash21(i + vec2<f32>(1.0, 1.0)), u.x),
        u.y
    );
}

fn fbm(p: vec2<f32>) -> f32 {
    var value = 0.0;
    var amplitude = 0.5;
    var q = p;
    for (var i = 0; i < 5; i = i + 1) {
        value = value + amplitude * noise(q);
        // rotate and scale between octaves to hide grid alignment
        q = vec2<f32>(1.6 * q.x + 1.2 * q.y, -1.2 * q.x + 1.6 * q.y);
        amplitude = amplitude * 0.5;
    }
    return value;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let aspect = uniforms.resolution.x / max(uniforms.resolution.y, 1.0);
    let p = vec2<f32>(in.uv.x * aspect, in.uv.y) * uniforms.noise_scale;
    let t = uniforms.time * uniforms.drift_speed;

    let q = vec2<f32>(
        fbm(p + vec2<f32>(0.0, t)),
        fbm(p + vec2<f32>(5.2, 1.3) - vec2<f32>(t * 0.5))
    );
    let r = vec2<f32>(
        fbm(p + uniforms.warp_strength * q + vec2<f32>(1.7, 9.2) + vec2<f32>(0.15 * t)),
        fbm(p + uniforms.warp_strength * q + vec2<f32>(8.3, 2.8) - vec2<f32>(0.126 * t))
    );
    let f = fbm(p + uniforms.warp_strength * r);

    var color = mix(uniforms.color_a, uniforms.color_b, clamp(f * f * 2.0, 0.0, 1.0));
    color = mix(color, uniforms.color_c, clamp(length(q) * 0.6, 0.0, 1.0));
    color = mix(color, uniforms.color_a, clamp(abs(r.x) * 0.5, 0.0, 1.0));
    color = color * (f * f * f + 0.6 * f * f + 0.5 * f) * 1.4;

    // Vignette
    let centered = in.uv - 0.5;
    let vignette = 1.0 - smoothstep(0.35, 0.85, length(centered));
    color = color * mix(0.55, 1.0, vignette);

    return vec4<f32>(color, 1.0);
}
"#;
