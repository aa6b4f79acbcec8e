/// WGSL shader for lit, instanced cuboids.
///
/// Lighting is ambient plus one Lambert directional term, all in linear
/// space; the sRGB surface handles encoding.
pub const MESH_SHADER: &str = r#"
struct Frame {
    view_proj: mat4x4<f32>,
    ambient: vec4<f32>,
    to_sun: vec4<f32>,
    sun: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: Frame;

struct CubeVertex {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct MeshInstance {
    @location(2) col0: vec4<f32>,
    @location(3) col1: vec4<f32>,
    @location(4) col2: vec4<f32>,
    @location(5) col3: vec4<f32>,
    @location(6) albedo: vec4<f32>,
};

struct Varyings {
    @builtin(position) clip: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) albedo: vec4<f32>,
};

@vertex
fn vs_main(v: CubeVertex, mesh: MeshInstance) -> Varyings {
    let model = mat4x4<f32>(mesh.col0, mesh.col1, mesh.col2, mesh.col3);

    var out: Varyings;
    out.clip = frame.view_proj * model * vec4<f32>(v.position, 1.0);
    // Cuboid normals are axis-aligned and models carry no rotation, so
    // scaling keeps their direction.
    out.normal = (model * vec4<f32>(v.normal, 0.0)).xyz;
    out.albedo = mesh.albedo;
    return out;
}

@fragment
fn fs_main(in: Varyings) -> @location(0) vec4<f32> {
    let lambert = max(dot(normalize(in.normal), frame.to_sun.xyz), 0.0);
    let light = frame.ambient.rgb + frame.sun.rgb * lambert;
    return vec4<f32>(in.albedo.rgb * light, in.albedo.a);
}
"#;
