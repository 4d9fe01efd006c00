//! GLSL ES 3.00 sources for the single forward-lit program.
//!
//! Lighting is Phong from one directional key light, plus up to
//! `MAX_POINT_LIGHTS` short-range point lights and an overhead spot that
//! brightens a disc over the felt.

use glam::Vec3;

/// Direction the key light shines *from*, before normalisation.
pub const KEY_LIGHT_DIRECTION: Vec3 = Vec3::new(2.0, 5.0, 3.0);
pub const KEY_LIGHT_COLOR: Vec3 = Vec3::ONE;

pub const SPOT_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const SPOT_COLOR: Vec3 = Vec3::ONE;
pub const SPOT_INTENSITY: f32 = 0.3;
/// Radius of the lit disc in the XZ plane.
pub const SPOT_RADIUS: f32 = 0.88;

pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec4 aPosition;
in vec3 aNormal;
in vec2 aTexCoord;

uniform mat4 uModel;
uniform mat4 uView;
uniform mat4 uProjection;
uniform mat3 uNormalMatrix;

out vec3 vNormal;
out vec3 vWorldPos;
out vec2 vTexCoord;

void main() {
    vec4 world = uModel * aPosition;
    vWorldPos = world.xyz;
    vNormal = uNormalMatrix * aNormal;
    vTexCoord = aTexCoord;
    gl_Position = uProjection * uView * world;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

#define MAX_POINT_LIGHTS 4
#define POINT_LIGHT_RANGE 0.2

in vec3 vNormal;
in vec3 vWorldPos;
in vec2 vTexCoord;

uniform vec3 uAmbient;
uniform vec3 uDiffuse;
uniform vec3 uSpecular;
uniform float uShininess;
uniform sampler2D uTexture;
uniform bool uUseTexture;

uniform vec3 uKeyLightDir;
uniform vec3 uKeyLightColor;
uniform vec3 uViewPos;

uniform vec3 uPointLightPositions[MAX_POINT_LIGHTS];
uniform vec3 uPointLightColors[MAX_POINT_LIGHTS];
uniform float uPointLightIntensities[MAX_POINT_LIGHTS];
uniform int uPointLightCount;

uniform vec3 uSpotPosition;
uniform vec3 uSpotColor;
uniform float uSpotIntensity;
uniform float uSpotRadius;

out vec4 fragColor;

vec3 keyLight(vec3 n) {
    vec3 l = normalize(uKeyLightDir);
    vec3 v = normalize(uViewPos - vWorldPos);
    float diff = max(dot(n, l), 0.0);
    float spec = pow(max(dot(v, reflect(-l, n)), 0.0), uShininess);
    return (uAmbient * 1.5 + uDiffuse * diff * 2.0 + uSpecular * spec * 1.5) * uKeyLightColor;
}

vec3 pointLights() {
    vec3 sum = vec3(0.0);
    for (int i = 0; i < MAX_POINT_LIGHTS; i++) {
        if (i >= uPointLightCount) break;
        float d = length(uPointLightPositions[i] - vWorldPos);
        float falloff = max(POINT_LIGHT_RANGE - d, 0.0) / POINT_LIGHT_RANGE;
        sum += uPointLightColors[i] * falloff * uPointLightIntensities[i] * 0.8;
    }
    return sum;
}

vec3 spotDisc() {
    float r = length(vWorldPos.xz - uSpotPosition.xz);
    bool onTable = vWorldPos.y > 0.5 && vWorldPos.y < 1.5;
    return (r < uSpotRadius && onTable) ? uSpotColor * uSpotIntensity : vec3(0.0);
}

void main() {
    vec3 n = normalize(vNormal);
    vec4 texel = uUseTexture ? texture(uTexture, vTexCoord) : vec4(1.0);
    vec3 color = keyLight(n) * texel.rgb + pointLights() + spotDisc();
    fragColor = vec4(color, texel.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_light_cap_matches_config() {
        let define = format!("#define MAX_POINT_LIGHTS {}", crate::config::MAX_POINT_LIGHTS);
        assert!(FRAGMENT_SHADER.contains(&define));
    }

    #[test]
    fn sources_declare_es3() {
        assert!(VERTEX_SHADER.starts_with("#version 300 es"));
        assert!(FRAGMENT_SHADER.starts_with("#version 300 es"));
    }
}
