// GLSL ES 1.00 sources for the WebGL 1 demos

/// Position + per-vertex color, shared by the square and the colored cube.
pub const COLOR_VERT: &str = "
attribute vec4 iPosition;
attribute vec4 iColor;
uniform mat4 iPMatrix;
uniform mat4 iVMatrix;

varying vec4 vColor;

void main() {
    gl_Position = iPMatrix * iVMatrix * iPosition;
    vColor = iColor;
}";

pub const COLOR_FRAG: &str = "
precision lowp float;

varying vec4 vColor;

void main() {
    gl_FragColor = vColor;
}";

pub const TEXTURE_VERT: &str = "
attribute vec4 iPosition;
attribute vec2 iTextureCoord;
uniform mat4 iPMatrix;
uniform mat4 iVMatrix;

varying vec2 vTextureCoord;

void main() {
    gl_Position = iPMatrix * iVMatrix * iPosition;
    vTextureCoord = iTextureCoord;
}";

pub const TEXTURE_FRAG: &str = "
precision lowp float;

uniform sampler2D iSampler;
varying vec2 vTextureCoord;

void main() {
    gl_FragColor = texture2D(iSampler, vTextureCoord);
}";

/// Ambient plus one directional light, evaluated per vertex. `time` in
/// `[0, 1)` scrolls the texture along S.
pub const LIGHT_VERT: &str = "
attribute vec3 iPosition;
attribute vec2 iTextureCoord;
attribute vec3 iNormal;
uniform mat4 iPMatrix;
uniform mat4 iVMatrix;
uniform mat4 iNormalMatrix;
uniform float time;

varying vec2 vTextureCoord;
varying vec3 vLighting;

void main() {
    gl_Position = iPMatrix * iVMatrix * vec4(iPosition, 1.0);
    vTextureCoord = iTextureCoord + vec2(1.0, 0.0) * time;

    vec3 ambientLight = vec3(0.9, 0.95, 0.9);
    vec3 directionalVector = vec3(-0.5, 0.5, 0.5);
    vec3 directionalLightColor = vec3(0.2, 0.2, 0.2);

    vec4 transformedNormal = iNormalMatrix * vec4(iNormal, 0.0);
    float directional = max(dot(transformedNormal.xyz, directionalVector), 0.0);
    vLighting = ambientLight + directionalLightColor * directional;
}";

pub const LIGHT_FRAG: &str = "
precision lowp float;

uniform sampler2D iSampler;
varying vec2 vTextureCoord;
varying vec3 vLighting;

void main() {
    vec4 texel = texture2D(iSampler, vTextureCoord);
    gl_FragColor = vec4(texel.rgb * vLighting, texel.a);
}";
