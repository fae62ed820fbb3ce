// Static vertex data uploaded once per demo

/// Square corners in triangle-strip order.
#[rustfmt::skip]
pub const SQUARE_POSITIONS: [f32; 8] = [
     1.0,  1.0,
    -1.0,  1.0,
     1.0, -1.0,
    -1.0, -1.0,
];

#[rustfmt::skip]
pub const SQUARE_COLORS: [f32; 16] = [
    1.0, 0.0, 0.0, 1.0,
    0.0, 1.0, 0.0, 1.0,
    0.0, 0.0, 1.0, 1.0,
    1.0, 1.0, 0.0, 1.0,
];

pub const SQUARE_VERTEX_COUNT: i32 = 4;

/// Floats per interleaved `xyz rgba` cube vertex.
pub const CUBE_STRIDE: i32 = 7;

/// Eight shared corners: the front four white, the back four green.
#[rustfmt::skip]
pub const CUBE_POSITION_COLOR: [f32; 56] = [
    // front
    -1.0, -1.0,  1.0,   1.0, 1.0, 1.0, 1.0,
     1.0, -1.0,  1.0,   1.0, 1.0, 1.0, 1.0,
     1.0,  1.0,  1.0,   1.0, 1.0, 1.0, 1.0,
    -1.0,  1.0,  1.0,   1.0, 1.0, 1.0, 1.0,
    // back
    -1.0, -1.0, -1.0,   0.0, 1.0, 0.0, 1.0,
     1.0, -1.0, -1.0,   0.0, 1.0, 0.0, 1.0,
     1.0,  1.0, -1.0,   0.0, 1.0, 0.0, 1.0,
    -1.0,  1.0, -1.0,   0.0, 1.0, 0.0, 1.0,
];

#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2,  0, 2, 3, // front
    4, 5, 6,  4, 6, 7, // back
    3, 2, 6,  3, 6, 7, // top
    0, 1, 5,  0, 4, 5, // bottom
    0, 3, 7,  0, 4, 7, // left
    2, 5, 6,  2, 3, 6, // right
];

/// Cube with four unshared vertices per face so each face can carry its own
/// texture coordinates and normal.
#[rustfmt::skip]
pub const FACE_CUBE_POSITIONS: [f32; 72] = [
    // front
    -1.0, -1.0,  1.0,   1.0, -1.0,  1.0,   1.0,  1.0,  1.0,  -1.0,  1.0,  1.0,
    // back
    -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,   1.0,  1.0, -1.0,  -1.0,  1.0, -1.0,
    // top
    -1.0,  1.0,  1.0,   1.0,  1.0,  1.0,   1.0,  1.0, -1.0,  -1.0,  1.0, -1.0,
    // bottom
    -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,   1.0, -1.0,  1.0,  -1.0, -1.0,  1.0,
    // right
     1.0, -1.0,  1.0,   1.0, -1.0, -1.0,   1.0,  1.0, -1.0,   1.0,  1.0,  1.0,
    // left
    -1.0, -1.0, -1.0,  -1.0, -1.0,  1.0,  -1.0,  1.0,  1.0,  -1.0,  1.0, -1.0,
];

#[rustfmt::skip]
pub const FACE_CUBE_NORMALS: [f32; 72] = [
     0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,
     0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,
     0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,
     0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,
     1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,
    -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,
];

pub const FACE_CUBE_INDEX_COUNT: i32 = 36;

/// Every face maps the whole texture.
pub fn face_cube_tex_coords() -> Vec<f32> {
    const FACE: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    FACE.repeat(6)
}

/// Two triangles per face: `(0, 1, 2)` and `(0, 2, 3)` relative to the face.
pub fn face_cube_indices() -> Vec<u16> {
    (0..6u16)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b, b + 2, b + 3]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_indices_stay_in_range() {
        let verts = CUBE_POSITION_COLOR.len() / CUBE_STRIDE as usize;
        assert_eq!(verts, 8);
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < verts));
    }

    #[test]
    fn face_cube_buffers_agree() {
        let idx = face_cube_indices();
        assert_eq!(idx.len(), FACE_CUBE_INDEX_COUNT as usize);
        assert_eq!(&idx[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&idx[30..], &[20, 21, 22, 20, 22, 23]);
        assert_eq!(face_cube_tex_coords().len() / 2, 24);
        assert_eq!(FACE_CUBE_POSITIONS.len() / 3, 24);
        assert_eq!(FACE_CUBE_NORMALS.len() / 3, 24);
    }

    #[test]
    fn normals_point_out_of_their_face() {
        // the position on a face, dotted with the face normal, is 1
        for v in 0..24 {
            let p = &FACE_CUBE_POSITIONS[v * 3..v * 3 + 3];
            let n = &FACE_CUBE_NORMALS[v * 3..v * 3 + 3];
            let d: f32 = p.iter().zip(n).map(|(a, b)| a * b).sum();
            assert_eq!(d, 1.0, "vertex {v}");
        }
    }

    #[test]
    fn square_has_a_color_per_corner() {
        assert_eq!(SQUARE_POSITIONS.len() / 2, SQUARE_VERTEX_COUNT as usize);
        assert_eq!(SQUARE_COLORS.len() / 4, SQUARE_VERTEX_COUNT as usize);
    }
}
