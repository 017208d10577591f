//! Per-vertex normal resolution.
//!
//! A mesh either supplied normals in the file (some corner carried a `vn`
//! index) or it did not; the whole mesh takes one branch. In the lookup
//! branch each vertex copies the normal referenced by the first corner
//! that names it. In the compute branch smooth normals are accumulated
//! from the geometry of every face touching the vertex.

use glam::Vec3;

use crate::obj::ObjMesh;

/// Resolve one normal per position of `mesh`.
///
/// The returned vector has exactly `mesh.positions.len()` entries and the
/// result is deterministic for a given parse order. Entries may be the
/// zero vector (vertex never referenced, or its corners carry no usable
/// normal index) and, in the computed branch, are generally not unit
/// length.
pub fn resolve_normals(mesh: &ObjMesh) -> Vec<Vec3> {
    if mesh.uses_vertex_normals {
        lookup_normals(mesh)
    } else {
        accumulate_face_normals(mesh)
    }
}

/// Copy each vertex's normal from the first corner that references it.
///
/// The first corner in parse order whose position index matches the
/// vertex *and* which carries a normal index decides the vertex's normal.
/// If that index is out of bounds, or no such corner exists, the normal
/// stays zero; neither case is an error.
fn lookup_normals(mesh: &ObjMesh) -> Vec<Vec3> {
    // First normal index per vertex, filled in corner parse order. This
    // replaces a per-vertex linear scan over the corner list without
    // changing which corner wins.
    let mut first_normal = vec![None; mesh.positions.len()];
    for corner in &mesh.corners {
        let slot = &mut first_normal[corner.position as usize];
        if slot.is_none() && corner.normal.is_some() {
            *slot = corner.normal;
        }
    }

    first_normal
        .iter()
        .map(|index| match index {
            Some(n) if (*n as usize) < mesh.normals.len() => mesh.normals[*n as usize],
            _ => Vec3::ZERO,
        })
        .collect()
}

/// Accumulate smooth per-vertex normals from face geometry.
///
/// Each face contributes its unit face normal to all 3 of its vertices,
/// unweighted. The sums are intentionally left unnormalized; shaders
/// renormalize after interpolation, and emitting the raw accumulation
/// keeps output byte-stable across loads.
fn accumulate_face_normals(mesh: &ObjMesh) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; mesh.positions.len()];

    for face in &mesh.faces {
        let [a, b, c] = face.map(|i| i as usize);
        let pa = mesh.positions[a];
        let pb = mesh.positions[b];
        let pc = mesh.positions[c];

        // Degenerate faces (zero-area) contribute nothing.
        let face_normal = (pb - pa).cross(pc - pa).normalize_or_zero();

        normals[a] += face_normal;
        normals[b] += face_normal;
        normals[c] += face_normal;
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::FaceCorner;

    fn triangle() -> ObjMesh {
        ObjMesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap()
    }

    #[test]
    fn computed_single_triangle() {
        let mesh = triangle();
        let normals = resolve_normals(&mesh);
        // cross((1,0,0), (0,1,0)) normalized = (0,0,1); one contributing
        // face, so the sum equals that one normal.
        assert_eq!(normals, vec![Vec3::Z; 3]);
    }

    #[test]
    fn computed_sum_not_renormalized() {
        // Two coplanar triangles sharing an edge; the shared vertices
        // accumulate (0,0,1) twice and keep the raw sum.
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n";
        let mesh = ObjMesh::parse(text).unwrap();
        let normals = resolve_normals(&mesh);
        assert_eq!(normals[0], Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(normals[2], Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(normals[1], Vec3::Z);
        assert_eq!(normals[3], Vec3::Z);
    }

    #[test]
    fn computed_degenerate_face_contributes_nothing() {
        let text = "v 0 0 0\nv 1 0 0\nv 2 0 0\nf 1 2 3\n";
        let mesh = ObjMesh::parse(text).unwrap();
        let normals = resolve_normals(&mesh);
        assert_eq!(normals, vec![Vec3::ZERO; 3]);
    }

    #[test]
    fn supplied_normals_looked_up() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        let mesh = ObjMesh::parse(text).unwrap();
        assert!(mesh.uses_vertex_normals);
        let normals = resolve_normals(&mesh);
        assert_eq!(normals, vec![Vec3::Z; 3]);
    }

    #[test]
    fn first_matching_corner_wins() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvn 1 0 0\n\
                    f 1//1 2//1 3//1\nf 1//2 2//2 3//2\n";
        let mesh = ObjMesh::parse(text).unwrap();
        let normals = resolve_normals(&mesh);
        assert_eq!(normals, vec![Vec3::Z; 3]);
    }

    #[test]
    fn unreferenced_vertex_stays_zero() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 5 5 5\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        let mesh = ObjMesh::parse(text).unwrap();
        let normals = resolve_normals(&mesh);
        assert_eq!(normals[3], Vec3::ZERO);
    }

    #[test]
    fn corner_without_normal_leaves_zero() {
        // Flag forced on by another corner; vertex 4 is referenced only by
        // corners without a normal index and silently stays zero.
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\nvn 0 0 1\n\
                    f 1//1 2//1 3//1\nf 2 3 4\n";
        let mesh = ObjMesh::parse(text).unwrap();
        let normals = resolve_normals(&mesh);
        assert_eq!(normals[3], Vec3::ZERO);
        assert_eq!(normals[0], Vec3::Z);
    }

    #[test]
    fn out_of_bounds_first_normal_stays_zero() {
        // Hand-built mesh: the parser rejects out-of-range indices, but
        // the resolver still guards bounds for meshes built in code.
        let mesh = ObjMesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z],
            corners: vec![
                FaceCorner {
                    position: 0,
                    normal: Some(5),
                },
                FaceCorner {
                    position: 1,
                    normal: Some(0),
                },
                FaceCorner {
                    position: 2,
                    normal: Some(0),
                },
            ],
            faces: vec![[0, 1, 2]],
            uses_vertex_normals: true,
        };
        let normals = resolve_normals(&mesh);
        assert_eq!(normals[0], Vec3::ZERO);
        assert_eq!(normals[1], Vec3::Z);
    }

    #[test]
    fn branches_are_mutually_exclusive() {
        // Same geometry, flag flipped by the file contents.
        let supplied =
            ObjMesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 1 0 0\nf 1//1 2//1 3//1\n").unwrap();
        let computed = triangle();
        assert_eq!(resolve_normals(&supplied), vec![Vec3::X; 3]);
        assert_eq!(resolve_normals(&computed), vec![Vec3::Z; 3]);
    }
}
