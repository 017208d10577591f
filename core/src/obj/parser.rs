//! Line-oriented OBJ parser.

use glam::Vec3;

use super::error::ObjError;

/// One corner of a triangular face.
///
/// Indices are 0-based (the source format is 1-based; the parser
/// subtracts 1). The normal index is absent when the corner token has no
/// third slash-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    /// Index into [`ObjMesh::positions`].
    pub position: u32,
    /// Index into [`ObjMesh::normals`], if the corner supplied one.
    pub normal: Option<u32>,
}

/// Raw geometry parsed from an OBJ resource.
///
/// Element identity is parse order: `positions[i]` is the `i`-th `v` line
/// in the file. Corners are kept both as a flat list (for normal lookup)
/// and folded into index triples (for index-buffer emission).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    /// Vertex positions from `v` lines, in parse order.
    pub positions: Vec<Vec3>,
    /// Vertex normals from `vn` lines, in parse order.
    pub normals: Vec<Vec3>,
    /// Every face corner across the whole file, in parse order.
    pub corners: Vec<FaceCorner>,
    /// Position index triples, one per `f` line.
    pub faces: Vec<[u32; 3]>,
    /// True iff at least one corner in the file carried a normal index.
    ///
    /// Decided once over the whole mesh; normal resolution branches on it
    /// uniformly — a mesh never mixes supplied and computed normals.
    pub uses_vertex_normals: bool,
}

impl ObjMesh {
    /// Parse OBJ text into raw geometry.
    ///
    /// Blank lines and `#` comments are skipped; unrecognized keywords are
    /// ignored. Faces must be triangles: only the first 3 corner tokens of
    /// an `f` line are read, any further tokens are ignored. The first
    /// error encountered aborts the parse.
    pub fn parse(text: &str) -> Result<Self, ObjError> {
        let mut mesh = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let Some(keyword) = fields.next() else {
                continue;
            };

            match keyword {
                "v" => {
                    let position = parse_vec3(&mut fields, line, "v")?;
                    mesh.positions.push(position);
                }
                "vn" => {
                    let normal = parse_vec3(&mut fields, line, "vn")?;
                    mesh.normals.push(normal);
                }
                "f" => mesh.parse_face(&mut fields, line)?,
                _ => {}
            }
        }

        log::debug!(
            "parsed OBJ: {} positions, {} normals, {} faces (supplied normals: {})",
            mesh.positions.len(),
            mesh.normals.len(),
            mesh.faces.len(),
            mesh.uses_vertex_normals
        );

        Ok(mesh)
    }

    /// Parse the first 3 corner tokens of an `f` line.
    fn parse_face<'a>(
        &mut self,
        fields: &mut impl Iterator<Item = &'a str>,
        line: usize,
    ) -> Result<(), ObjError> {
        let mut face = [0u32; 3];

        for slot in &mut face {
            let token = fields.next().ok_or_else(|| ObjError::MissingFields {
                line,
                keyword: "f".into(),
            })?;
            let corner = self.parse_corner(token, line)?;
            self.corners.push(corner);
            *slot = corner.position;

            if corner.normal.is_some() {
                self.uses_vertex_normals = true;
            }
        }

        self.faces.push(face);
        Ok(())
    }

    /// Parse one `v[/vt][/vn]` corner token into 0-based indices.
    fn parse_corner(&self, token: &str, line: usize) -> Result<FaceCorner, ObjError> {
        let parts: Vec<&str> = token.split('/').collect();

        let position_index = parse_index(parts[0], line)?;
        if position_index == 0 || position_index > self.positions.len() {
            return Err(ObjError::PositionOutOfRange {
                line,
                index: position_index,
                declared: self.positions.len(),
            });
        }

        // The middle slash-field is a texture coordinate index; ignored.
        let normal = if parts.len() >= 3 && !parts[2].is_empty() {
            let normal_index = parse_index(parts[2], line)?;
            if normal_index == 0 || normal_index > self.normals.len() {
                return Err(ObjError::NormalOutOfRange {
                    line,
                    index: normal_index,
                    declared: self.normals.len(),
                });
            }
            Some((normal_index - 1) as u32)
        } else {
            None
        };

        Ok(FaceCorner {
            position: (position_index - 1) as u32,
            normal,
        })
    }
}

/// Parse the next 3 fields as a locale-independent float triple.
fn parse_vec3<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    keyword: &str,
) -> Result<Vec3, ObjError> {
    let mut components = [0.0f32; 3];
    for component in &mut components {
        let token = fields.next().ok_or_else(|| ObjError::MissingFields {
            line,
            keyword: keyword.into(),
        })?;
        *component = token.parse().map_err(|_| ObjError::InvalidNumber {
            line,
            token: token.into(),
        })?;
    }
    Ok(Vec3::from_array(components))
}

/// Parse a 1-based index token.
fn parse_index(token: &str, line: usize) -> Result<usize, ObjError> {
    token.parse().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.into(),
    })
}
