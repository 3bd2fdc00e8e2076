// Reads the landing model: triangle geometry from Wavefront OBJ text and
// diffuse colors from the companion MTL file. Only what the renderer draws is
// read (positions, normals, `usemtl` + `Kd`); everything else is skipped.

use fnv::FnvHashMap;
use glam::Vec3;
use landing_core::{srgb_to_linear, Aabb, AssetError};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Non-indexed triangle list plus its bounds in model units.
#[derive(Clone, Debug)]
pub struct ModelMesh {
    pub vertices: Vec<MeshVertex>,
    pub bounds: Aabb,
}

/// Material name -> linear diffuse color.
pub type MaterialTable = FnvHashMap<String, Vec3>;

pub const DEFAULT_DIFFUSE: Vec3 = Vec3::ONE;

fn parse_err(path: &str, line: usize, message: impl Into<String>) -> AssetError {
    AssetError::Parse {
        path: path.to_string(),
        line,
        message: message.into(),
    }
}

fn parse_vec3<'a>(
    path: &str,
    line: usize,
    mut it: impl Iterator<Item = &'a str>,
) -> Result<Vec3, AssetError> {
    let mut v = [0.0f32; 3];
    for c in &mut v {
        let tok = it
            .next()
            .ok_or_else(|| parse_err(path, line, "expected three numbers"))?;
        *c = tok
            .parse::<f32>()
            .map_err(|e| parse_err(path, line, format!("bad number '{tok}': {e}")))?;
    }
    Ok(Vec3::from_array(v))
}

pub fn parse_mtl(path: &str, src: &str) -> Result<MaterialTable, AssetError> {
    let mut table = MaterialTable::default();
    let mut current: Option<String> = None;
    for (i, raw) in src.lines().enumerate() {
        let line_no = i + 1;
        let mut parts = raw.split_whitespace();
        match parts.next() {
            Some("newmtl") => {
                let name = parts.collect::<Vec<_>>().join(" ");
                table.insert(name.clone(), DEFAULT_DIFFUSE);
                current = Some(name);
            }
            Some("Kd") => {
                let kd = parse_vec3(path, line_no, parts)?;
                match &current {
                    Some(name) => {
                        table.insert(name.clone(), srgb_to_linear(kd));
                    }
                    None => return Err(parse_err(path, line_no, "Kd before newmtl")),
                }
            }
            _ => {}
        }
    }
    Ok(table)
}

// 1-based index, negative counts back from the end.
fn resolve_index(
    path: &str,
    line: usize,
    tok: &str,
    len: usize,
) -> Result<usize, AssetError> {
    let idx: i64 = tok
        .parse()
        .map_err(|e| parse_err(path, line, format!("bad index '{tok}': {e}")))?;
    let resolved = if idx > 0 {
        idx - 1
    } else if idx < 0 {
        len as i64 + idx
    } else {
        return Err(parse_err(path, line, "index 0 is not valid"));
    };
    if resolved < 0 || resolved as usize >= len {
        return Err(parse_err(path, line, format!("index {idx} out of range")));
    }
    Ok(resolved as usize)
}

#[derive(Clone, Copy)]
struct Corner {
    position: usize,
    normal: Option<usize>,
}

fn parse_corner(
    path: &str,
    line: usize,
    tok: &str,
    n_pos: usize,
    n_norm: usize,
) -> Result<Corner, AssetError> {
    let mut fields = tok.split('/');
    let position = resolve_index(path, line, fields.next().unwrap_or(""), n_pos)?;
    let _texcoord = fields.next();
    let normal = match fields.next() {
        Some(s) if !s.is_empty() => Some(resolve_index(path, line, s, n_norm)?),
        _ => None,
    };
    Ok(Corner { position, normal })
}

fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).try_normalize().unwrap_or(Vec3::Y)
}

pub fn parse_obj(path: &str, src: &str, materials: &MaterialTable) -> Result<ModelMesh, AssetError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut vertices: Vec<MeshVertex> = Vec::new();
    let mut color = DEFAULT_DIFFUSE;

    for (i, raw) in src.lines().enumerate() {
        let line_no = i + 1;
        let mut parts = raw.split_whitespace();
        match parts.next() {
            Some("v") => positions.push(parse_vec3(path, line_no, parts)?),
            Some("vn") => normals.push(parse_vec3(path, line_no, parts)?),
            Some("usemtl") => {
                let name = parts.collect::<Vec<_>>().join(" ");
                color = materials.get(&name).copied().unwrap_or_else(|| {
                    log::warn!("[model] {path}:{line_no}: unknown material '{name}'");
                    DEFAULT_DIFFUSE
                });
            }
            Some("f") => {
                let corners = parts
                    .map(|t| parse_corner(path, line_no, t, positions.len(), normals.len()))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(parse_err(path, line_no, "face needs at least three vertices"));
                }
                // fan triangulation
                for k in 1..corners.len() - 1 {
                    let tri = [corners[0], corners[k], corners[k + 1]];
                    let p = tri.map(|c| positions[c.position]);
                    let flat = face_normal(p[0], p[1], p[2]);
                    for (c, pos) in tri.iter().zip(p) {
                        let n = c
                            .normal
                            .and_then(|ni| normals[ni].try_normalize())
                            .unwrap_or(flat);
                        vertices.push(MeshVertex {
                            position: pos.to_array(),
                            normal: n.to_array(),
                            color: color.to_array(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    let bounds = Aabb::from_points(vertices.iter().map(|v| Vec3::from_array(v.position)))
        .ok_or_else(|| AssetError::Empty {
            path: path.to_string(),
        })?;
    Ok(ModelMesh { vertices, bounds })
}
