//
// Sample an explicit 2D surface embedded in 3D, of the form
// z = f(x, y), into the flat vertex, normal and index buffers a
// renderer wants.
//
// Explicit surfaces are simple, but can't double back on themselves.
//

use std::str::FromStr;

use anyhow::*;

use crate::math::ValueType;
use crate::vec2::Vec2;
use crate::vec3::{self, Vec3};

pub const DEFAULT_GRID_SIZE: usize = 30;
pub const DEFAULT_Z_SCALE: ValueType = 0.25;

// Step used for finite differences. Single precision won't tolerate
// much smaller.
const EPS: ValueType = 1.0e-3;

// How far a normal's length may stray from 1, and how far its dot
// product with a unit tangent may stray from 0, before we complain.
const UNIT_TOLERANCE: ValueType = 1.0e-4;
const PERP_TOLERANCE: ValueType = 1.0e-3;

/// Largest grid size whose (n + 1)^2 vertices can all be addressed by
/// 16-bit indices.
pub const MAX_GRID_SIZE: usize = 255;

const _: () = assert!((MAX_GRID_SIZE + 1) * (MAX_GRID_SIZE + 1) == u16::MAX as usize + 1);

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Function {
    Plane,
    PosCurve,
    NegCurve,
    SinXLin,
    SinXQuad,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::Plane,
        Function::PosCurve,
        Function::NegCurve,
        Function::SinXLin,
        Function::SinXQuad,
    ];

    // Command-line name and human-readable label.
    fn names(&self) -> (&'static str, &'static str) {
        match self {
            Function::Plane => ("plane", "Plane"),
            Function::PosCurve => ("pos-curve", "Positive curvature"),
            Function::NegCurve => ("neg-curve", "Negative curvature"),
            Function::SinXLin => ("sin-x-lin", "Sin x Linear"),
            Function::SinXQuad => ("sin-x-quad", "Sin x Quad"),
        }
    }

    pub fn label(&self) -> &'static str {
        self.names().1
    }

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        self.names().0
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(s: &str) -> Result<Function> {
        Function::ALL
            .iter()
            .find(|f| f.name() == s)
            .copied()
            .ok_or_else(|| {
                let names = Function::ALL.iter().map(|f| f.name()).collect::<Vec<_>>();
                anyhow!("Unknown function '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// Buffers ready to hand to a renderer. `vertices` and `normals` are
/// flattened xyz triples; `indices` describe a line list over the grid.
#[derive(Debug)]
pub struct Mesh {
    pub vertices: Vec<ValueType>,
    pub normals: Vec<ValueType>,
    pub indices: Vec<u16>,
}

pub struct Surface {
    pub func: Function,
    pub grid_size: usize,
    pub z_scale: ValueType,
}

impl Surface {
    pub fn new(func: Function) -> Surface {
        Surface {
            func,
            grid_size: DEFAULT_GRID_SIZE,
            z_scale: DEFAULT_Z_SCALE,
        }
    }

    pub fn z(&self, x: ValueType, y: ValueType) -> ValueType {
        (match self.func {
            Function::Plane => (x + y) * 0.5,
            Function::PosCurve => -(x * x + y * y) * 0.5,
            Function::NegCurve => (x * x - y * y) * 0.5,
            Function::SinXLin => (y * 4.0 * std::f32::consts::PI).sin() * x,
            Function::SinXQuad => (y * 4.0 * std::f32::consts::PI).sin() * x * x,
        }) * self.z_scale
    }

    // Lift a point on the xy-plane onto the surface.
    fn lift(&self, p: Vec2) -> Vec3 {
        Vec3::from_vec2(p, self.z(p.x, p.y))
    }

    // The grid size as a 16-bit index bound, if it's usable at all.
    fn index_bound(&self) -> Result<u16> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            bail!(
                "Grid size {} out of range, need 1..={} for 16-bit indices",
                self.grid_size,
                MAX_GRID_SIZE
            );
        }
        Ok(u16::try_from(self.grid_size)?)
    }

    pub fn create_grid(&self) -> Result<Vec<Vec3>> {
        self.index_bound()?;
        let mut v = Vec::with_capacity((self.grid_size + 1) * (self.grid_size + 1));
        for x in 0..=self.grid_size {
            let x_coord = (x as ValueType / self.grid_size as ValueType) * 2.0 - 1.0;
            for y in 0..=self.grid_size {
                let y_coord = (y as ValueType / self.grid_size as ValueType) * 2.0 - 1.0;
                v.push(self.lift(Vec2::new(x_coord, y_coord)));
            }
        }
        Ok(v)
    }

    pub fn create_grid_indices(&self) -> Result<Vec<u16>> {
        let n = self.index_bound()?;
        let mut v = Vec::new();
        for x in 0..=n {
            let x_idx = x * (n + 1);
            for y in 0..n {
                v.push(x_idx + y);
                v.push(x_idx + y + 1);
            }
        }
        for x in 0..n {
            let x_idx = x * (n + 1);
            for y in 0..=n {
                v.push(x_idx + y);
                v.push(x_idx + y + n + 1);
            }
        }
        Ok(v)
    }

    pub fn normal_at(&self, p: &Vec3) -> Vec3 {
        // Moving along x gives the tangent (1, 0, dz/dx), along y gives
        // (0, 1, dz/dy). Their cross product is the (unnormalised)
        // normal (-dz/dx, -dz/dy, 1).
        let (x, y) = (p.x(), p.y());
        let dzdx = (self.z(x + EPS, y) - self.z(x - EPS, y)) / (2.0 * EPS);
        let dzdy = (self.z(x, y + EPS) - self.z(x, y - EPS)) / (2.0 * EPS);

        let tx = vec3::X_AXIS + vec3::Z_AXIS * dzdx;
        let ty = vec3::Y_AXIS + vec3::Z_AXIS * dzdy;
        (tx ^ ty).normalized()
    }

    pub fn build_mesh(&self) -> Result<Mesh> {
        let grid = self.create_grid()?;
        let normals = grid.iter().map(|p| self.normal_at(p)).collect::<Vec<_>>();
        log::debug!(
            "{}: {} vertices, grid size {}, z scale {}",
            self.func.label(),
            grid.len(),
            self.grid_size,
            self.z_scale
        );

        Ok(Mesh {
            vertices: vec3::flatten(&grid),
            normals: vec3::flatten(&normals),
            indices: self.create_grid_indices()?,
        })
    }

    // Check the normals are usable: valid, unit length, and
    // perpendicular to the surface tangents. Returns the number of
    // bad ones.
    pub fn check_normals(&self, vertices: &[ValueType], normals: &[ValueType]) -> Result<usize> {
        // Convert flattened arrays back into points.
        let vertices = vec3::unflatten(vertices).context("Bad vertex buffer")?;
        let normals = vec3::unflatten(normals).context("Bad normal buffer")?;
        if vertices.len() != normals.len() {
            bail!(
                "{} vertices but {} normals",
                vertices.len(),
                normals.len()
            );
        }

        log::info!("Normal check:");
        let mut bad = 0;
        for (p, n) in vertices.iter().zip(normals.iter()) {
            if !n.valid() {
                log::warn!("    invalid normal {} at {}", n, p);
                bad += 1;
                continue;
            }
            let len_err = (n.length() - 1.0).abs();
            // Central differences, the same as `normal_at` takes.
            let tx = self.lift(Vec2::new(p.x() + EPS, p.y()))
                - self.lift(Vec2::new(p.x() - EPS, p.y()));
            let ty = self.lift(Vec2::new(p.x(), p.y() + EPS))
                - self.lift(Vec2::new(p.x(), p.y() - EPS));
            let x_err = (*n * tx.normalized()).abs();
            let y_err = (*n * ty.normalized()).abs();
            log::trace!(
                "    len_err {:.7} x_err {:.7} y_err {:.7}",
                len_err,
                x_err,
                y_err
            );
            if len_err > UNIT_TOLERANCE {
                log::warn!("    normal {} at {} has length {}", n, p, n.length());
                bad += 1;
            } else if x_err > PERP_TOLERANCE || y_err > PERP_TOLERANCE {
                log::warn!("    normal {} at {} isn't perpendicular to the surface", n, p);
                bad += 1;
            }
        }
        log::info!("    {} of {} normals bad", bad, normals.len());
        Ok(bad)
    }
}
