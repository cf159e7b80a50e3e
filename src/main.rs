//
// Sample a surface z = f(x, y) on a grid and write out its vertices
// and normals, one "x y z" line each, for whatever wants to draw them.
//
// Usage: surface-normals [FUNCTION] [GRID_SIZE]
//

use std::io::{BufWriter, Write};

use anyhow::*;

use vrmath::surface::{Function, Surface, DEFAULT_GRID_SIZE};
use vrmath::vec3;

const DEFAULT_FUNCTION: Function = Function::SinXQuad;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let func = match args.next() {
        Some(name) => name.parse::<Function>()?,
        None => DEFAULT_FUNCTION,
    };
    let grid_size = match args.next() {
        Some(size) => size
            .parse::<usize>()
            .with_context(|| format!("Bad grid size '{}'", size))?,
        None => DEFAULT_GRID_SIZE,
    };
    if let Some(extra) = args.next() {
        bail!("Unexpected argument '{}'", extra);
    }

    let surface = Surface {
        grid_size,
        ..Surface::new(func)
    };
    log::info!(
        "Sampling {} on a {}x{} grid",
        func.label(),
        grid_size,
        grid_size
    );

    let mesh = surface.build_mesh()?;
    let bad = surface.check_normals(&mesh.vertices, &mesh.normals)?;
    if bad > 0 {
        log::warn!("{} normals failed the check", bad);
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for p in vec3::unflatten(&mesh.vertices)? {
        writeln!(out, "{}", p)?;
    }
    writeln!(out, "normals")?;
    for n in vec3::unflatten(&mesh.normals)? {
        writeln!(out, "{}", n)?;
    }
    out.flush()?;

    log::info!(
        "Wrote {} vertices, {} line indices",
        mesh.vertices.len() / 3,
        mesh.indices.len()
    );
    Ok(())
}
