// main.rs
//
// Meshes a few planar regions and writes the results to out/ as STL and SVG.

use planar_mesher::config::MesherConfig;
use planar_mesher::curve::Curve;
use planar_mesher::float_types::Real;
use planar_mesher::pipeline::{MeshOutcome, Mesher};
use std::fs;
#[cfg(feature = "stl-io")]
use std::path::Path;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Ensure the out folder exists
    fs::create_dir_all("out")?;

    let regions: [(&str, Vec<Curve>, Real); 4] = [
        ("square", vec![Curve::square(1.0)], 0.1),
        (
            "annulus",
            vec![
                Curve::circle([0.0, 0.0], 2.0, 96),
                Curve::circle([0.0, 0.0], 0.8, 48),
            ],
            0.2,
        ),
        ("ellipse", vec![Curve::ellipse([0.0, 0.0], 3.0, 1.2, 128)], 0.25),
        // spacing larger than the shape: reported as skipped
        ("tiny", vec![Curve::regular_ngon(6, 0.1)], 5.0),
    ];

    for (name, curves, spacing) in regions {
        let config = MesherConfig::new(spacing).with_visualize(true);

        #[cfg(feature = "svg-io")]
        let mesher = Mesher::new(config).with_observer(
            planar_mesher::io::svg::SvgObserver::new(format!("out/{name}.svg")),
        );
        #[cfg(not(feature = "svg-io"))]
        let mesher = Mesher::new(config);

        match mesher.run(&curves)? {
            MeshOutcome::Meshed(mesh) => {
                let topology = mesh.analyze_topology();
                println!(
                    "{name}: {} faces, {} vertices, euler characteristic {}",
                    mesh.faces.len(),
                    mesh.vertices.len(),
                    topology.euler_characteristic
                );
                #[cfg(feature = "stl-io")]
                write_stl(Path::new("out"), name, &mesh)?;
            },
            MeshOutcome::Skipped(reason) => println!("{name}: {reason}"),
        }
    }

    Ok(())
}

#[cfg(feature = "stl-io")]
fn write_stl(dir: &Path, name: &str, mesh: &planar_mesher::mesh::TriMesh2) -> std::io::Result<()> {
    fs::write(dir.join(format!("{name}.stl")), mesh.to_stl_ascii(name))
}
