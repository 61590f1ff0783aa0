mod support;

use planar_mesher::{Curve, MesherConfig};
use support::mesh_of;

#[cfg(feature = "stl-io")]
#[test]
fn stl_binary_round_trips_face_count() {
    let mesh = mesh_of(&[Curve::square(1.0)], &MesherConfig::new(0.2));
    let bytes = mesh.to_stl_binary().unwrap();
    assert_eq!(bytes.len(), 84 + 50 * mesh.faces.len());

    let read = stl_io::read_stl(&mut std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(read.faces.len(), mesh.faces.len());
    assert_eq!(read.vertices.len(), mesh.vertices.len());
}

#[cfg(feature = "stl-io")]
#[test]
fn stl_ascii_of_skipped_outcome_is_empty_solid() {
    use planar_mesher::{generate_mesh, io::stl::to_stl_ascii};

    let outcome = generate_mesh(&[Curve::square(1.0)], &MesherConfig::new(100.0)).unwrap();
    assert!(outcome.is_skipped());
    assert_eq!(to_stl_ascii(&outcome, "nothing"), "solid nothing\nendsolid nothing\n");
}

#[cfg(feature = "svg-io")]
#[test]
fn svg_observer_writes_drawing_when_visualizing() {
    use planar_mesher::{Mesher, io::svg::SvgObserver};

    let path = std::env::temp_dir().join(format!("planar_mesher_{}.svg", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let curves = [Curve::circle([0.0, 0.0], 1.0, 32)];
    Mesher::new(MesherConfig::new(0.25))
        .with_observer(SvgObserver::new(&path))
        .run(&curves)
        .unwrap();
    assert!(!path.exists(), "observer ran without visualize");

    let outcome = Mesher::new(MesherConfig::new(0.25).with_visualize(true))
        .with_observer(SvgObserver::new(&path))
        .run(&curves)
        .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let faces = outcome.mesh().map_or(0, |m| m.faces.len());
    assert_eq!(text.matches("<polygon").count(), faces + 1);

    let _ = std::fs::remove_file(&path);
}
