mod support;

use nalgebra::Point2;
use planar_mesher::{
    Curve, MeshOutcome, Mesher, MesherConfig, MeshingError,
    float_types::{PI, Real},
    generate_mesh,
    seeds::SeedStrategy,
};
use support::*;

#[test]
fn unit_square_keeps_evenly_spaced_boundary() {
    let mesh = mesh_of(&[Curve::square(1.0)], &MesherConfig::new(0.2));

    // boundary points come first and survive compaction in order
    assert!(mesh.vertices[..20].iter().all(on_unit_square_boundary));
    let on_boundary = mesh.vertices.iter().filter(|p| on_unit_square_boundary(p)).count();
    assert_eq!(on_boundary, 20);

    let interior = mesh.vertices.len() - on_boundary;
    assert!((4..=40).contains(&interior), "unexpected interior count {interior}");

    assert_eq!(mesh.boundary_vertices().len(), 20);
    assert!(approx_eq(signed_area_sum(&mesh), 1.0, 1e-9));
}

#[test]
fn every_face_is_inside_and_every_vertex_used() {
    let mesh = mesh_of(&[Curve::square(1.0)], &MesherConfig::new(0.1));
    assert!(mesh.validate().is_empty(), "{:?}", mesh.validate());

    let mut used = vec![false; mesh.vertices.len()];
    for (f, face) in mesh.faces.iter().enumerate() {
        for &i in face {
            assert!(i < mesh.vertices.len());
            used[i] = true;
        }
        let c = mesh.centroid(f);
        assert!(c.x > 0.0 && c.x < 1.0 && c.y > 0.0 && c.y < 1.0);
    }
    assert!(used.into_iter().all(|u| u));
}

#[test]
fn disk_and_annulus_topology() {
    let disk = mesh_of(
        &[Curve::circle([0.0, 0.0], 1.0, 64)],
        &MesherConfig::new(0.15),
    );
    let topology = disk.analyze_topology();
    assert_eq!(topology.euler_characteristic, 1);
    assert_eq!(topology.non_manifold_edges, 0);
    assert_eq!(topology.isolated_vertices, 0);

    let ring = mesh_of(&annulus(2.0, 0.8), &MesherConfig::new(0.2));
    assert_eq!(ring.analyze_topology().euler_characteristic, 0);
}

#[test]
fn hole_is_left_empty() {
    let curves = annulus(2.0, 0.8);
    let mesh = mesh_of(&curves, &MesherConfig::new(0.2));

    for f in 0..mesh.faces.len() {
        let r = mesh.centroid(f).coords.norm();
        assert!(r > 0.78 && r < 2.0, "face {f} centroid at radius {r}");
    }
    let expected = PI * (4.0 - 0.64);
    assert!(approx_eq(signed_area_sum(&mesh), expected, 0.05 * expected));
}

#[test]
fn identical_inputs_give_identical_meshes() {
    let curves = annulus(1.5, 0.5);
    let config = MesherConfig::new(0.15);
    let first = generate_mesh(&curves, &config).unwrap();
    let second = generate_mesh(&curves, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn smoothing_leaves_boundary_in_place() {
    let curves = [Curve::ellipse([0.0, 0.0], 2.0, 1.0, 64)];
    let rough = mesh_of(&curves, &MesherConfig::new(0.2).with_smoothing(None));
    let smooth = mesh_of(&curves, &MesherConfig::new(0.2));

    assert_eq!(rough.faces, smooth.faces);
    let mut moved = 0;
    for (i, on_boundary) in rough.boundary_mask().into_iter().enumerate() {
        if on_boundary {
            assert_eq!(rough.vertices[i], smooth.vertices[i]);
        } else if rough.vertices[i] != smooth.vertices[i] {
            moved += 1;
        }
    }
    assert!(moved > 0);
}

#[test]
fn huge_spacing_is_skipped() {
    let outcome = generate_mesh(&[Curve::square(1.0)], &MesherConfig::new(100.0)).unwrap();
    let MeshOutcome::Skipped(reason) = &outcome else {
        panic!("expected a skipped outcome, got {outcome:?}");
    };
    assert_eq!(reason.spacing, 100.0);
    assert_eq!(reason.coarse_curve, Some(0));
    assert!(reason.to_string().contains("too large"));
    assert_eq!(outcome.into_parts(), (Vec::new(), Vec::new()));
}

#[test]
fn thin_strip_meshes_from_its_boundary() {
    // every lattice seed lies within the proximity threshold of the strip
    let outcome = generate_mesh(&[Curve::rectangle(10.0, 0.2)], &MesherConfig::new(1.0)).unwrap();
    let MeshOutcome::Meshed(mesh) = &outcome else {
        panic!("thin strip was skipped: {outcome:?}");
    };
    assert!(!mesh.faces.is_empty());
    assert!(mesh.validate().is_empty(), "{:?}", mesh.validate());
    let area = signed_area_sum(mesh);
    assert!(area > 1.5 && area < 2.0 + 1e-9, "strip area {area}");
}

#[test]
fn hole_shorter_than_three_spacings_is_skipped() {
    let hole = Curve::square(0.2).translated(1.0, 1.0).reversed();
    let outcome = generate_mesh(&[Curve::square(4.0), hole], &MesherConfig::new(0.5)).unwrap();
    assert_eq!(outcome.skipped().and_then(|r| r.coarse_curve), Some(1));
}

#[test]
fn raw_boundary_is_used_verbatim() {
    let mesh = mesh_of(
        &[Curve::square(1.0)],
        &MesherConfig::new(0.2).with_resample_boundary(false),
    );
    assert_eq!(
        &mesh.vertices[..4],
        &[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    );
    assert_eq!(mesh.boundary_edges().len(), 4);
    assert!(approx_eq(signed_area_sum(&mesh), 1.0, 1e-9));
}

#[test]
fn equilateral_seeding_meshes_too() {
    let config = MesherConfig::new(0.2).with_seed_strategy(SeedStrategy::Equilateral);
    let mesh = mesh_of(&[Curve::square(2.0)], &config);
    assert!(approx_eq(signed_area_sum(&mesh), 4.0, 1e-9));
    assert!(mesh.compute_mesh_quality().avg_quality > 0.5);
}

#[test]
fn finer_spacing_gives_more_vertices() {
    let curves = [Curve::circle([0.0, 0.0], 1.0, 64)];
    let coarse = mesh_of(&curves, &MesherConfig::new(0.25));
    let fine = mesh_of(&curves, &MesherConfig::new(0.1));
    assert!(fine.vertices.len() > 2 * coarse.vertices.len());
}

#[test]
fn invalid_inputs_are_reported() {
    let config = MesherConfig::new(0.2);

    let err = generate_mesh(&[], &config).unwrap_err();
    assert!(matches!(err, MeshingError::InvalidGeometry { curve: None, .. }));

    let segment = Curve::from_xy(&[[0.0, 0.0], [1.0, 0.0]]);
    let err = generate_mesh(&[Curve::square(1.0), segment], &config).unwrap_err();
    assert!(matches!(err, MeshingError::InvalidGeometry { curve: Some(1), .. }));

    let err = generate_mesh(&[Curve::square(1.0)], &MesherConfig::new(Real::NAN)).unwrap_err();
    assert!(matches!(err, MeshingError::InvalidGeometry { .. }));
}

#[test]
fn repeated_raw_point_is_rejected_up_front() {
    let stutter = Curve::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    let config = MesherConfig::new(0.2).with_resample_boundary(false);
    let err = generate_mesh(&[stutter.clone()], &config).unwrap_err();
    assert!(matches!(err, MeshingError::InvalidGeometry { curve: Some(0), .. }), "{err}");

    let err = generate_mesh(&[Curve::square(3.0), stutter.translated(1.0, 1.0)], &config).unwrap_err();
    assert!(matches!(err, MeshingError::InvalidGeometry { curve: Some(1), .. }), "{err}");
}

#[test]
fn spacing_too_fine_for_the_lattice_is_rejected() {
    // 4e5 boundary points pass, but the seed lattice would hold ~1e10
    let err = generate_mesh(&[Curve::square(1.0)], &MesherConfig::new(1e-5)).unwrap_err();
    assert!(matches!(err, MeshingError::InvalidGeometry { curve: None, .. }), "{err}");

    let err = generate_mesh(&[Curve::square(1.0)], &MesherConfig::new(1e-9)).unwrap_err();
    assert!(matches!(err, MeshingError::InvalidGeometry { curve: Some(0), .. }), "{err}");
}

#[test]
fn crossing_curves_fail_triangulation() {
    let outer = Curve::square(1.0);
    let hole = Curve::square(1.0).translated(0.5, 0.5);
    let err = generate_mesh(&[outer, hole], &MesherConfig::new(0.2)).unwrap_err();
    assert!(matches!(err, MeshingError::Triangulation(_)), "{err}");
}

#[test]
fn mesher_accepts_custom_smoother() {
    use planar_mesher::smoothing::SerialSmoothingOps;

    let curves = [Curve::square(1.0)];
    let default = generate_mesh(&curves, &MesherConfig::new(0.1)).unwrap();
    let serial = Mesher::new(MesherConfig::new(0.1))
        .with_smoother(SerialSmoothingOps::new())
        .run(&curves)
        .unwrap();

    let (faces_a, vertices_a) = default.into_parts();
    let (faces_b, vertices_b) = serial.into_parts();
    assert_eq!(faces_a, faces_b);
    for (a, b) in vertices_a.iter().zip(&vertices_b) {
        assert!((a - b).norm() < 1e-9);
    }
}
