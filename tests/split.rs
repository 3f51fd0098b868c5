use std::path::PathBuf;

use fourfold::{Error, Face, Mesh, Quadrant, Splitter};
use nalgebra::point;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// A cube of 8 corner vertices and 6 quad faces, centered on the origin.
/// Every face spans at least two quadrants, so no face survives any split.
const CUBE: &str = "\
v -1 -1 -1
v 1 -1 -1
v 1 1 -1
v -1 1 -1
v -1 -1 1
v 1 -1 1
v 1 1 1
v -1 1 1
f 1 2 3 4
f 5 6 7 8
f 1 2 6 5
f 4 3 7 8
f 1 4 8 5
f 2 3 7 6
";

fn test_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fourfold-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn cube_quadrants_keep_vertices_but_no_faces() {
    let splitter = Splitter::new(Mesh::<f32>::parse_obj(CUBE).unwrap()).unwrap();
    assert_eq!(*splitter.center(), point![0.0, 0.0, 0.0]);
    for sub in splitter.split() {
        assert_eq!(sub.vertex_count(), 2);
        assert_eq!(sub.face_count(), 0);
    }
}

#[test]
fn triangle_contained_in_one_quadrant_survives_reindexed() {
    let mesh = Mesh::new(
        vec![
            point![1.0f32, 1.0, 0.0],
            point![2.0, 1.0, 0.0],
            point![1.0, 2.0, 0.0],
        ],
        vec![Face::new(vec![0, 1, 2])],
    );
    let splitter = Splitter::with_center(mesh, point![0.0, 0.0, 0.0]).unwrap();

    for (sub, q) in splitter.split().into_iter().zip(Quadrant::all()) {
        if q.label() == 2 {
            assert_eq!(sub.vertex_count(), 3);
            assert_eq!(sub.faces, vec![Face::new(vec![0, 1, 2])]);
            let mut buf = Vec::new();
            sub.write_obj(&mut buf).unwrap();
            assert!(String::from_utf8(buf).unwrap().ends_with("f 1 2 3\n"));
        } else {
            assert!(sub.is_empty());
        }
    }
}

#[test]
fn empty_mesh_refuses_to_split() {
    let mesh = Mesh::<f32>::parse_obj("").unwrap();
    assert!(mesh.is_empty());
    assert!(matches!(Splitter::new(mesh), Err(Error::EmptyMesh)));
}

#[test]
fn programmatic_mesh_with_bad_face_is_rejected() {
    let mesh = Mesh::new(vec![point![0.0f32, 0.0, 0.0]], vec![Face::new(vec![0, 1])]);
    assert!(matches!(
        Splitter::new(mesh),
        Err(Error::FaceOutOfRange {
            face: 0,
            index: 1,
            vertex_count: 1
        })
    ));
}

#[test]
fn split_is_idempotent() {
    let splitter = Splitter::new(Mesh::<f32>::parse_obj(CUBE).unwrap()).unwrap();
    let (first, second) = (splitter.split(), splitter.split());
    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        let (mut wa, mut wb) = (Vec::new(), Vec::new());
        a.write_obj(&mut wa).unwrap();
        b.write_obj(&mut wb).unwrap();
        assert_eq!(wa, wb);
    }
}

#[test]
fn export_writes_four_files_that_reload() {
    let dir = test_dir("export");
    let splitter = Splitter::new(Mesh::<f32>::parse_obj(CUBE).unwrap()).unwrap();

    for outcome in splitter.export(&dir, "cube", "obj") {
        let part = outcome.unwrap();
        assert_eq!(
            part.path.file_name().unwrap().to_str().unwrap(),
            format!("cube{}.obj", part.quadrant.label())
        );
        // the loader re-validates every index, so a clean reload also
        // certifies index validity of the written file
        let reloaded = Mesh::<f32>::from_obj_file(&part.path).unwrap();
        assert_eq!(reloaded.vertex_count(), part.vertex_count);
        assert_eq!(reloaded.face_count(), part.face_count);
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn export_into_missing_directory_reports_all_four() {
    let dir = test_dir("missing").join("nope");
    let splitter = Splitter::new(Mesh::<f32>::parse_obj(CUBE).unwrap()).unwrap();
    for outcome in splitter.export(&dir, "cube", "obj") {
        assert!(matches!(outcome, Err(Error::Io { .. })));
    }
}

#[quickcheck]
fn every_vertex_lands_in_exactly_one_quadrant(points: Vec<(f32, f32, f32)>) -> TestResult {
    if points.is_empty()
        || points
            .iter()
            .any(|(x, y, z)| !x.is_finite() || !y.is_finite() || !z.is_finite())
    {
        return TestResult::discard();
    }
    let mesh = Mesh::new(
        points.iter().map(|&(x, y, z)| point![x, y, z]).collect(),
        Vec::new(),
    );
    let splitter = Splitter::new(mesh).unwrap();
    let total: usize = splitter.split().iter().map(Mesh::vertex_count).sum();
    TestResult::from_bool(total == points.len())
}

#[quickcheck]
fn surviving_faces_stay_within_local_bounds(points: Vec<(f32, f32, f32)>) -> TestResult {
    if points.len() < 3
        || points
            .iter()
            .any(|(x, y, z)| !x.is_finite() || !y.is_finite() || !z.is_finite())
    {
        return TestResult::discard();
    }
    // fan-triangulate over the point list so some faces cross quadrant seams
    let faces = (1..points.len() as u32 - 1)
        .map(|i| Face::new(vec![0, i, i + 1]))
        .collect();
    let mesh = Mesh::new(
        points.iter().map(|&(x, y, z)| point![x, y, z]).collect(),
        faces,
    );
    let splitter = Splitter::new(mesh).unwrap();
    TestResult::from_bool(splitter.split().iter().all(|sub| {
        sub.faces
            .iter()
            .flat_map(Face::indices)
            .all(|&i| (i as usize) < sub.vertex_count())
    }))
}
