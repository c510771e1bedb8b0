//! Integration tests for the treesvm library
//!
//! These tests verify end-to-end functionality across multiple modules:
//! loading a file, partitioning it by class and measuring the classes.

use approx::assert_relative_eq;
use ndarray::{array, Array1, Array2, ArrayView2, Axis};
use std::io::Write;
use tempfile::NamedTempFile;
use treesvm::api::{quick, GeometryEstimator};
use treesvm::kernel::{from_fn, ChiSquareKernel, LinearKernel, PolynomialKernel, RBFKernel};
use treesvm::{
    load, partition, squared_distance, squared_radius, CsvFormat, GeometryError, GeometryReport,
    LabeledPoints,
};

fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(".csv").expect("Failed to create temp file");
    for row in rows {
        writeln!(temp_file, "{row}").expect("Failed to write");
    }
    temp_file.flush().expect("Failed to flush");
    temp_file
}

fn three_blobs() -> NamedTempFile {
    write_csv(&[
        "0.0,0.0,0.5,red",
        "1.0,0.5,0.0,red",
        "0.5,1.0,1.0,red",
        "5.0,5.0,4.5,green",
        "6.0,5.5,5.0,green",
        "9.0,0.0,1.0,blue",
        "8.5,0.5,0.0,blue",
        "9.5,1.0,0.5,blue",
        "5.5,4.5,5.5,green",
        "9.0,1.5,1.5,blue",
    ])
}

/// Mean and maximum squared distance to the mean, computed in input space
fn coordinate_geometry(points: ArrayView2<f64>) -> (Array1<f64>, f64) {
    let centroid = points.mean_axis(Axis(0)).expect("non-empty set");
    let radius = points
        .outer_iter()
        .map(|row| (&row - &centroid).mapv(|v| v * v).sum())
        .fold(0.0, f64::max);
    (centroid, radius)
}

/// Test complete workflow: file -> partition -> geometry
#[test]
fn test_complete_workflow_csv() {
    let temp_file = three_blobs();

    let geometry = GeometryEstimator::new()
        .class_geometry_from_csv(temp_file.path())
        .expect("Geometry should succeed");

    assert_eq!(geometry.labels(), &["red", "green", "blue"]);
    assert_eq!(geometry.sizes(), &[3, 3, 4]);
    assert_eq!(geometry.dim(), 3);

    for &radius in geometry.squared_radii() {
        assert!(radius >= 0.0);
    }
    assert!(geometry.distance("red", "blue").unwrap() > geometry.radius("red").unwrap());
}

/// Under a linear kernel both estimators agree with plain coordinate geometry
#[test]
fn test_linear_kernel_matches_coordinate_geometry() {
    let temp_file = three_blobs();
    let classes = quick::load_classes(temp_file.path()).expect("Load should succeed");
    let kernel = LinearKernel::new();

    let mut centroids = Vec::new();
    for set in &classes {
        let (centroid, radius) = coordinate_geometry(set.points());
        assert_relative_eq!(
            squared_radius(set.points(), &kernel).unwrap(),
            radius,
            epsilon = 1e-9
        );
        centroids.push(centroid);
    }

    let sets: Vec<_> = classes.iter().collect();
    for i in 0..sets.len() {
        for j in 0..sets.len() {
            let expected = (&centroids[i] - &centroids[j]).mapv(|v| v * v).sum();
            assert_relative_eq!(
                squared_distance(sets[i].points(), sets[j].points(), &kernel).unwrap(),
                expected,
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn test_load_and_partition_scenario() {
    let temp_file = write_csv(&["1,2,A", "3,4,B", "5,6,A"]);

    let points = load(temp_file.path()).expect("Load should succeed");
    assert_eq!(points.features(), array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    assert_eq!(points.labels(), &["A", "B", "A"]);

    let classes = partition(&points).expect("Partition should succeed");
    assert_eq!(classes.len(), 2);
    assert_eq!(classes.class("A").unwrap().points(), array![[1.0, 2.0], [5.0, 6.0]]);
    assert_eq!(classes.class("B").unwrap().points(), array![[3.0, 4.0]]);
}

/// The union of the class buckets reproduces the source rows
#[test]
fn test_partition_round_trip() {
    let temp_file = three_blobs();
    let points = load(temp_file.path()).unwrap();
    let classes = partition(&points).unwrap();

    assert_eq!(classes.total_samples(), 10);

    let mut source: Vec<(String, Vec<f64>)> = points
        .labels()
        .iter()
        .cloned()
        .zip(points.features().outer_iter().map(|row| row.to_vec()))
        .collect();
    let mut rebuilt: Vec<(String, Vec<f64>)> = classes
        .iter()
        .flat_map(|set| {
            set.points()
                .outer_iter()
                .map(|row| (set.label().to_string(), row.to_vec()))
                .collect::<Vec<_>>()
        })
        .collect();

    let by_key = |a: &(String, Vec<f64>), b: &(String, Vec<f64>)| {
        a.0.cmp(&b.0).then_with(|| {
            a.1.iter()
                .zip(&b.1)
                .map(|(x, y)| x.total_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    };
    source.sort_by(by_key);
    rebuilt.sort_by(by_key);
    assert_eq!(source, rebuilt);
}

#[test]
fn test_custom_format() {
    let temp_file = write_csv(&["# comment", "1.5;'x;y'", "", "2.5;'x;y'", "3.5;'it''s'"]);

    let points = CsvFormat::new()
        .with_delimiter(';')
        .with_quote(Some('\''))
        .read_file(temp_file.path())
        .expect("Load should succeed");

    assert_eq!(points.labels(), &["x;y", "x;y", "it's"]);
    assert_eq!(partition(&points).unwrap().len(), 2);
}

#[test]
fn test_rbf_radius_bounded() {
    // Under RBF every sample has unit norm, so R^2 <= 2
    let temp_file = three_blobs();
    let classes = quick::load_classes(temp_file.path()).unwrap();
    let kernel = RBFKernel::with_auto_gamma(classes.dim());

    for set in &classes {
        let radius = set.squared_radius(&kernel).unwrap();
        assert!((0.0..=2.0).contains(&radius), "radius {radius} out of range");
    }
}

#[test]
fn test_self_distance_is_zero() {
    let temp_file = three_blobs();
    let classes = quick::load_classes(temp_file.path()).unwrap();
    let kernels: Vec<Box<dyn treesvm::Kernel>> = vec![
        Box::new(LinearKernel::new()),
        Box::new(RBFKernel::new(0.5)),
        Box::new(PolynomialKernel::quadratic(0.1)),
        Box::new(ChiSquareKernel::unit_gamma()),
    ];

    for kernel in &kernels {
        for set in &classes {
            let distance = set.squared_distance(set, kernel).unwrap();
            assert_relative_eq!(distance, 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_distance_symmetry() {
    let temp_file = three_blobs();
    let classes = quick::load_classes(temp_file.path()).unwrap();
    let kernel = RBFKernel::new(0.2);
    let sets: Vec<_> = classes.iter().collect();

    for a in &sets {
        for b in &sets {
            let ab = a.squared_distance(b, &kernel).unwrap();
            let ba = b.squared_distance(a, &kernel).unwrap();
            assert_eq!(ab.to_bits(), ba.to_bits());
        }
    }
}

#[test]
fn test_closure_kernel() {
    let points = array![[0.0, 0.0], [2.0, 0.0], [0.0, 2.0], [2.0, 2.0]];
    let scaled_linear = from_fn(|x, y| 4.0 * x.dot(&y));

    assert_relative_eq!(
        squared_radius(points.view(), &scaled_linear).unwrap(),
        8.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_non_psd_kernel_reports_violation() {
    let a = array![[1.0, 0.0], [0.0, 1.0]];
    let b = array![[3.0, 3.0]];
    let negated = from_fn(|x, y| -x.dot(&y));

    assert!(matches!(
        squared_distance(a.view(), b.view(), &negated),
        Err(GeometryError::ContractViolation { .. })
    ));
}

#[test]
fn test_cache_does_not_change_results() {
    let temp_file = three_blobs();
    let plain = GeometryEstimator::with_kernel(RBFKernel::new(0.3))
        .class_geometry_from_csv(temp_file.path())
        .unwrap();
    let cached = GeometryEstimator::with_kernel(RBFKernel::new(0.3))
        .with_cache_size(64)
        .class_geometry_from_csv(temp_file.path())
        .unwrap();

    assert_eq!(plain, cached);
}

#[test]
fn test_report_round_trip() {
    let temp_file = three_blobs();
    let estimator = GeometryEstimator::with_kernel(RBFKernel::new(0.25));
    let geometry = estimator.class_geometry_from_csv(temp_file.path()).unwrap();

    let report = GeometryReport::from_class_geometry(&geometry, estimator.kernel(), estimator.config());
    let report_file = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    report.save_to_file(report_file.path()).unwrap();

    let loaded = GeometryReport::load_from_file(report_file.path()).unwrap();
    assert_eq!(loaded.kernel, "rbf(gamma=0.25)");
    assert_eq!(loaded.to_class_geometry().unwrap(), geometry);
}

#[test]
fn test_error_handling() {
    // Nonexistent file
    assert!(matches!(
        load("nonexistent_file.csv"),
        Err(GeometryError::ParseError { line: 0, .. })
    ));

    // Empty file
    let empty = write_csv(&[]);
    assert!(matches!(load(empty.path()), Err(GeometryError::EmptyDataset)));

    // Non-numeric feature
    let bad = write_csv(&["1.0,2.0,A", "1.0,oops,B"]);
    assert!(matches!(
        load(bad.path()),
        Err(GeometryError::ParseError { line: 2, .. })
    ));

    // Labels and rows disagree
    assert!(matches!(
        LabeledPoints::new(Array2::zeros((2, 2)), vec!["A".into()]),
        Err(GeometryError::DimensionMismatch { .. })
    ));

    // Empty point set
    let nothing = Array2::<f64>::zeros((0, 2));
    assert!(matches!(
        squared_radius(nothing.view(), &LinearKernel::new()),
        Err(GeometryError::EmptySet(_))
    ));
}
