mod common;

use tda_steenrod::{barcodes, compute, Bar, BarcodeConfig, Convention};

/// Bars written as (death, birth), death -1 for essential
fn bars(list: &[(i64, usize)]) -> Vec<Bar> {
    list.iter()
        .map(|&(death, birth)| match death {
            -1 => Bar::essential(birth),
            t => Bar::finite(t as usize, birth),
        })
        .collect()
}

#[test]
fn hollow_triangle_barcodes() {
    let result = barcodes(&common::hollow_triangle(), &BarcodeConfig::new(1)).unwrap();
    assert_eq!(result.barcode.dim(0), bars(&[(-1, 0)]).as_slice());
    assert_eq!(result.barcode.dim(1), bars(&[(-1, 5), (2, 4), (1, 3)]).as_slice());
    assert_eq!(result.steenrod.n_dimensions(), 2);
    assert!(result.steenrod.is_empty());
}

#[test]
fn filled_triangle_barcodes() {
    for k in [1, 2] {
        let result = barcodes(&common::filled_triangle(), &BarcodeConfig::new(k)).unwrap();
        assert_eq!(result.barcode.dim(0), bars(&[(-1, 0)]).as_slice());
        assert_eq!(result.barcode.dim(1), bars(&[(2, 4), (1, 3)]).as_slice());
        assert_eq!(result.barcode.dim(2), bars(&[(5, 6)]).as_slice());
        assert!(result.steenrod.is_empty(), "k = {k}");
    }
}

#[test]
fn sphere_has_no_squares() {
    let result = barcodes(&common::tetrahedron_boundary(), &BarcodeConfig::new(1)).unwrap();
    assert_eq!(result.barcode.essential(2).count(), 1);
    assert!(result.steenrod.is_empty());
}

#[test]
fn rp2_ordinary_barcode() {
    let result = barcodes(&common::rp2(), &BarcodeConfig::new(1)).unwrap();
    assert_eq!(result.barcode.dim(0), bars(&[(-1, 0)]).as_slice());
    assert_eq!(
        result.barcode.dim(1),
        bars(&[(-1, 11), (5, 10), (4, 9), (3, 8), (2, 7), (1, 6)]).as_slice()
    );
    assert_eq!(
        result.barcode.dim(2),
        bars(&[
            (-1, 30),
            (19, 29),
            (20, 28),
            (13, 27),
            (15, 26),
            (18, 25),
            (17, 24),
            (16, 23),
            (14, 22),
            (12, 21),
        ])
        .as_slice()
    );
}

#[test]
fn rp2_square_is_nonzero() {
    // Sq¹ maps the generator of H¹(RP²) onto the generator of H²(RP²)
    let result = barcodes(&common::rp2(), &BarcodeConfig::new(1)).unwrap();
    assert!(result.steenrod.dim(0).is_empty());
    assert!(result.steenrod.dim(1).is_empty());
    assert_eq!(result.steenrod.dim(2), bars(&[(-1, 11)]).as_slice());

    // Sq² lands in dimension 3, which RP² does not have
    let result = barcodes(&common::rp2(), &BarcodeConfig::new(2)).unwrap();
    assert!(result.steenrod.is_empty());
}

#[test]
fn rp2_square_image_is_the_top_class() {
    let persistence = compute(&common::rp2(), &BarcodeConfig::new(1)).unwrap();
    let images = persistence.matrix.dim(1);
    assert_eq!(images.len(), persistence.ordinary.barcode.dim(1).len());

    // The essential H¹ class squares to a nonzero cochain
    assert!(persistence.ordinary.barcode.dim(1)[0].is_essential());
    assert!(!images[0].is_zero());

    // Sq¹ does not reach past the top dimension
    assert!(persistence.matrix.dim(2).is_empty());
}

#[test]
fn rp2_cone_kills_the_square() {
    let result = barcodes(&common::rp2_cone(), &BarcodeConfig::new(1)).unwrap();
    assert_eq!(
        result.barcode.dim(1),
        bars(&[(31, 32), (5, 10), (4, 9), (3, 8), (2, 7), (1, 6)]).as_slice()
    );
    assert_eq!(result.barcode.dim(2)[0], Bar::finite(11, 43));
    assert_eq!(result.barcode.dim(3)[0], Bar::finite(30, 62));

    assert_eq!(result.steenrod.n_dimensions(), 4);
    assert!(result.steenrod.dim(2).is_empty());
    assert_eq!(result.steenrod.dim(3), bars(&[(30, 43)]).as_slice());
}

#[test]
fn rp2_cone_higher_squares_vanish() {
    for k in [2, 3] {
        let result = barcodes(&common::rp2_cone(), &BarcodeConfig::new(k)).unwrap();
        assert!(result.steenrod.is_empty(), "k = {k}");
    }
}

#[test]
fn maxdim_cap_drops_target_dimension() {
    let config = BarcodeConfig::new(1).with_maxdim(2);
    let result = barcodes(&common::rp2_cone(), &config).unwrap();
    assert_eq!(result.barcode.n_dimensions(), 3);
    assert_eq!(result.steenrod.n_dimensions(), 3);
    assert!(result.steenrod.is_empty());
}

#[test]
fn rp2_absolute_barcodes() {
    let config = BarcodeConfig::new(1).with_absolute(true);
    let result = barcodes(&common::rp2(), &config).unwrap();
    assert_eq!(result.barcode.convention(), Convention::Absolute);

    // H₀: one component, five edges merging vertices
    let dim0 = result.barcode.dim(0);
    assert_eq!(dim0.len(), 6);
    assert_eq!(dim0[0], Bar::essential(0));
    assert_eq!(dim0[1], Bar { birth: 1, death: Some(6) });

    // H₁ over GF(2) has one essential class, H₂ one as well
    assert_eq!(result.barcode.essential(1).count(), 1);
    assert_eq!(result.barcode.dim(1).len(), 10);
    assert_eq!(result.barcode.dim(2), bars(&[(-1, 30)]).as_slice());

    assert_eq!(result.steenrod.convention(), Convention::Absolute);
    assert_eq!(result.steenrod.dim(2), bars(&[(-1, 11)]).as_slice());
}

#[test]
fn collapsed_values_drop_zero_length_bars() {
    // Every edge and triangle of RP² enters at the same value
    let filtration = common::rp2();
    let values: Vec<f64> = filtration
        .simplices()
        .iter()
        .map(|s| if s.dimension() == 0 { 0.0 } else { 1.0 })
        .collect();
    let valued = filtration.with_values(values).unwrap();

    let result = barcodes(&valued, &BarcodeConfig::new(1)).unwrap();
    assert_eq!(result.barcode.dim(1), bars(&[(-1, 11), (5, 10), (4, 9), (3, 8), (2, 7), (1, 6)]).as_slice());
    assert_eq!(result.barcode.dim(2), bars(&[(-1, 30)]).as_slice());
    assert_eq!(result.steenrod.dim(2), bars(&[(-1, 11)]).as_slice());

    let (ordinary, steenrod) = result.filtration_values(&valued).unwrap();
    assert_eq!(ordinary[1][1].birth, 1.0);
    assert_eq!(ordinary[1][1].death, 0.0);
    assert!(steenrod[2][0].is_essential());
}

#[test]
fn tied_values_drop_finite_steenrod_bar() {
    let filtration = common::rp2_cone();
    let mut values: Vec<f64> = (0..filtration.len()).map(|i| i as f64).collect();

    let distinct = filtration.clone().with_values(values.clone()).unwrap();
    let result = barcodes(&distinct, &BarcodeConfig::new(1)).unwrap();
    assert_eq!(result.steenrod.dim(3), bars(&[(30, 43)]).as_slice());

    // The Steenrod bar (30, 43) now has equal endpoint values
    values[43] = values[30];
    let tied = filtration.with_values(values).unwrap();
    let result = barcodes(&tied, &BarcodeConfig::new(1)).unwrap();
    assert!(!result.steenrod.dim(3).contains(&Bar::finite(30, 43)));
    assert!(result.steenrod.is_empty());
    // The ordinary bar born at 43 keeps distinct endpoint values
    assert_eq!(result.barcode.dim(2)[0], Bar::finite(11, 43));
}
