//! Edge, threshold and neighbour filter regression test

use grainscan_core::{Pix, PixMut};
use grainscan_filter::{
    BorderPolicy, EdgeOrientation, KernelId, MagnitudeMode, NeighborFilter, add_speckles,
    convolve_named, magnitude, magnitude_with_mode, neighbor_filter, sobel_edge, threshold,
};
use grainscan_test::{RegParams, fill_rect};

/// 12x12 dark image with a bright 4x4 square at (4, 4)
fn square_image() -> Pix {
    let mut pm = PixMut::new(12, 12, 1).unwrap();
    pm.fill(20);
    fill_rect(&mut pm, 4, 4, 4, 4, 200);
    pm.into()
}

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");
    let pix = square_image();

    // --- Test 1: Sobel magnitude ---
    let edges = sobel_edge(&pix, EdgeOrientation::All, BorderPolicy::Replicate).unwrap();
    // rising edges on the left side respond, falling edges clamp to zero
    rp.compare_values(255.0, edges.get_sample(3, 6, 0).unwrap() as f64, 0.0);
    rp.compare_values(255.0, edges.get_sample(4, 6, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, edges.get_sample(7, 6, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, edges.get_sample(8, 6, 0).unwrap() as f64, 0.0);
    // flat regions
    rp.compare_values(0.0, edges.get_sample(0, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, edges.get_sample(5, 5, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, edges.get_sample(11, 11, 0).unwrap() as f64, 0.0);

    // --- Test 2: manual composition matches sobel_edge ---
    let gx = convolve_named(&pix, KernelId::SobelHorizontal, BorderPolicy::Replicate).unwrap();
    let gy = convolve_named(&pix, KernelId::SobelVertical, BorderPolicy::Replicate).unwrap();
    let m = magnitude(&gx, &gy).unwrap();
    rp.compare_pix(&edges, &m);

    // --- Test 3: threshold keeps only edge pixels ---
    let binary = threshold(&edges, 25).unwrap();
    let only_binary = binary.data().iter().all(|&v| v == 0 || v == 255);
    rp.compare_values(1.0, if only_binary { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(255.0, binary.get_sample(3, 6, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, binary.get_sample(5, 5, 0).unwrap() as f64, 0.0);
    eprintln!("  edge pixels: {}", binary.count_nonzero());

    // --- Test 4: rescale stretches a weak gradient to 255 ---
    let mut pm = PixMut::new(6, 3, 1).unwrap();
    fill_rect(&mut pm, 3, 0, 3, 3, 10);
    let weak: Pix = pm.into();
    let gx = convolve_named(&weak, KernelId::SobelHorizontal, BorderPolicy::Replicate).unwrap();
    let gy = convolve_named(&weak, KernelId::SobelVertical, BorderPolicy::Replicate).unwrap();
    let clamped = magnitude_with_mode(&gx, &gy, MagnitudeMode::Clamp).unwrap();
    let rescaled = magnitude_with_mode(&gx, &gy, MagnitudeMode::Rescale).unwrap();
    rp.compare_values(40.0, clamped.get_sample(2, 1, 0).unwrap() as f64, 0.0);
    rp.compare_values(255.0, rescaled.get_sample(2, 1, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, rescaled.get_sample(0, 1, 0).unwrap() as f64, 0.0);

    assert!(rp.cleanup(), "edge regression test failed");
}

#[test]
fn speckle_reg() {
    let mut rp = RegParams::new("speckle");

    let mut pm = PixMut::new(16, 16, 1).unwrap();
    pm.fill(20);
    let clean: Pix = pm.into();

    // --- Test 1: a single speckle is removed by the bound filter ---
    let noisy = add_speckles(&clean, 1, 5).unwrap();
    rp.compare_values(
        1.0,
        noisy.data().iter().filter(|&&v| v == 255).count() as f64,
        0.0,
    );
    let restored = neighbor_filter(&noisy, NeighborFilter::Bound).unwrap();
    rp.compare_pix(&clean, &restored);

    // --- Test 2: same seed, same noise ---
    let a = add_speckles(&clean, 40, 11).unwrap();
    let b = add_speckles(&clean, 40, 11).unwrap();
    rp.compare_pix(&a, &b);

    // --- Test 3: every filter leaves a uniform image alone ---
    for f in [
        NeighborFilter::Bound,
        NeighborFilter::RaiseToMin,
        NeighborFilter::LowerToMax,
        NeighborFilter::Mean,
        NeighborFilter::Median,
    ] {
        let out = neighbor_filter(&clean, f).unwrap();
        rp.compare_pix(&clean, &out);
    }

    assert!(rp.cleanup(), "speckle regression test failed");
}
