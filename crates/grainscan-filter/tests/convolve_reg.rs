//! Convolution regression test
//!
//! Border policies, the normalization rule and the built-in kernel table.

use grainscan_core::{Pix, PixMut};
use grainscan_filter::{BorderPolicy, Kernel, KernelId, convolve, convolve_named, sample};
use grainscan_test::{RegParams, fill_rect, gray_from_rows};

const POLICIES: [BorderPolicy; 4] = [
    BorderPolicy::Zero,
    BorderPolicy::Replicate,
    BorderPolicy::Reflect,
    BorderPolicy::Wrap,
];

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    // --- Test 1: replicate padding on a uniform image matches the interior ---
    let uniform = Pix::from_vec(5, 4, 1, vec![90; 20]).unwrap();
    for id in KernelId::ALL {
        let out = convolve_named(&uniform, id, BorderPolicy::Replicate).unwrap();
        let interior = out.get_sample(2, 2, 0).unwrap();
        let expected = if Kernel::named(id).divisor().is_some() { 90 } else { 0 };
        rp.compare_values(expected as f64, interior as f64, 0.0);
        let uniform_out = out.data().iter().all(|&v| v == interior);
        rp.compare_values(1.0, if uniform_out { 1.0 } else { 0.0 }, 0.0);
        eprintln!("  {}: interior {}", id.name(), interior);
    }

    // --- Test 2: wrap and reflect also preserve a uniform image ---
    let mean = Kernel::named(KernelId::Mean);
    for policy in [BorderPolicy::Reflect, BorderPolicy::Wrap] {
        let out = convolve(&uniform, &mean, policy).unwrap();
        rp.compare_pix(&uniform, &out);
    }

    // --- Test 3: zero padding darkens the frame only ---
    let out = convolve(&uniform, &mean, BorderPolicy::Zero).unwrap();
    rp.compare_values(90.0, out.get_sample(2, 2, 0).unwrap() as f64, 0.0);
    // corner sees 4 of 9 samples: 360 / 9
    rp.compare_values(40.0, out.get_sample(0, 0, 0).unwrap() as f64, 0.0);
    // edge sees 6 of 9: 540 / 9
    rp.compare_values(60.0, out.get_sample(2, 0, 0).unwrap() as f64, 0.0);

    // --- Test 4: sum 9 divides, sum 0 does not ---
    let mut pm = PixMut::new(7, 7, 1).unwrap();
    fill_rect(&mut pm, 3, 3, 1, 1, 90);
    let dot: Pix = pm.into();
    let out = convolve_named(&dot, KernelId::Mean, BorderPolicy::Zero).unwrap();
    rp.compare_values(9.0, out.count_nonzero() as f64, 0.0);
    rp.compare_values(10.0, out.get_sample(2, 2, 0).unwrap() as f64, 0.0);

    let step = gray_from_rows(&[[0u8, 0, 20, 20], [0, 0, 20, 20], [0, 0, 20, 20]]).unwrap();
    let out = convolve_named(&step, KernelId::SobelVertical, BorderPolicy::Replicate).unwrap();
    // (1 + 2 + 1) * 20, not divided
    rp.compare_values(80.0, out.get_sample(1, 1, 0).unwrap() as f64, 0.0);
    rp.compare_values(80.0, out.get_sample(2, 1, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, out.get_sample(0, 1, 0).unwrap() as f64, 0.0);

    // --- Test 5: geometry is preserved for every policy ---
    let color = Pix::new(6, 3, 3).unwrap();
    for policy in POLICIES {
        let out = convolve_named(&color, KernelId::Gaussian, policy).unwrap();
        rp.compare_values(6.0, out.width() as f64, 0.0);
        rp.compare_values(3.0, out.height() as f64, 0.0);
        rp.compare_values(3.0, out.channels() as f64, 0.0);
    }

    // --- Test 6: sampler agrees with resolve on a ramp ---
    let ramp = gray_from_rows(&[[0u8, 1, 2, 3, 4]]).unwrap();
    rp.compare_values(4.0, sample(&ramp, -1, 0, BorderPolicy::Wrap)[0] as f64, 0.0);
    rp.compare_values(3.0, sample(&ramp, 5, 0, BorderPolicy::Reflect)[0] as f64, 0.0);
    rp.compare_values(4.0, sample(&ramp, 9, 3, BorderPolicy::Replicate)[0] as f64, 0.0);
    rp.compare_values(0.0, sample(&ramp, 9, 0, BorderPolicy::Zero)[0] as f64, 0.0);

    assert!(rp.cleanup(), "convolve regression test failed");
}

#[test]
fn kernel_errors_reg() {
    let mut rp = RegParams::new("kernel_errors");

    let bad = [(2u32, 2u32), (3, 5), (4, 4)];
    for (w, h) in bad {
        let data = vec![1.0; (w * h) as usize];
        rp.compare_values(1.0, if Kernel::new(w, h, &data).is_err() { 1.0 } else { 0.0 }, 0.0);
    }
    let nan = [0.0, f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
    rp.compare_values(1.0, if Kernel::new(3, 3, &nan).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "kernel_errors regression test failed");
}
