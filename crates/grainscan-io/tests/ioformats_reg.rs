//! Image I/O regression test
//!
//! PNG round trips through files and memory, JPEG shape preservation,
//! format sniffing and error reporting for missing or unknown files.

use grainscan_core::Pix;
use grainscan_io::{
    ImageFormat, IoError, detect_format, read_image, read_image_mem, write_image, write_image_mem,
};
use grainscan_test::{RegParams, grain_scene, random_mask};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str, format: ImageFormat) -> PathBuf {
    std::env::temp_dir().join(format!(
        "grainscan_{}_{}.{}",
        name,
        std::process::id(),
        format.extension()
    ))
}

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    let scene = grain_scene(40, 30, &[(3, 4, 10, 6), (20, 15, 12, 9)]).unwrap();
    let mask = random_mask(33, 17, 0.5, 9).unwrap();

    // --- Test 1: lossless PNG through a file ---
    for (name, pix) in [("scene", &scene), ("mask", &mask)] {
        let path = temp_path(name, ImageFormat::Png);
        write_image(pix, &path, ImageFormat::Png).unwrap();
        rp.compare_values(
            1.0,
            if detect_format(&path).unwrap() == ImageFormat::Png { 1.0 } else { 0.0 },
            0.0,
        );
        let back = read_image(&path).unwrap();
        rp.compare_pix(pix, &back);
        let _ = fs::remove_file(&path);
    }

    // --- Test 2: lossless PNG in memory ---
    let bytes = write_image_mem(&scene, ImageFormat::Png).unwrap();
    rp.compare_pix(&scene, &read_image_mem(&bytes).unwrap());

    // --- Test 3: JPEG keeps geometry and approximate values ---
    let gray = scene.to_gray().unwrap();
    let bytes = write_image_mem(&gray, ImageFormat::Jpeg).unwrap();
    let back = read_image_mem(&bytes).unwrap();
    rp.compare_values(40.0, back.width() as f64, 0.0);
    rp.compare_values(30.0, back.height() as f64, 0.0);
    rp.compare_values(1.0, back.channels() as f64, 0.0);
    // deep inside a flat background block
    let bg = gray.get_sample(36, 2, 0).unwrap() as f64;
    rp.compare_values(bg, back.get_sample(36, 2, 0).unwrap() as f64, 4.0);

    let path = temp_path("scene", ImageFormat::Jpeg);
    write_image(&scene, &path, ImageFormat::Jpeg).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_values(3.0, back.channels() as f64, 0.0);
    let _ = fs::remove_file(&path);

    // --- Test 4: errors ---
    let missing = read_image(temp_path("does_not_exist", ImageFormat::Png));
    rp.compare_values(
        1.0,
        if matches!(missing, Err(IoError::Io(_))) { 1.0 } else { 0.0 },
        0.0,
    );
    let unknown = read_image_mem(b"GIF89a....");
    rp.compare_values(
        1.0,
        if matches!(unknown, Err(IoError::UnsupportedFormat(_))) { 1.0 } else { 0.0 },
        0.0,
    );
    let rgba = Pix::new(4, 4, 4).unwrap();
    rp.compare_values(
        1.0,
        if write_image_mem(&rgba, ImageFormat::Jpeg).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(
        1.0,
        if write_image_mem(&rgba, ImageFormat::Unknown).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "ioformats regression test failed");
}
