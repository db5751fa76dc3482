use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use imgsim::image::Image;
use imgsim::io::png::write_image_png_rgb8;

fn eval_image(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eval_image"))
        .args(args)
        .output()
        .expect("failed to run eval_image")
}

fn write_flat(dir: &Path, name: &str, size: [usize; 2], val: u8) -> PathBuf {
    let path = dir.join(name);
    let image = Image::<u8, 3>::from_size_val(size.into(), val).expect("invalid image");
    write_image_png_rgb8(&path, &image).expect("failed to write png");
    path
}

#[test]
fn identical_images() {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let image1 = write_flat(tmp_dir.path(), "a.png", [100, 100], 0);
    let image2 = write_flat(tmp_dir.path(), "b.png", [100, 100], 0);

    let output = eval_image(&[image1.as_path(), image2.as_path()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "PSNR: inf\nSSIM: 1.0\nrmse_value: 0.0\n"
    );
}

#[test]
fn black_vs_white() {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let black = write_flat(tmp_dir.path(), "black.png", [100, 100], 0);
    let white = write_flat(tmp_dir.path(), "white.png", [100, 100], 255);

    let output = eval_image(&[black.as_path(), white.as_path()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "PSNR: 0.0");
    // only the luminance term survives: c1 / (255^2 + c1)
    let ssim: f64 = lines[1]
        .strip_prefix("SSIM: ")
        .and_then(|v| v.parse().ok())
        .expect("SSIM line is not a float");
    assert!((ssim - 9.999000099990003e-5).abs() < 1e-15, "ssim: {ssim}");
    assert!(lines[1].ends_with("e-5"), "unexpected format: {}", lines[1]);
    assert_eq!(lines[2], "rmse_value: 255.0");
}

#[test]
fn gaussian_window_switch() {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let small1 = write_flat(tmp_dir.path(), "small1.png", [8, 8], 10);
    let small2 = write_flat(tmp_dir.path(), "small2.png", [8, 8], 10);
    let large1 = write_flat(tmp_dir.path(), "large1.png", [16, 16], 10);
    let large2 = write_flat(tmp_dir.path(), "large2.png", [16, 16], 20);

    let output = eval_image(&[large1.as_path(), large2.as_path(), Path::new("--gaussian-weights")]);
    assert!(output.status.success());

    // an 8x8 image fits the uniform window but not the gaussian one
    assert!(eval_image(&[small1.as_path(), small2.as_path()]).status.success());
    let output = eval_image(&[small1.as_path(), small2.as_path(), Path::new("-g")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid window size"));
}

#[test]
fn missing_file() {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let image = write_flat(tmp_dir.path(), "a.png", [10, 10], 0);
    let missing = tmp_dir.path().join("missing.png");

    let output = eval_image(&[image.as_path(), missing.as_path()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File does not exist"));
}

#[test]
fn shape_mismatch() {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let image1 = write_flat(tmp_dir.path(), "a.png", [100, 100], 0);
    let image2 = write_flat(tmp_dir.path(), "b.png", [50, 50], 0);

    let output = eval_image(&[image1.as_path(), image2.as_path()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Image size mismatch: 100x100 vs 50x50"));
}

#[test]
fn missing_arguments() {
    let output = eval_image(&[]);
    assert!(!output.status.success());
}
