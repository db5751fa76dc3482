use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;

use imgsim::imgproc::metrics::{self, SsimOptions};
use imgsim::io::functional as F;

#[derive(FromArgs, Debug)]
/// Compare two images and print their PSNR, SSIM and RMSE.
struct Args {
    /// path to the first image
    #[argh(positional)]
    image1: PathBuf,

    /// path to the second image
    #[argh(positional)]
    image2: PathBuf,

    /// use an 11x11 gaussian SSIM window instead of the 7x7 uniform one
    #[argh(switch, short = 'g')]
    gaussian_weights: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // read the images
    let image1 = F::read_image_any_rgb8(&args.image1)?;
    let image2 = F::read_image_any_rgb8(&args.image2)?;

    log::info!(
        "comparing {} ({}) with {} ({})",
        args.image1.display(),
        image1.size(),
        args.image2.display(),
        image2.size()
    );

    let ssim_options = if args.gaussian_weights {
        SsimOptions::gaussian()
    } else {
        SsimOptions::default()
    };

    // psnr and mse on the color images, ssim and rmse on grayscale
    let report = metrics::evaluate_with_options(&image1, &image2, &ssim_options)?;
    log::debug!("mse: {:?}", report.mse);

    println!("PSNR: {:?}", report.psnr);
    println!("SSIM: {:?}", report.ssim);
    println!("rmse_value: {:?}", report.rmse);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
