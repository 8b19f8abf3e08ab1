use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use patchmatch_core::consts::DEFAULT_PATCH_SIZE;
use patchmatch_core::io::image_io::source_info;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,

    /// Patch side length used to compute the field size
    #[arg(long, default_value_t = DEFAULT_PATCH_SIZE)]
    pub patch_size: usize,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = source_info(&args.file)?;

    println!("File:        {}", info.filename.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Channels:    {}", info.channels);

    let (w, h) = (info.width as usize, info.height as usize);
    if args.patch_size == 0 || args.patch_size > w || args.patch_size > h {
        println!("Field:       patch size {} does not fit", args.patch_size);
    } else {
        println!(
            "Field:       {}x{} ({} patches of {}x{})",
            w - args.patch_size + 1,
            h - args.patch_size + 1,
            (w - args.patch_size + 1) * (h - args.patch_size + 1),
            args.patch_size,
            args.patch_size
        );
    }

    Ok(())
}
