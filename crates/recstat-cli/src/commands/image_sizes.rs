use recstat::images::scan_image_dir;

use crate::logging::LogArgs;

/// Args for the image-sizes command.
#[derive(clap::Args, Debug)]
pub struct ImageSizesArgs {
    /// Image directory.
    dir: String,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl ImageSizesArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let stats = scan_image_dir(&self.dir)?;
        log::info!("scanned {} images", stats.count);
        print!("{stats}");

        Ok(())
    }
}
