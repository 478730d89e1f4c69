use recstat::{
    dataset::{AnalyzeOptions, analyze_dataset},
    labels::format_max_len,
};

use crate::{
    dataset_args::{DatasetArgs, ReservedArgs},
    logging::LogArgs,
};

/// Args for the analyze command.
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    dataset: DatasetArgs,

    #[command(flatten)]
    reserved: ReservedArgs,

    /// Do not write the vocabulary file.
    #[arg(long)]
    no_write: bool,

    /// Do not scan the training images.
    #[arg(long)]
    no_images: bool,
}

impl AnalyzeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let layout = self.dataset.layout();
        let options = AnalyzeOptions {
            reserved: self.reserved.reserved(),
            write_vocab: !self.no_write,
            scan_images: !self.no_images,
        };
        let report = analyze_dataset(&layout, &options)?;

        println!(
            "longest label length: {}",
            format_max_len(report.max_label_len)
        );

        println!("train label characters:");
        println!("{}", report.train_chars);
        println!("train + valid label characters:");
        println!("{}", report.all_chars);

        println!("character -> id mapping:");
        for (c, id) in report.vocab.entries() {
            println!("{c} {id}");
        }

        if let Some(stats) = &report.image_stats {
            println!("image sizes:");
            print!("{stats}");
        }

        Ok(())
    }
}
