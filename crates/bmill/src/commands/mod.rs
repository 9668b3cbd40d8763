use std::io::{BufRead, BufReader};

use bytemill::BpeTrainer;

mod encode;
mod train;

/// Subcommands for bmill.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text with a freshly trained vocabulary.
    Encode(encode::EncodeArgs),

    /// Train a vocabulary and report it.
    Train(train::TrainArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Train(cmd) => cmd.run(),
        }
    }
}

/// Feed one text file into the trainer, line by line.
pub(crate) fn read_text_file(
    trainer: &mut BpeTrainer<u32>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    for line in reader.lines() {
        trainer.update_from_text(&line?);
    }
    Ok(())
}
