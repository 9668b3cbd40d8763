use std::io::Read;

use bytemill::{BpeTrainerOptions, TokenDecoder, TokenEncoder, TokenVocab, Tokenizer};

use crate::commands::read_text_file;
use crate::logging::LogArgs;
use crate::split_mode::SplitModeArgs;

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input corpus files; stdin when empty.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    split: SplitModeArgs,

    /// Max vocab size.
    #[arg(long, default_value = "1024")]
    vocab_size: usize,

    /// Print the first N learned merges to stdout.
    #[arg(long, default_value = "0")]
    show_merges: usize,

    /// Encode/decode this probe text and report compression.
    #[arg(long)]
    probe: Option<String>,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut trainer = BpeTrainerOptions::new(self.vocab_size)
            .with_splitter_mode(self.split.mode())
            .with_verbose(true)
            .init::<u32>()?;

        if self.files.is_empty() {
            log::info!("Reading corpus from stdin.");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            trainer.update_from_text(&text);
        } else {
            log::info!("Reading corpus files:");
            for (idx, path) in self.files.iter().enumerate() {
                log::info!("{idx}: {path}");
                read_text_file(&mut trainer, path)?;
            }
        }

        log::info!("Training tokenizer...");
        let vocab = trainer.train_counts()?;
        log::info!(
            "Trained {} merges; vocab size {}.",
            vocab.num_merges(),
            vocab.vocab_size()
        );

        if self.show_merges > 0 {
            self.print_merges(&vocab);
        }

        if let Some(probe) = &self.probe {
            probe_roundtrip(vocab, probe)?;
        }

        Ok(())
    }

    fn print_merges(
        &self,
        vocab: &TokenVocab<u32>,
    ) {
        for (idx, &(left, right)) in vocab.merges().iter().take(self.show_merges).enumerate() {
            let token = 256 + idx as u32;
            let span = vocab.get_span(token).unwrap_or_default();
            println!(
                "{token}: ({left}, {right}) -> {:?}",
                String::from_utf8_lossy(span)
            );
        }
    }
}

fn probe_roundtrip(
    vocab: TokenVocab<u32>,
    probe: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = Tokenizer::from_vocab(vocab)?;

    let tokens = tokenizer.encode(probe);
    let decoded = tokenizer.try_decode_to_string(&tokens)?;

    log::info!(
        "Probe: {} bytes -> {} tokens ({:.2} bytes/token).",
        probe.len(),
        tokens.len(),
        probe.len() as f64 / tokens.len().max(1) as f64
    );
    if decoded != probe {
        log::warn!("Probe round-trip mismatch.");
    }

    Ok(())
}
