use std::io::BufRead;
use std::sync::Arc;

use bytemill::{
    BpeTrainerOptions,
    MergeHeapEncoder,
    ParallelRayonEncoder,
    TokenDecoder,
    TokenEncoder,
    VocabDecoder,
};

use crate::commands::read_text_file;
use crate::logging::LogArgs;
use crate::split_mode::SplitModeArgs;

/// Args for the encode command.
///
/// Trains a vocabulary on the corpus files, then encodes `--text`
/// (or stdin, line by line) and prints token ids to stdout.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Training corpus files.
    #[arg(required = true)]
    corpus: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    split: SplitModeArgs,

    /// Max vocab size.
    #[arg(long, default_value = "1024")]
    vocab_size: usize,

    /// Text to encode; stdin lines when omitted.
    #[arg(long)]
    text: Option<String>,

    /// Decode each line again and warn on mismatches.
    #[arg(long)]
    verify: bool,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut trainer = BpeTrainerOptions::new(self.vocab_size)
            .with_splitter_mode(self.split.mode())
            .init::<u32>()?;

        log::info!("Reading corpus files:");
        for (idx, path) in self.corpus.iter().enumerate() {
            log::info!("{idx}: {path}");
            read_text_file(&mut trainer, path)?;
        }

        log::info!("Training tokenizer...");
        let vocab = Arc::new(trainer.train_counts()?);
        log::info!("Trained {} merges.", vocab.num_merges());

        let encoder = ParallelRayonEncoder::new(MergeHeapEncoder::init(vocab.clone())?);
        let decoder = VocabDecoder::init(vocab);

        if let Some(text) = &self.text {
            let tokens = encoder.encode(text);
            self.check_line(&decoder, text, &tokens)?;
            print_tokens(&tokens);
        } else {
            let batch: Vec<String> = std::io::stdin().lock().lines().collect::<Result<_, _>>()?;
            for (line, tokens) in batch.iter().zip(encoder.encode_batch(&batch)) {
                self.check_line(&decoder, line, &tokens)?;
                print_tokens(&tokens);
            }
        }

        Ok(())
    }

    fn check_line(
        &self,
        decoder: &VocabDecoder<u32>,
        line: &str,
        tokens: &[u32],
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.verify && decoder.try_decode_to_string(tokens)? != line {
            log::warn!("Round-trip mismatch for line: {line:?}");
        }
        Ok(())
    }
}

fn print_tokens(tokens: &[u32]) {
    let line: Vec<String> = tokens.iter().map(u32::to_string).collect();
    println!("{}", line.join(" "));
}
