use bytemill::SplitterMode;
use bytemill::regex::RegexPattern;

/// Chunk splitting arg group.
///
/// GPT-4 style word splitting is the default when no flag is given.
#[derive(clap::Args, Debug)]
#[group(multiple = false)]
pub struct SplitModeArgs {
    /// Treat the whole input as a single chunk.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    raw: bool,

    /// Split chunks with the GPT-2 word pattern.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    gpt2: bool,

    /// Split chunks with a custom regex pattern.
    #[arg(long)]
    regex: Option<String>,
}

impl SplitModeArgs {
    /// Resolve the splitter mode.
    pub fn mode(&self) -> SplitterMode {
        if self.raw {
            SplitterMode::Raw
        } else if self.gpt2 {
            SplitterMode::gpt2()
        } else if let Some(pattern) = &self.regex {
            SplitterMode::Pattern(RegexPattern::from(pattern))
        } else {
            SplitterMode::gpt4()
        }
    }
}
