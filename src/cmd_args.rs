use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Number of generated posts in the store at startup
    #[clap(short = 'n', long, help = "number of initial posts [default: 30]")]
    posts: Option<usize>,

    /// Number of generated posts in the archive pool
    #[clap(short = 'a', long, help = "number of archive posts [default: 10000]")]
    archive: Option<usize>,

    /// Seed for the post generator; omit for a different blog every run
    #[clap(short = 's', long, help = "random seed for generated posts")]
    seed: Option<u64>,

    #[clap(short = 'd', long, help = "start in dark mode")]
    dark: bool,

    /// Configuration file; falls back to COSMICBLOG_CONFIG_PATH, then ~/.cosmicblog/config
    #[clap(short = 'c', long, help = "configuration file path")]
    config: Option<String>,

    /// JSON array of {"title", "body"} objects used instead of generated posts
    #[clap(long, help = "load initial posts from a JSON file")]
    seed_file: Option<PathBuf>,

    #[clap(short = 'v', long, help = "debug logging")]
    verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {
    posts: Option<usize>,
    archive: Option<usize>,
    seed: Option<u64>,
    dark: bool,
    config: Option<String>,
    seed_file: Option<PathBuf>,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            posts: args.posts,
            archive: args.archive,
            seed: args.seed,
            dark: args.dark,
            config: args.config,
            seed_file: args.seed_file,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn posts(&self) -> Option<usize> {
        self.posts
    }

    pub fn archive(&self) -> Option<usize> {
        self.archive
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Only ever turns dark mode on; the config file may still enable it
    pub fn dark(&self) -> bool {
        self.dark
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn seed_file(&self) -> Option<&PathBuf> {
        self.seed_file.as_ref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
