use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::{Parser, Subcommand};
use log::info;

use crate::access::column::Anchor;

/// Verbosity of user information
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl From<u64> for Verbosity {
    fn from(count: u64) -> Self {
        match count {
            0 => Verbosity::Errors,
            1 => Verbosity::Warnings,
            2 => Verbosity::Info,
            3 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// What the program was asked to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
    Row,
    Column,
    Report,
    Distance,
    Size,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Runtime configuration built from the command line.
#[derive(Debug)]
pub struct SeqOpts {
    /// Operation to run
    pub op_mode: Mode,
    /// File read for input (raw sequences, or the compressed store)
    pub input: PathBuf,
    /// File written by compress/decompress
    pub output: PathBuf,
    /// Second file compared by report and distance
    pub other: PathBuf,
    /// Row index or column position
    pub index: i64,
    /// Where column positions count from
    pub anchor: Anchor,
    /// Fixed line count used to average distances. None averages over the pairs compared.
    pub divisor: Option<f64>,
    /// Process the sequences of a collection on the rayon pool
    pub parallel: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Default for SeqOpts {
    fn default() -> Self {
        Self::new(Mode::Compress)
    }
}

impl SeqOpts {
    pub fn new(op_mode: Mode) -> Self {
        let output = match op_mode {
            Mode::Compress => "compressed.txt",
            Mode::Decompress => "decompressed.txt",
            _ => "",
        };
        Self {
            op_mode,
            input: PathBuf::new(),
            output: PathBuf::from(output),
            other: PathBuf::new(),
            index: 0,
            anchor: Anchor::Start,
            divisor: None,
            parallel: false,
            verbose: Verbosity::Errors,
        }
    }

    /// Put command line information from CLAP into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let mut opts = match args.action {
            Action::Compress { input, output } => {
                let mut o = SeqOpts::new(Mode::Compress);
                o.input = input;
                if let Some(output) = output {
                    o.output = output;
                }
                o
            }
            Action::Decompress { input, output } => {
                let mut o = SeqOpts::new(Mode::Decompress);
                o.input = input;
                if let Some(output) = output {
                    o.output = output;
                }
                o
            }
            Action::Row { input, index } => {
                let mut o = SeqOpts::new(Mode::Row);
                o.input = input;
                o.index = index;
                o
            }
            Action::Column {
                input,
                position,
                from_end,
            } => {
                let mut o = SeqOpts::new(Mode::Column);
                o.input = input;
                o.index = position;
                if from_end {
                    o.anchor = Anchor::End;
                }
                o
            }
            Action::Report { raw, compressed } => {
                let mut o = SeqOpts::new(Mode::Report);
                o.input = raw;
                o.other = compressed;
                o
            }
            Action::Distance {
                first,
                second,
                divisor,
            } => {
                let mut o = SeqOpts::new(Mode::Distance);
                o.input = first;
                o.other = second;
                o.divisor = divisor;
                o
            }
            Action::Size { input, divisor } => {
                let mut o = SeqOpts::new(Mode::Size);
                o.input = input;
                o.divisor = divisor;
                o
            }
        };
        opts.parallel = args.parallel;
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from(args.verbose)
        };
        opts
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "BWT + RLE compression of line-oriented sequence files",
    long_about = "
    Each line of the input is treated as one sequence. Spaces are stripped, the line is
    Burrows-Wheeler transformed and the result is run-length encoded. Single rows can be
    decompressed, and single columns read across every row without decompressing them."
)]
pub struct Args {
    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', long = "verbose", parse(from_occurrences), global = true)]
    verbose: u64,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    /// Process the sequences in parallel
    #[clap(short = 'p', long = "parallel", global = true)]
    parallel: bool,

    #[clap(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Compress a file of sequences, one per line
    Compress {
        input: PathBuf,
        /// Output file [default: compressed.txt]
        #[clap(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Decompress a compressed file, one sequence per line
    Decompress {
        input: PathBuf,
        /// Output file [default: decompressed.txt]
        #[clap(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Print one decompressed sequence from a compressed file
    #[clap(allow_negative_numbers = true)]
    Row {
        input: PathBuf,
        index: i64,
    },
    /// Print one column across every sequence of a compressed file
    #[clap(allow_negative_numbers = true)]
    Column {
        input: PathBuf,
        position: i64,
        /// Count the position back from the end of each sequence
        #[clap(long = "from-end")]
        from_end: bool,
    },
    /// Compare the sizes of a raw file and its compressed form
    Report { raw: PathBuf, compressed: PathBuf },
    /// Compressed-length distance between two sequence files
    Distance {
        first: PathBuf,
        second: PathBuf,
        /// Divide the summed distance by this line count instead of the pairs compared
        #[clap(long = "divisor")]
        divisor: Option<f64>,
    },
    /// Mean compressed size in bytes per sequence of a file
    Size {
        input: PathBuf,
        /// Divide the total compressed size by this line count instead of the lines read
        #[clap(long = "divisor")]
        divisor: Option<f64>,
    },
}

/// Parse the command line, set the log level and report what we are going to do.
pub fn seqopts_init() -> SeqOpts {
    let opts = SeqOpts::from_args(Args::parse());

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    // Below we report initialization status to the user
    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.input.display());
    match opts.op_mode {
        Mode::Compress | Mode::Decompress => {
            info!("Sending output to the file {}", opts.output.display())
        }
        Mode::Row => info!("Row index set to {}", opts.index),
        Mode::Column => info!("Column position set to {} ({:?})", opts.index, opts.anchor),
        Mode::Report | Mode::Distance => {
            info!("Comparing against the file {}", opts.other.display())
        }
        Mode::Size => {}
    }
    if let Some(d) = opts.divisor {
        info!("Averaging over a fixed {} lines", d);
    }
    if opts.parallel {
        info!("Processing sequences in parallel")
    };
    info!("---- Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> SeqOpts {
        SeqOpts::from_args(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn compress_defaults_test() {
        let opts = parse(&["bwtseq", "compress", "genome.txt"]);
        assert_eq!(opts.op_mode, Mode::Compress);
        assert_eq!(opts.input, PathBuf::from("genome.txt"));
        assert_eq!(opts.output, PathBuf::from("compressed.txt"));
        assert!(!opts.parallel);
        assert_eq!(opts.verbose, Verbosity::Errors);
    }

    #[test]
    fn decompress_output_test() {
        let opts = parse(&["bwtseq", "-p", "decompress", "c.txt", "-o", "d.txt"]);
        assert_eq!(opts.op_mode, Mode::Decompress);
        assert_eq!(opts.output, PathBuf::from("d.txt"));
        assert!(opts.parallel);
    }

    #[test]
    fn column_test() {
        let opts = parse(&["bwtseq", "-vvv", "column", "c.txt", "4", "--from-end"]);
        assert_eq!(opts.op_mode, Mode::Column);
        assert_eq!(opts.index, 4);
        assert_eq!(opts.anchor, Anchor::End);
        assert_eq!(opts.verbose, Verbosity::Debug);
    }

    #[test]
    fn negative_row_test() {
        let opts = parse(&["bwtseq", "row", "c.txt", "-1"]);
        assert_eq!(opts.op_mode, Mode::Row);
        assert_eq!(opts.index, -1);
    }

    #[test]
    fn distance_test() {
        let opts = parse(&["bwtseq", "-q", "distance", "a.txt", "b.txt", "--divisor", "21"]);
        assert_eq!(opts.op_mode, Mode::Distance);
        assert_eq!(opts.other, PathBuf::from("b.txt"));
        assert_eq!(opts.divisor, Some(21.0));
        assert_eq!(opts.verbose, Verbosity::Quiet);
    }

    #[test]
    fn size_test() {
        let opts = parse(&["bwtseq", "size", "human.txt", "--divisor", "21"]);
        assert_eq!(opts.op_mode, Mode::Size);
        assert_eq!(opts.input, PathBuf::from("human.txt"));
        assert_eq!(opts.divisor, Some(21.0));
    }

    #[test]
    fn default_opts_test() {
        let opts = SeqOpts::default();
        assert_eq!(opts.op_mode, Mode::Compress);
        assert_eq!(opts.output, PathBuf::from("compressed.txt"));
        assert_eq!(opts.verbose, Verbosity::Errors);
        assert_eq!(Verbosity::from(0), Verbosity::Errors);
        assert_eq!(Verbosity::from(9), Verbosity::Trace);
    }

    #[test]
    fn missing_subcommand_test() {
        assert!(Args::try_parse_from(["bwtseq"]).is_err());
    }
}
