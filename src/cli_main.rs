use clap::{Parser, Subcommand, ValueEnum};
use seqstats::io::alphabet::SeqType;
use seqstats::io::reader::DEFAULT_GUESS_LEN;
use seqstats::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "seqstats", version, about = "Simple statistics of FASTA/FASTQ files", long_about = None)]
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count records and report total, min, mean, max and N50 lengths per file
    Stat {
        /// Input FASTA/FASTQ(.gz) files; "-" or none reads standard input
        files: Vec<String>,

        /// Output file ("-" for stdout, ".gz" suffix compresses)
        #[arg(short, long, default_value = "-")]
        out_file: String,

        /// Number of files processed in parallel
        #[arg(short = 'j', long, default_value_t = num_cpus::get())]
        threads: usize,

        /// Sequence type; "auto" guesses it from the first record of each file
        #[arg(short = 't', long, value_enum, default_value_t = SeqTypeArg::Auto)]
        seq_type: SeqTypeArg,

        /// Length of the first sequence prefix used to guess the type (0 for whole sequence)
        #[arg(long, default_value_t = DEFAULT_GUESS_LEN)]
        alphabet_guess_seq_length: usize,

        /// Fail on letters outside the sequence type's alphabet
        #[arg(long)]
        validate_seq: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Table)]
        format: FormatArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SeqTypeArg {
    Auto,
    Dna,
    Rna,
    Protein,
    Unlimit,
}

impl SeqTypeArg {
    pub fn fixed(self) -> Option<SeqType> {
        match self {
            SeqTypeArg::Auto => None,
            SeqTypeArg::Dna => Some(SeqType::Dna),
            SeqTypeArg::Rna => Some(SeqType::Rna),
            SeqTypeArg::Protein => Some(SeqType::Protein),
            SeqTypeArg::Unlimit => Some(SeqType::Unlimit),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Table,
    Tsv,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => ReportFormat::Table,
            FormatArg::Tsv => ReportFormat::Tsv,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}
