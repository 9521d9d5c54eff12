//! Clap argument definitions for the `tfidf` CLI.

use std::path::PathBuf;

use clap::{Args, Parser};
use tfidf_config::{Analyzer, ConfigError, DocFrequency, ModelConfig, Norm, StopWordsSpec, TextOp};

/// Parse an analyzer mode from a string.
fn parse_analyzer(s: &str) -> Result<Analyzer, String> {
    s.parse().map_err(|e: ConfigError| e.to_string())
}

/// Parse a row normalization from a string.
fn parse_norm(s: &str) -> Result<Norm, String> {
    s.parse().map_err(|e: ConfigError| e.to_string())
}

/// Parse a document-frequency threshold: a fraction if it has a decimal point, else a
/// count.
fn parse_doc_frequency(s: &str) -> Result<DocFrequency, String> {
    s.parse().map_err(|e: ConfigError| e.to_string())
}

/// Parse a comma-separated stop-word list or the `default` marker.
fn parse_stop_words(s: &str) -> Result<StopWordsSpec, String> {
    s.parse().map_err(|e: ConfigError| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "tfidf")]
#[command(about = "Preprocess a text corpus and compute TF-IDF features")]
pub struct Cli {
    /// Training corpus, one document per line
    #[arg(long, value_name = "PATH")]
    pub train: PathBuf,

    /// Validation corpus, transformed with the trained vocabulary
    #[arg(long, value_name = "PATH")]
    pub valid: Option<PathBuf>,

    /// Text operations to apply
    #[command(flatten)]
    pub ops: OpArgs,

    /// Vectorizer parameters
    #[command(flatten)]
    pub params: ParamArgs,

    /// Directory receiving train.csv and valid.csv
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write document and term closeness and print the top terms of each document
    #[arg(long)]
    pub visualize: bool,

    /// Number of top-weighted terms shown per document [default: 5]
    #[arg(long, value_name = "N")]
    pub top_terms: Option<usize>,

    /// Configuration file; disables .tfidf.toml discovery
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON run summary instead of tables
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Operation flags; each one adds its operation to the configured set.
#[derive(Args, Debug, Clone, Default)]
pub struct OpArgs {
    /// Lowercase the entire corpus
    #[arg(long)]
    pub lower: bool,

    /// Remove digits
    #[arg(long)]
    pub digits: bool,

    /// Remove punctuation
    #[arg(long)]
    pub punctuation: bool,

    /// Strip accents and non-ASCII characters
    #[arg(long)]
    pub ascii: bool,

    /// Strip accents, keep other unicode characters
    #[arg(long)]
    pub unicode: bool,

    /// Reduce words to their lemma
    #[arg(long)]
    pub lemmatize: bool,

    /// Reduce words to their stem
    #[arg(long)]
    pub stem: bool,

    /// Remove stop words: comma-separated words, or "default" for the built-in list
    #[arg(long, value_name = "SPEC", value_parser = parse_stop_words)]
    pub stop_words: Option<StopWordsSpec>,
}

impl OpArgs {
    /// Operations selected on the command line.
    fn selected(&self) -> Vec<TextOp> {
        [
            (self.lower, TextOp::Lower),
            (self.digits, TextOp::Digits),
            (self.punctuation, TextOp::Punctuation),
            (self.ascii, TextOp::AsciiStrip),
            (self.unicode, TextOp::UnicodeStrip),
            (self.lemmatize, TextOp::Lemmatize),
            (self.stem, TextOp::Stem),
            (self.stop_words.is_some(), TextOp::StopWords),
        ]
        .into_iter()
        .filter_map(|(on, op)| on.then_some(op))
        .collect()
    }
}

/// Vectorizer parameter overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Feature unit: word, char or char_wb [default: word]
    #[arg(long, value_parser = parse_analyzer)]
    pub analyzer: Option<Analyzer>,

    /// Shortest n-gram length [default: 1]
    #[arg(long, value_name = "N")]
    pub ngram_min: Option<usize>,

    /// Longest n-gram length [default: 1]
    #[arg(long, value_name = "N")]
    pub ngram_max: Option<usize>,

    /// Prune terms in fewer documents (fraction like 0.1, or a count like 2)
    #[arg(long, value_name = "DF", value_parser = parse_doc_frequency)]
    pub min_df: Option<DocFrequency>,

    /// Prune terms in more documents (fraction like 0.9, or a count like 10)
    #[arg(long, value_name = "DF", value_parser = parse_doc_frequency)]
    pub max_df: Option<DocFrequency>,

    /// Keep only the most frequent terms
    #[arg(long, value_name = "N")]
    pub max_features: Option<usize>,

    /// Clip term counts to one
    #[arg(long)]
    pub binary: bool,

    /// Row normalization: l1, l2 or none [default: l2]
    #[arg(long, value_parser = parse_norm)]
    pub norm: Option<Norm>,

    /// Replace tf with 1 + ln(tf)
    #[arg(long)]
    pub sublinear_tf: bool,

    /// Use raw term frequencies without IDF weighting
    #[arg(long)]
    pub no_idf: bool,

    /// Disable IDF smoothing
    #[arg(long)]
    pub no_smooth_idf: bool,
}

impl Cli {
    /// Applies command-line overrides on top of a configuration loaded from files.
    pub fn apply(&self, config: &mut ModelConfig) {
        config.ops = config.ops.iter().chain(self.ops.selected()).collect();
        if let Some(ref spec) = self.ops.stop_words {
            config.stop_words = Some(spec.clone());
        }

        let params = &self.params;
        if let Some(analyzer) = params.analyzer {
            config.analyzer = analyzer;
        }
        if let Some(min) = params.ngram_min {
            config.ngram_range.min = min;
        }
        if let Some(max) = params.ngram_max {
            config.ngram_range.max = max;
        }
        if let Some(min_df) = params.min_df {
            config.min_df = min_df;
        }
        if let Some(max_df) = params.max_df {
            config.max_df = max_df;
        }
        if let Some(max_features) = params.max_features {
            config.max_features = Some(max_features);
        }
        if let Some(norm) = params.norm {
            config.norm = norm;
        }
        config.binary |= params.binary;
        config.sublinear_tf |= params.sublinear_tf;
        config.use_idf &= !params.no_idf;
        config.smooth_idf &= !params.no_smooth_idf;
    }
}

#[cfg(test)]
mod test {
    use std::iter;

    use clap::CommandFactory;
    use tfidf_config::NgramRange;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(iter::once("tfidf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn train_is_required() {
        assert!(Cli::try_parse_from(["tfidf", "--lower"]).is_err());
    }

    #[test]
    fn flags_add_to_configured_ops() {
        let cli = parse(&["--train", "t.txt", "--digits", "--stem"]);
        let mut config = ModelConfig::new([TextOp::Lower]);
        cli.apply(&mut config);
        let ops: Vec<TextOp> = config.ops.iter().collect();
        assert_eq!(ops, vec![TextOp::Lower, TextOp::Stem, TextOp::Digits]);
    }

    #[test]
    fn stop_words_flag_implies_op() {
        let cli = parse(&["--train", "t.txt", "--stop-words", "but,and"]);
        let mut config = ModelConfig::default();
        cli.apply(&mut config);
        assert!(config.ops.contains(TextOp::StopWords));
        assert_eq!(
            config.stop_words,
            Some(StopWordsSpec::Words(vec!["but".into(), "and".into()]))
        );

        let cli = parse(&["--train", "t.txt", "--stop-words", "default"]);
        cli.apply(&mut config);
        assert_eq!(config.stop_words, Some(StopWordsSpec::Default));
    }

    #[test]
    fn params_override_config() {
        let cli = parse(&[
            "--train",
            "t.txt",
            "--analyzer",
            "char_wb",
            "--ngram-min",
            "2",
            "--ngram-max",
            "4",
            "--min-df",
            "2",
            "--max-df",
            "0.8",
            "--max-features",
            "50",
            "--norm",
            "l1",
            "--binary",
            "--no-idf",
        ]);
        let mut config = ModelConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.analyzer, Analyzer::CharWb);
        assert_eq!(config.ngram_range, NgramRange::new(2, 4));
        assert_eq!(config.min_df, DocFrequency::Count(2));
        assert_eq!(config.max_df, DocFrequency::Fraction(0.8));
        assert_eq!(config.max_features, Some(50));
        assert_eq!(config.norm, Norm::L1);
        assert!(config.binary);
        assert!(!config.use_idf);
        assert!(config.smooth_idf);
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = parse(&["--train", "t.txt"]);
        let mut config = ModelConfig::new([TextOp::Punctuation])
            .with_sublinear_tf(true)
            .with_norm(Norm::None);
        let before = config.clone();
        cli.apply(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn bad_values_are_rejected() {
        for args in [
            ["--analyzer", "sentence"],
            ["--norm", "l3"],
            ["--min-df", "lots"],
        ] {
            let argv = ["tfidf", "--train", "t.txt", args[0], args[1]];
            assert!(Cli::try_parse_from(argv).is_err(), "{args:?}");
        }
    }
}
