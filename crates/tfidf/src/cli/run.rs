//! Execution of a `tfidf` run: configure, train, infer, export, report.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use ndarray::{Array2, Axis};
use tfidf_config::Config;
use tfidf_model::{TfIdfModel, closeness};
use tracing::{debug, info};

use super::{
    args::Cli,
    corpus::read_corpus,
    error::CliError,
    export::save_matrix,
    report::{MatrixShape, RunSummary, top_terms_table},
};

/// File name of the training matrix.
const TRAIN_FILE: &str = "train.csv";
/// File name of the validation matrix.
const VALID_FILE: &str = "valid.csv";
/// File name of the training document closeness matrix.
const CLOSENESS_FILE: &str = "train_closeness.csv";
/// File name of the training term closeness matrix.
const TERM_CLOSENESS_FILE: &str = "train_term_closeness.csv";

/// Matrices produced by a run.
struct Results {
    /// Weighted training corpus.
    train: Array2<f64>,
    /// Source line of each training row.
    train_lines: Vec<String>,
    /// Weighted validation corpus and its source lines, if one was given.
    valid: Option<(Array2<f64>, Vec<String>)>,
    /// Feature names in column order.
    features: Vec<String>,
    /// Number of pruned terms.
    pruned: usize,
}

/// Runs the command described by `cli`.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let cwd = env::current_dir().map_err(CliError::CurrentDir)?;
    let config = load_config(cli, &cwd)?;

    let mut model_config = config.model.clone();
    cli.apply(&mut model_config);
    debug!(
        ops = %model_config.ops,
        analyzer = %model_config.analyzer,
        "resolved model configuration"
    );

    let mut model = TfIdfModel::new(model_config)?;
    let results = fit(&mut model, cli)?;

    let written = match output_dir(cli, &config, &cwd) {
        Some(dir) => write_results(&dir, &results, cli.visualize)?,
        None => Vec::new(),
    };
    let top_n = cli.top_terms.unwrap_or(config.output.top_terms);

    if cli.json {
        let summary = RunSummary {
            ops: model.ops().iter().map(|op| op.to_string()).collect(),
            train: MatrixShape::from(&results.train),
            valid: results.valid.as_ref().map(|(valid, _)| MatrixShape::from(valid)),
            features: results.features,
            pruned: results.pruned,
            written,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "train: {} documents, {} features ({} pruned)",
        results.train.nrows(),
        results.train.ncols(),
        results.pruned
    );
    if let Some((ref valid, _)) = results.valid {
        println!("valid: {} documents", valid.nrows());
    }
    for path in &written {
        println!("wrote {}", path.display());
    }
    if cli.visualize {
        println!("{}", top_terms_table(&results.train, &results.features, top_n));
    }
    Ok(())
}

/// Loads the explicit config file, or discovers `.tfidf.toml` files from `cwd`.
fn load_config(cli: &Cli, cwd: &Path) -> Result<Config, CliError> {
    let config = match cli.config {
        Some(ref path) => Config::load_from_files(&[cwd.join(path)])?,
        None => Config::load(cwd)?,
    };
    Ok(config)
}

/// Resolves the output directory: the flag relative to `cwd`, otherwise the configured
/// directory relative to the file that set it.
fn output_dir(cli: &Cli, config: &Config, cwd: &Path) -> Option<PathBuf> {
    if let Some(ref dir) = cli.output {
        return Some(cwd.join(dir));
    }
    let base = config.config_root.as_deref().unwrap_or(cwd);
    config.output.dir.as_ref().map(|dir| base.join(dir))
}

/// Trains on the training corpus and transforms the validation corpus.
fn fit(model: &mut TfIdfModel, cli: &Cli) -> Result<Results, CliError> {
    let train_corpus = read_corpus(&cli.train)?;
    let train = model.train(&train_corpus.documents)?;

    let valid = match cli.valid {
        Some(ref path) => {
            let corpus = read_corpus(path)?;
            Some((model.infer(&corpus.documents)?, corpus.line_labels()))
        }
        None => None,
    };

    Ok(Results {
        train,
        train_lines: train_corpus.line_labels(),
        valid,
        features: model.feature_names()?.to_vec(),
        pruned: model.pruned_terms()?.len(),
    })
}

/// Writes the result matrices into `dir`, returning the paths written.
///
/// Document rows are labelled with their source line numbers.
fn write_results(
    dir: &Path,
    results: &Results,
    visualize: bool,
) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(dir).map_err(|source| CliError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    let train_path = dir.join(TRAIN_FILE);
    let lines = results.train_lines.as_slice();
    save_matrix(&train_path, &results.train, Some(lines), &results.features)?;
    written.push(train_path);

    if let Some((ref valid, ref valid_lines)) = results.valid {
        let valid_path = dir.join(VALID_FILE);
        save_matrix(&valid_path, valid, Some(valid_lines.as_slice()), &results.features)?;
        written.push(valid_path);
    }

    if visualize {
        let docs = closeness(&results.train, Axis(0));
        let docs_path = dir.join(CLOSENESS_FILE);
        save_matrix(&docs_path, &docs, Some(lines), lines)?;
        written.push(docs_path);

        let terms = closeness(&results.train, Axis(1));
        let terms_path = dir.join(TERM_CLOSENESS_FILE);
        let features = results.features.as_slice();
        save_matrix(&terms_path, &terms, Some(features), features)?;
        written.push(terms_path);
    }

    info!(dir = %dir.display(), files = written.len(), "wrote results");
    Ok(written)
}
