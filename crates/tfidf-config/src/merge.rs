//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`. Configs arrive in
//! precedence order (highest first); scalar values from higher-precedence files win.

use std::path::PathBuf;

use crate::{
    Config, ConfigError, DocFrequency, ModelConfig, OutputSettings, StopWordsSpec,
    parse::{RawConfig, RawDocFrequency, RawModelSettings, RawOutputSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// The merged model configuration is not validated here; validation happens when a
/// model is constructed so that CLI overrides are taken into account.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let mut model = ModelConfig::default();
    let mut output = OutputSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.model {
            apply_raw_model(&mut model, raw)?;
        }
        if let Some(ref raw) = parsed.config.output {
            apply_raw_output(&mut output, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Ok(Config {
        model,
        output,
        config_root,
    })
}

/// Converts a raw document-frequency value.
fn doc_frequency(name: &'static str, raw: RawDocFrequency) -> Result<DocFrequency, ConfigError> {
    match raw {
        RawDocFrequency::Count(c) => DocFrequency::from_signed(name, c),
        RawDocFrequency::Fraction(f) => Ok(DocFrequency::Fraction(f)),
    }
}

/// Applies raw model settings to `result`, overwriting any present values.
fn apply_raw_model(result: &mut ModelConfig, raw: &RawModelSettings) -> Result<(), ConfigError> {
    if let Some(ref ops) = raw.ops {
        result.ops = ops.iter().copied().collect();
    }
    if let Some(ref analyzer) = raw.analyzer {
        result.analyzer = analyzer.parse()?;
    }
    if let Some(ref stop_words) = raw.stop_words {
        result.stop_words = Some(StopWordsSpec::try_from(stop_words.clone())?);
    }
    if let Some(range) = raw.ngram_range {
        result.ngram_range = range.into();
    }
    if let Some(v) = raw.min_df {
        result.min_df = doc_frequency("min_df", v)?;
    }
    if let Some(v) = raw.max_df {
        result.max_df = doc_frequency("max_df", v)?;
    }
    if let Some(v) = raw.max_features {
        result.max_features = Some(v);
    }
    if let Some(ref v) = raw.vocabulary {
        result.vocabulary = Some(v.clone());
    }
    if let Some(v) = raw.binary {
        result.binary = v;
    }
    if let Some(ref v) = raw.norm {
        result.norm = v.parse()?;
    }
    if let Some(v) = raw.use_idf {
        result.use_idf = v;
    }
    if let Some(v) = raw.smooth_idf {
        result.smooth_idf = v;
    }
    if let Some(v) = raw.sublinear_tf {
        result.sublinear_tf = v;
    }
    Ok(())
}

/// Applies raw output settings to `result`, overwriting any present values.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(ref dir) = raw.dir {
        result.dir = Some(PathBuf::from(dir));
    }
    if let Some(v) = raw.top_terms {
        result.top_terms = v;
    }
}
