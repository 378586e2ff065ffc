//! Library side of the `envflag` binary: argument parsing and flag evaluation,
//! kept apart from `main` so it can be exercised against an in-memory
//! namespace.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use envflag_provider::{EnvVarProvider, ProviderConfig};
use envflag_service::{EvaluationDetails, FeatureFlagService, LoggingHook};
use envflag_types::{FeatureProvider, FlagKind, FlagType, FlagValue};

/// Client name the CLI evaluates under.
pub const CLIENT_NAME: &str = "envflag-cli";

#[derive(Parser, Debug)]
#[command(name = "envflag")]
#[command(about = "Resolve a feature flag from environment variables")]
pub struct Args {
    /// Flag key, e.g. `new-checkout` or `search.v2`
    pub flag: String,

    /// Kind to resolve the flag as (bool, string, float, int, object)
    #[arg(short = 't', long = "type", default_value = "bool")]
    pub kind: FlagKind,

    /// Default returned when the flag is unset or malformed
    #[arg(short, long)]
    pub default: Option<String>,

    /// Prefix prepended to the environment variable name
    #[arg(short, long, env = "ENVFLAG_PREFIX")]
    pub prefix: Option<String>,

    /// Path to an envflag TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print full evaluation details as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Builds the provider config: the config file if given, then `--prefix`.
pub fn provider_config(args: &Args) -> Result<ProviderConfig> {
    let config = match &args.config {
        Some(path) => ProviderConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ProviderConfig::default(),
    };
    Ok(match &args.prefix {
        Some(prefix) => ProviderConfig::new(prefix.as_str()),
        None => config,
    })
}

/// Parses `--default` for `kind`. Without one, the kind's zero value is used.
pub fn default_value(kind: FlagKind, raw: Option<&str>) -> Result<FlagValue> {
    let Some(raw) = raw else {
        return Ok(match kind {
            FlagKind::Boolean => FlagValue::Bool(false),
            FlagKind::String => FlagValue::String(String::new()),
            FlagKind::Float => FlagValue::Float(0.0),
            FlagKind::Integer => FlagValue::Int(0),
            FlagKind::Object => FlagValue::Object(serde_json::Value::Null),
        });
    };
    FlagValue::parse(kind, raw).ok_or_else(|| anyhow!("invalid default {raw:?} for {kind} flag"))
}

/// Evaluates a flag whose kind is only known at runtime.
pub fn evaluate(
    service: &FeatureFlagService,
    flag_key: &str,
    default: FlagValue,
) -> EvaluationDetails<FlagValue> {
    match default {
        FlagValue::Bool(b) => erase(service.get_flag_details(flag_key, b)),
        FlagValue::String(s) => erase(service.get_flag_details(flag_key, s)),
        FlagValue::Float(x) => erase(service.get_flag_details(flag_key, x)),
        FlagValue::Int(i) => erase(service.get_flag_details(flag_key, i)),
        FlagValue::Object(v) => erase(service.get_flag_details(flag_key, v)),
    }
}

fn erase<T: FlagType>(details: EvaluationDetails<T>) -> EvaluationDetails<FlagValue> {
    EvaluationDetails {
        flag_key: details.flag_key,
        value: details.value.into_flag_value(),
        variant: details.variant,
        reason: details.reason,
        fallback: details.fallback,
        error_message: details.error_message,
    }
}

/// Resolves the flag named in `args` against `provider` and renders the output.
pub fn run_with(args: &Args, provider: Arc<dyn FeatureProvider>) -> Result<String> {
    let default = default_value(args.kind, args.default.as_deref())?;
    let mut service = FeatureFlagService::new(CLIENT_NAME, provider)
        .context("failed to set up flag service")?;
    if args.verbose {
        service.client_mut().add_hook(Arc::new(LoggingHook));
    }

    let details = evaluate(&service, &args.flag, default);
    if args.json {
        Ok(serde_json::to_string_pretty(&details)?)
    } else {
        Ok(details.value.to_string())
    }
}

/// Resolves the flag named in `args` against the process environment.
pub fn run(args: &Args) -> Result<String> {
    let config = provider_config(args)?;
    run_with(args, Arc::new(EnvVarProvider::from_config(config)))
}
