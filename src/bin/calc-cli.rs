//! Command-line front end for the calculation service.
//!
//! Validates that both operands are present, asks the remote service when a
//! base URL is configured, and falls back to the local engine when the
//! service cannot answer. Configuration comes from the same file and `CALC_*`
//! variables the server reads; flags given on the command line win.

use std::process::ExitCode;

use calc_engine::client::CalculatorClient;
use calc_engine::config::{AppConfig, ConfigLoader};
use calc_engine::error::EngineResult;
use calc_engine::models::{Calculation, CalculationInput, Operator};
use calc_engine::telemetry::{CLI_FILTER, init_tracing};
use clap::Parser;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "calc-cli", about = "Calculate `a <operator> b`", version)]
struct Cli {
    /// First operand.
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    a: Option<String>,

    /// Second operand.
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    b: Option<String>,

    /// One of + - * / ^. Other symbols produce NaN.
    #[arg(short = 'o', long, default_value = "+", allow_hyphen_values = true)]
    operator: String,

    /// Base URL of the calculation service. Overrides `CALC_API_URL`.
    #[arg(long)]
    api_url: Option<Url>,

    /// Remote request timeout in milliseconds. Overrides `CALC_TIMEOUT_MS`.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Basic-auth user name. Overrides `CALC_USERNAME`.
    #[arg(long)]
    username: Option<String>,

    /// Basic-auth password. Overrides `CALC_PASSWORD`.
    #[arg(long)]
    password: Option<String>,
}

impl Cli {
    /// Applies the flags that were passed on top of `config`.
    fn apply_flags(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.api_url {
            config.remote.base_url = Some(url.clone());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.remote.timeout_ms = timeout_ms;
        }
        if let Some(username) = &self.username {
            config.auth.username = username.clone();
        }
        if let Some(password) = &self.password {
            config.auth.password = password.clone();
        }
        config
    }

    fn resolve_config(&self, base: AppConfig) -> EngineResult<AppConfig> {
        ConfigLoader::from_config(self.apply_flags(base)).map(ConfigLoader::into_config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing(CLI_FILTER);
    let cli = Cli::parse();

    let input = match CalculationInput::parse(cli.a.as_deref(), cli.b.as_deref(), &cli.operator) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    let client = match ConfigLoader::discover()
        .and_then(|loader| cli.resolve_config(loader.into_config()))
        .map_err(|e| e.to_string())
        .and_then(|config| CalculatorClient::from_config(&config).map_err(|e| e.to_string()))
    {
        Ok(client) => client,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = client.calculate(&input).await;
    println!("{}", render(&input, &result));
    ExitCode::SUCCESS
}

fn render(input: &CalculationInput, result: &Calculation) -> String {
    let value = if result.is_nan() {
        "NaN".to_string()
    } else {
        result.value.to_string()
    };
    let note = match &input.operator {
        Operator::Unknown(symbol) => format!(" (unsupported operator '{}')", symbol),
        _ => String::new(),
    };
    format!(
        "{} {} {} = {} [{}]{}",
        input.a, input.operator, input.b, value, result.source, note
    )
}
