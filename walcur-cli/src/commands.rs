//! Subcommands and their output.

use clap::Subcommand;
use serde::Serialize;
use walcur_core::{ServerSettings, SupportOptions, WalletCurrency, WalletCurrencyRegistry};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the active wallet currencies
    List,
    /// Show a single active wallet currency
    Lookup { code: String },
    /// Print the supported codes for the current network
    Supported,
    /// Keep only the supported codes, in input order
    Filter {
        codes: Vec<String>,
        /// Only check the server list, not client support
        #[arg(long)]
        server_only: bool,
    },
    /// Exit successfully if any of the codes is supported
    Any {
        codes: Vec<String>,
        /// Only check the server list, not client support
        #[arg(long)]
        server_only: bool,
    },
    /// Print a block explorer URL
    Explorer {
        code: String,
        #[arg(long, conflicts_with = "tx", required_unless_present = "tx")]
        address: Option<String>,
        #[arg(long)]
        tx: Option<String>,
    },
    /// Check an address against the currency's validator
    Validate { code: String, address: String },
}

/// What a command produced.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// JSON view of an active currency.
#[derive(Debug, Serialize)]
struct CurrencyView<'a> {
    code: &'a str,
    testnet_code: &'a str,
    name: &'a str,
    coin_divisibility: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    need_coin_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_time_ms: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fee_bump_transaction_size: Option<u32>,
    average_moderated_transaction_size: u32,
    supports_escrow_timeout: bool,
    validates_addresses: bool,
}

impl<'a> From<&'a WalletCurrency> for CurrencyView<'a> {
    fn from(c: &'a WalletCurrency) -> Self {
        Self {
            code: &c.code,
            testnet_code: &c.testnet_code,
            name: &c.name,
            coin_divisibility: c.coin_divisibility,
            symbol: c.symbol.as_deref(),
            icon: c.icon.as_deref(),
            need_coin_link: c.need_coin_link.as_deref(),
            block_time_ms: c.block_time.map(|t| t.as_millis()),
            fee_bump_transaction_size: c.fee_bump_transaction_size.map(|s| s.get()),
            average_moderated_transaction_size: c.average_moderated_transaction_size.get(),
            supports_escrow_timeout: c.supports_escrow_timeout,
            validates_addresses: c.has_address_validator(),
        }
    }
}

fn support_options(server_only: bool) -> SupportOptions {
    SupportOptions {
        client_supported: !server_only,
        ..SupportOptions::default()
    }
}

fn describe(c: &WalletCurrency, testnet: bool) -> String {
    format!(
        "{}\t{}\tdivisibility={}",
        c.code_for(testnet),
        c.name,
        c.coin_divisibility
    )
}

fn lines<I: IntoIterator<Item = S>, S: AsRef<str>>(items: I) -> String {
    items
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run a command against the registry.
pub fn run<S: ServerSettings>(
    command: &Command,
    registry: &WalletCurrencyRegistry<S>,
    json: bool,
) -> anyhow::Result<Outcome> {
    let testnet = registry.testnet();
    let outcome = match command {
        Command::List => {
            let currencies = registry.active_currencies();
            if json {
                let views: Vec<CurrencyView> = currencies.iter().map(Into::into).collect();
                Outcome::ok(serde_json::to_string_pretty(&views)?)
            } else {
                Outcome::ok(lines(currencies.iter().map(|c| describe(c, testnet))))
            }
        }
        Command::Lookup { code } => match registry.currency_by_code(registry.ensure_mainnet_code(code)) {
            Some(c) if json => Outcome::ok(serde_json::to_string_pretty(&CurrencyView::from(c))?),
            Some(c) => Outcome::ok(describe(c, testnet)),
            None => Outcome {
                output: format!("{code} is not an active wallet currency"),
                success: false,
            },
        },
        Command::Supported => {
            let codes = registry.supported_wallet_currencies(None);
            if json {
                Outcome::ok(serde_json::to_string(&codes)?)
            } else {
                Outcome::ok(lines(codes))
            }
        }
        Command::Filter { codes, server_only } => {
            let kept = registry.only_supported_wallet_currencies(codes, &support_options(*server_only));
            if json {
                Outcome::ok(serde_json::to_string(&kept)?)
            } else {
                Outcome::ok(lines(kept))
            }
        }
        Command::Any { codes, server_only } => {
            let any = registry.any_supported_by_wallet(codes, &support_options(*server_only));
            Outcome {
                output: any.to_string(),
                success: any,
            }
        }
        Command::Explorer { code, address, tx } => {
            let Some(c) = registry.currency_by_code(registry.ensure_mainnet_code(code)) else {
                anyhow::bail!("{code} is not an active wallet currency");
            };
            let url = match (address, tx) {
                (Some(address), _) => c.block_chain_address_url(address, testnet)?,
                (None, Some(tx)) => c.block_chain_tx_url(tx, testnet)?,
                (None, None) => anyhow::bail!("either --address or --tx is required"),
            };
            Outcome::ok(url.to_string())
        }
        Command::Validate { code, address } => {
            let Some(c) = registry.currency_by_code(registry.ensure_mainnet_code(code)) else {
                anyhow::bail!("{code} is not an active wallet currency");
            };
            match c.address_validity(address, testnet) {
                Some(true) => Outcome::ok("valid".to_string()),
                Some(false) => Outcome {
                    output: "invalid".to_string(),
                    success: false,
                },
                None => Outcome {
                    output: "undetermined".to_string(),
                    success: false,
                },
            }
        }
    };
    Ok(outcome)
}
