//! The wallet currency registry.
//!
//! The registry intersects three sources: the currency definition table,
//! the currencies enabled on the client, and the currencies the server
//! reports as supported. The first two are fixed at [`init`] time; the
//! server side is read on every query.
//!
//! [`init`]: WalletCurrencyRegistry::init

use crate::currency::WalletCurrency;
use crate::definitions::DefinitionTable;
use crate::error::RegistryError;
use crate::server::ServerSettings;
use itertools::Itertools;

/// Options for the support queries.
///
/// The defaults check client support, take the server list from the
/// server settings and use the server's testnet flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportOptions {
    /// Also require the code to be an active client currency.
    pub client_supported: bool,
    /// Codes the server allows. `None` reads them from the server settings.
    pub server_curs: Option<Vec<String>>,
    /// Network override. `None` reads the server's testnet flag.
    pub testnet: Option<bool>,
}

impl Default for SupportOptions {
    fn default() -> Self {
        Self {
            client_supported: true,
            server_curs: None,
            testnet: None,
        }
    }
}

impl SupportOptions {
    /// Check membership in `server_curs` only.
    pub fn server_only<I>(server_curs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            client_supported: false,
            server_curs: Some(server_curs.into_iter().map(Into::into).collect()),
            testnet: None,
        }
    }

    /// Check membership in `server_curs` and among the active client
    /// currencies.
    pub fn client_and_server<I>(server_curs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            client_supported: true,
            ..Self::server_only(server_curs)
        }
    }

    pub fn with_testnet(mut self, testnet: bool) -> Self {
        self.testnet = Some(testnet);
        self
    }
}

/// Active wallet currencies plus the server settings they are checked
/// against.
///
/// A new registry is uninitialized and has no active currencies.
#[derive(Debug)]
pub struct WalletCurrencyRegistry<S> {
    currencies: Vec<WalletCurrency>,
    initialized: bool,
    server: S,
}

impl<S: ServerSettings> WalletCurrencyRegistry<S> {
    /// Create an uninitialized registry reading server settings from `server`.
    pub fn new(server: S) -> Self {
        Self {
            currencies: Vec::new(),
            initialized: false,
            server,
        }
    }

    /// Create a registry and initialize it in one step.
    pub fn with_currencies<I>(
        server: S,
        client_codes: I,
        table: &DefinitionTable,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut registry = Self::new(server);
        registry.init(client_codes, table)?;
        Ok(registry)
    }

    /// Derive the active currencies from the client-enabled codes and the
    /// definition table, replacing any previous state.
    ///
    /// Active currencies are the crypto definitions whose code is enabled on
    /// the client, in client order, without duplicates. Codes with no
    /// definition are skipped. A malformed definition fails the whole call
    /// and leaves the previous state untouched.
    pub fn init<I>(&mut self, client_codes: I, table: &DefinitionTable) -> Result<(), RegistryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if table.is_empty() {
            tracing::warn!("Currency definition table is empty, no wallet currency can be activated");
        }
        let mut currencies = Vec::new();
        for code in client_codes
            .into_iter()
            .map(|code| code.as_ref().to_owned())
            .unique()
        {
            let Some(entry) = table.get(&code) else {
                tracing::warn!("Wallet currency {} has no definition, skipping", code);
                continue;
            };
            if !entry.definition.is_crypto() {
                tracing::debug!(code = %code, "skipping non-crypto wallet currency");
                continue;
            }
            currencies.push(WalletCurrency::from_entry(entry)?);
        }

        tracing::info!(
            "Initialized {} wallet currencies from {} definitions: {}",
            currencies.len(),
            table.len(),
            currencies.iter().map(|c| c.code.as_str()).join(", ")
        );
        self.currencies = currencies;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the server currently runs against the test networks.
    pub fn testnet(&self) -> bool {
        self.server.testnet()
    }

    pub fn active_currencies(&self) -> &[WalletCurrency] {
        &self.currencies
    }

    /// Find an active currency by its exact mainnet code.
    pub fn currency_by_code(&self, code: &str) -> Option<&WalletCurrency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    /// Map a testnet code back to its mainnet code. Anything else is
    /// returned unchanged.
    pub fn ensure_mainnet_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.currencies
            .iter()
            .find(|c| !c.testnet_code.is_empty() && c.testnet_code == code)
            .map_or(code, |c| c.code.as_str())
    }

    /// Codes of the active currencies for the selected network, in registry
    /// order. `testnet` defaults to the server's flag.
    pub fn supported_wallet_currencies(&self, testnet: Option<bool>) -> Vec<&str> {
        let testnet = testnet.unwrap_or_else(|| self.server.testnet());
        self.currencies.iter().map(|c| c.code_for(testnet)).collect()
    }

    /// Whether `code` is allowed by the server and, if requested, also an
    /// active client currency on the selected network.
    pub fn is_supported_wallet_currency(&self, code: &str, options: &SupportOptions) -> bool {
        let testnet = options.testnet.unwrap_or_else(|| self.server.testnet());
        let server_supported = match options
            .server_curs
            .as_deref()
            .or_else(|| self.server.wallet_currencies())
        {
            Some(server_curs) => server_curs.iter().any(|c| c == code),
            None => self.is_client_currency(code, testnet),
        };
        server_supported && (!options.client_supported || self.is_client_currency(code, testnet))
    }

    /// Keep the codes that pass
    /// [`is_supported_wallet_currency`](Self::is_supported_wallet_currency),
    /// in input order.
    pub fn only_supported_wallet_currencies<'c, C>(
        &self,
        codes: &'c [C],
        options: &SupportOptions,
    ) -> Vec<&'c str>
    where
        C: AsRef<str>,
    {
        codes
            .iter()
            .map(|code| code.as_ref())
            .filter(|code| self.is_supported_wallet_currency(code, options))
            .collect()
    }

    /// Whether any of `codes` passes
    /// [`is_supported_wallet_currency`](Self::is_supported_wallet_currency).
    pub fn any_supported_by_wallet<C>(&self, codes: &[C], options: &SupportOptions) -> bool
    where
        C: AsRef<str>,
    {
        codes
            .iter()
            .any(|code| self.is_supported_wallet_currency(code.as_ref(), options))
    }

    // A currency without a testnet code has no entry on the test networks.
    fn is_client_currency(&self, code: &str, testnet: bool) -> bool {
        !code.is_empty() && self.currencies.iter().any(|c| c.code_for(testnet) == code)
    }
}
