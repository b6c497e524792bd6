//! Wallet connection sequence run from the landing screen.

use tracing::{info, warn};
use url::Url;

use crate::wallet::{AddChainParams, BASE_CHAIN_ID, WalletError, WalletProvider};

/// Address shown when running without a real wallet.
pub const DEMO_ADDRESS: &str = "0x1234...5678 (Demo Mode)";

/// Hosts that serve previews of the app and never have a wallet attached.
const PREVIEW_HOSTS: [&str; 2] = ["vusercontent.net", "v0.app"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    pub preview: bool,
}

impl Environment {
    pub fn detect(app_url: &str, force_demo: bool) -> Self {
        Self {
            preview: force_demo || is_preview_host(app_url),
        }
    }
}

/// Whether `app_url` points at a preview deployment.
pub fn is_preview_host(app_url: &str) -> bool {
    let Some(host) = Url::parse(app_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
    else {
        return false;
    };
    PREVIEW_HOSTS.iter().any(|preview| host.contains(preview))
}

/// A successfully connected wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub address: String,
    pub demo: bool,
}

/// Exposes an account and points the wallet at Base.
///
/// In a preview environment no wallet call is made and a placeholder
/// address is returned. A wallet that does not know Base is asked to add it.
/// Any other failure to switch networks is logged and the flow continues on
/// whatever network the wallet is using.
pub async fn connect_wallet(
    provider: Option<&dyn WalletProvider>,
    env: Environment,
) -> Result<Connection, WalletError> {
    if env.preview {
        info!("preview environment, skipping wallet connection");
        return Ok(Connection {
            address: DEMO_ADDRESS.to_string(),
            demo: true,
        });
    }

    let provider = provider.ok_or(WalletError::NoProvider)?;

    let accounts = provider.request_accounts().await?;
    let address = accounts.into_iter().next().ok_or(WalletError::NoAccount)?;

    match provider.switch_chain(BASE_CHAIN_ID).await.map_err(WalletError::from) {
        Ok(()) => {}
        Err(WalletError::UnrecognizedChain) => {
            info!(chain = %BASE_CHAIN_ID, "wallet does not know Base, adding it");
            provider.add_chain(&AddChainParams::base()).await?;
        }
        Err(e) => warn!(error = %e, "could not switch network, continuing"),
    }

    info!(%address, "wallet connected");
    Ok(Connection {
        address,
        demo: false,
    })
}
