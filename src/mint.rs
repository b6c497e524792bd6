//! The cosmetic "mint": a burn transfer followed by a share to the clipboard.

use tracing::{info, warn};

use crate::clipboard::Clipboard;
use crate::models::PersonalityBand;
use crate::results::share_text;
use crate::wallet::{TransactionRequest, WalletError, WalletProvider};

/// What a successful mint produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    pub tx_hash: String,
    pub share_text: String,
    pub copied: bool,
}

/// Sends the fixed burn transaction from the first connected account.
pub async fn send_mint(provider: Option<&dyn WalletProvider>) -> Result<String, WalletError> {
    let provider = provider.ok_or(WalletError::NoProvider)?;

    let accounts = provider.accounts().await?;
    let from = accounts.into_iter().next().ok_or(WalletError::NoAccount)?;

    let tx = TransactionRequest::burn(from);
    let hash = provider.send_transaction(&tx).await?;
    info!(%hash, from = %tx.from, "mint transaction sent");
    Ok(hash)
}

/// Copies the share text for an accepted mint. A clipboard failure does not
/// undo the mint; it is only reported through `copied`.
pub fn share(
    clipboard: &dyn Clipboard,
    tx_hash: String,
    band: &PersonalityBand,
    score: u32,
    app_url: &str,
) -> MintReceipt {
    let text = share_text(band, score, app_url);
    let copied = match clipboard.copy(&text) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "could not copy share text");
            false
        }
    };

    MintReceipt {
        tx_hash,
        share_text: text,
        copied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::results::resolve;
    use crate::wallet::fake::{Call, FakeProvider};
    use crate::wallet::{BURN_ADDRESS, MINT_GAS_LIMIT, MINT_VALUE_WEI};

    /// Burn transaction plus share, the way the app runs them back to back.
    async fn mint_and_share(
        provider: Option<&dyn WalletProvider>,
        clipboard: &dyn Clipboard,
        band: &PersonalityBand,
        score: u32,
        app_url: &str,
    ) -> Result<MintReceipt, WalletError> {
        let hash = send_mint(provider).await?;
        Ok(share(clipboard, hash, band, score, app_url))
    }

    #[tokio::test]
    async fn test_mint_without_provider() {
        let clipboard = MemoryClipboard::default();
        let result = mint_and_share(None, &clipboard, resolve(12), 12, "https://q.example").await;

        assert_eq!(result, Err(WalletError::NoProvider));
        assert!(clipboard.contents().is_none());
    }

    #[tokio::test]
    async fn test_mint_without_account() {
        let mut fake = FakeProvider::approving();
        fake.accounts = Ok(Vec::new());
        let clipboard = MemoryClipboard::default();

        let result =
            mint_and_share(Some(&fake), &clipboard, resolve(12), 12, "https://q.example").await;

        assert_eq!(result, Err(WalletError::NoAccount));
        assert_eq!(fake.calls(), vec![Call::Accounts]);
        assert!(clipboard.contents().is_none());
    }

    #[tokio::test]
    async fn test_mint_sends_burn_and_copies_share_text() {
        let fake = FakeProvider::approving();
        let clipboard = MemoryClipboard::default();

        let receipt = mint_and_share(Some(&fake), &clipboard, resolve(24), 24, "https://q.example")
            .await
            .unwrap();

        assert_eq!(receipt.tx_hash, "0xfeed");
        assert!(receipt.copied);
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("I'm a Gas Guzzler 🔥 on Base! Score: 24/40. Discover your personality: https://q.example")
        );
        assert_eq!(
            fake.calls(),
            vec![
                Call::Accounts,
                Call::SendTransaction(TransactionRequest {
                    from: "0xa11ce".to_string(),
                    to: BURN_ADDRESS.to_string(),
                    value: MINT_VALUE_WEI.to_string(),
                    gas: MINT_GAS_LIMIT.to_string(),
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_mint_copies_nothing() {
        let mut fake = FakeProvider::approving();
        fake.send_transaction = Err(FakeProvider::rpc_error(4001, "User denied transaction"));
        let clipboard = MemoryClipboard::default();

        let result =
            mint_and_share(Some(&fake), &clipboard, resolve(24), 24, "https://q.example").await;

        assert_eq!(result, Err(WalletError::UserRejected));
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn test_clipboard_failure_keeps_receipt() {
        let clipboard = MemoryClipboard::failing();
        let receipt = share(&clipboard, "0xfeed".to_string(), resolve(5), 5, "https://q.example");

        assert_eq!(receipt.tx_hash, "0xfeed");
        assert!(!receipt.copied);
        assert!(receipt.share_text.starts_with("I'm a Shadow Holder"));
    }
}
