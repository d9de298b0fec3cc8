// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub WalletAuthService {}

    #[async_trait::async_trait]
    impl WalletAuthService for WalletAuthService {
        async fn verify(
            &self,
            payload: &WalletAuthPayload,
            expected_nonce: &AuthNonce,
        ) -> Result<WalletAddress, WalletAuthError>;
    }
}

impl MockWalletAuthService {
    pub fn verifying_as(address: WalletAddress) -> Self {
        let mut mock = Self::new();
        mock.expect_verify()
            .returning(move |_, _| Ok(address.clone()));
        mock
    }

    pub fn rejecting_with_nonce_mismatch() -> Self {
        let mut mock = Self::new();
        mock.expect_verify()
            .returning(|_, _| Err(WalletAuthError::NonceMismatch));
        mock
    }

    pub fn rejecting_with_invalid_signature() -> Self {
        let mut mock = Self::new();
        mock.expect_verify()
            .returning(|_, _| Err(WalletAuthError::InvalidSignature));
        mock
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub WalletProvider {}

    #[async_trait::async_trait]
    impl WalletProvider for WalletProvider {
        fn is_installed(&self) -> bool;

        async fn wallet_auth(
            &self,
            request: WalletAuthRequest,
        ) -> Result<WalletAuthPayload, WalletCommandError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub NonceService {}

    impl NonceService for NonceService {
        fn issue_nonce(&self) -> AuthNonce;
    }
}

impl MockNonceService {
    pub fn issuing(nonce: AuthNonce) -> Self {
        let mut mock = Self::new();
        mock.expect_issue_nonce().returning(move || nonce.clone());
        mock
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
