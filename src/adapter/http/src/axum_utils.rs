// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves one or more components from the request catalog:
/// ```ignore
/// let (nonce_service, auth_service) = from_catalog_n!(
///     catalog,
///     dyn NonceService,
///     dyn WalletAuthService
/// );
/// ```
macro_rules! from_catalog_n {
    ($catalog:expr, $($T:ty),+ $(,)?) => {
        ( $( $catalog.get_one::<$T>().unwrap() ),+ )
    };
}

pub(crate) use from_catalog_n;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
