// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use rand::Rng;
use rand::distributions::Alphanumeric;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Generates a random alphanumeric string of the given length using the
/// thread-local RNG.
pub fn alphanumeric(len: usize) -> String {
    alphanumeric_with(&mut rand::thread_rng(), len)
}

/// Same as [`alphanumeric`], but with an explicit RNG for deterministic
/// generation in tests.
pub fn alphanumeric_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Generates a random lowercase hex string of the given length.
pub fn hex_lower(len: usize) -> String {
    const HEX: &[u8] = b"0123456789abcdef";

    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(HEX[rng.gen_range(0..HEX.len())]))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
