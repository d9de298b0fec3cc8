// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Wraps a lower-level failure that the current layer cannot recover from.
/// The original cause is preserved as the error source for logging, while
/// callers only ever see the opaque "Internal error" message.
#[derive(Error, Debug)]
#[error("Internal error")]
pub struct InternalError {
    #[source]
    source: BoxedError,
}

impl InternalError {
    pub fn new<E: Into<BoxedError>>(e: E) -> Self {
        Self { source: e.into() }
    }

    pub fn reason(reason: impl Into<String>) -> Self {
        Self::new(InternalErrorBail::new(reason))
    }

    pub fn bail<T>(reason: impl Into<String>) -> Result<T, Self> {
        Err(Self::reason(reason))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Error: {reason}")]
struct InternalErrorBail {
    reason: String,
}

impl InternalErrorBail {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait ErrorIntoInternal {
    fn int_err(self) -> InternalError;
}

impl<E> ErrorIntoInternal for E
where
    E: Into<BoxedError>,
{
    fn int_err(self) -> InternalError {
        InternalError::new(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait ResultIntoInternal<OK> {
    fn int_err(self) -> Result<OK, InternalError>;
}

impl<OK, E> ResultIntoInternal<OK> for Result<OK, E>
where
    E: Into<BoxedError>,
{
    fn int_err(self) -> Result<OK, InternalError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(e.int_err()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
