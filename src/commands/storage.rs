//! Storage command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! client-local persistent preference cache (browser `localStorage`). The
//! cache currently holds a single value, the theme preference, which can
//! disagree with the device's copy until the next config fetch.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on the preference cache
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOperation {
    Read { key: String },
    Write { key: String, value: String },
}

// The output from storage operations (shell tells us what it found)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOutput {
    /// Result of a read; `None` when the key has never been written
    Value(Option<String>),
    /// A write completed
    Done,
}

impl StorageOutput {
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Value(value) => value,
            Self::Done => None,
        }
    }
}

impl Operation for StorageOperation {
    type Output = StorageOutput;
}

/// Command-based storage API
pub struct Storage<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Storage<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read a value from the cache
    pub fn read(key: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(StorageOperation::Read { key: key.into() })
    }

    /// Write a value to the cache, overwriting any previous one
    pub fn write(key: impl Into<String>, value: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(StorageOperation::Write {
            key: key.into(),
            value: value.into(),
        })
    }
}

/// Request builder for storage operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: StorageOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: StorageOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = StorageOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
