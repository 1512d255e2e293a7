// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Running read-only calls with bounded parallelism.

use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;

/// Runs at most `max_concurrent` tasks at once and collects the results into
/// a `Vec` in input order, regardless of completion order.
///
/// Tasks are pulled from the iterator only as slots free up, so the iterator
/// may be long. Short-circuits on the first `Err`, propagating it to the
/// caller.
pub async fn run_with_concurrency_collect<F, T, E>(
    max_concurrent: usize,
    tasks: impl IntoIterator<Item = F>,
) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    stream::iter(tasks)
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await
}
