//! Bulk asynchronous aggregation over a sequence of pending computations

use futures_util::future::{try_join_all, TryFuture};

use crate::error::SeqError;
use crate::list::SeqList;
use crate::sequence::Sequence;
use crate::terminal;

/// Await every pending computation in `source` concurrently.
///
/// The input is materialized once, copying the handle of every pending
/// computation before any of them is awaited; cloneable handles such as
/// `futures::future::Shared` fit here. Resolves with the results in source
/// order, or with the first failure. An absent or empty source resolves
/// immediately to an empty list.
///
/// # Examples
/// ```
/// use futures::future::{ready, FutureExt};
/// use nonnull_seq::{from_values, when_all, SeqError};
///
/// # futures::executor::block_on(async {
/// let pending = from_values(vec![
///     ready(Ok::<_, SeqError>(1)).shared(),
///     ready(Ok::<_, SeqError>(2)).shared(),
/// ]);
/// let resolved = when_all(&pending).await.unwrap();
/// assert_eq!(resolved, vec![1, 2]);
/// # });
/// ```
pub async fn when_all<S, Fut>(source: S) -> Result<SeqList<Fut::Ok>, Fut::Error>
where
    S: Sequence<Item = Fut>,
    Fut: TryFuture + Clone,
    Fut::Error: From<SeqError>,
{
    let pending = terminal::to_list(&source).map_err(Fut::Error::from)?;
    if pending.is_empty() {
        return Ok(SeqList::new());
    }

    log::debug!("Awaiting {} pending computations", pending.len());
    let resolved = try_join_all(pending.into_vec()).await?;
    log::debug!("All {} pending computations resolved", resolved.len());
    Ok(SeqList::from(resolved))
}

/// Blocking variant of [`when_all`]: drives it to completion on the calling
/// thread.
pub fn when_all_blocking<S, Fut>(source: S) -> Result<SeqList<Fut::Ok>, Fut::Error>
where
    S: Sequence<Item = Fut>,
    Fut: TryFuture + Clone,
    Fut::Error: From<SeqError>,
{
    futures::executor::block_on(when_all(source))
}
