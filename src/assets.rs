//! Sprite assets
//!
//! Images are loaded by the platform layer. The core only needs their sizes,
//! and needs to know when every one of them has finished loading.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{LocalBoxFuture, Shared, try_join_all};
use futures::{FutureExt, TryFutureExt};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::sim::Size;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    Background,
    Ocean,
    Spawner,
    Catcher,
    Falling,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Asset::Background,
        Asset::Ocean,
        Asset::Spawner,
        Asset::Catcher,
        Asset::Falling,
    ];

    /// Image path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Background => "imgs/bg.png",
            Asset::Ocean => "imgs/ocean.png",
            Asset::Spawner => "imgs/airplane.png",
            Asset::Catcher => "imgs/boat.png",
            Asset::Falling => "imgs/parachutist.png",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Read-only size lookup for loaded assets
pub trait AssetCatalog {
    fn size(&self, asset: Asset) -> Size;
}

/// Concrete size table, indexed by `Asset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSizes {
    sizes: [Size; 5],
}

impl Default for AssetSizes {
    /// Sizes of the bundled artwork
    fn default() -> Self {
        let mut sizes = Self::new();
        sizes.set(Asset::Background, Size::new(800.0, 300.0));
        sizes.set(Asset::Ocean, Size::new(800.0, 420.0));
        sizes.set(Asset::Spawner, Size::new(90.0, 40.0));
        sizes.set(Asset::Catcher, Size::new(64.0, 100.0));
        sizes.set(Asset::Falling, Size::new(30.0, 30.0));
        sizes
    }
}

impl AssetSizes {
    /// All sizes zero until set
    pub fn new() -> Self {
        Self {
            sizes: [Size::default(); 5],
        }
    }

    pub fn set(&mut self, asset: Asset, size: Size) {
        self.sizes[asset.index()] = size;
    }
}

impl AssetCatalog for AssetSizes {
    fn size(&self, asset: Asset) -> Size {
        self.sizes[asset.index()]
    }
}

/// One-shot load report for a single asset
///
/// Clones share the sender, so the `onload` and `onerror` callbacks can each
/// hold one. The first report wins; later ones are ignored.
#[derive(Debug, Clone)]
pub struct LoadSignal {
    asset: Asset,
    sender: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
}

impl LoadSignal {
    pub fn asset(&self) -> Asset {
        self.asset
    }

    pub fn loaded(&self) {
        self.report(true);
    }

    pub fn failed(&self) {
        self.report(false);
    }

    fn report(&self, ok: bool) {
        if let Some(sender) = self.sender.borrow_mut().take() {
            let _ = sender.send(ok);
        }
    }
}

/// Joins the load reports of every tracked asset
///
/// Resolves once all assets have loaded, or with the first failure. Clones
/// share the join, and every waiter is woken when it completes.
#[derive(Clone)]
pub struct LoadBarrier {
    ready: Shared<LocalBoxFuture<'static, std::result::Result<(), Asset>>>,
}

impl LoadBarrier {
    /// Build a barrier over `assets`, with one signal per asset in order
    pub fn track(assets: &[Asset]) -> (Self, Vec<LoadSignal>) {
        let mut signals = Vec::with_capacity(assets.len());
        let mut pending = Vec::with_capacity(assets.len());

        for &asset in assets {
            let (sender, receiver) = oneshot::channel();
            signals.push(LoadSignal {
                asset,
                sender: Rc::new(RefCell::new(Some(sender))),
            });
            pending.push(async move {
                match receiver.await {
                    Ok(true) => {
                        log::debug!("Loaded {}", asset.path());
                        Ok(())
                    }
                    // A dropped signal never reports, which counts as a failure
                    Ok(false) | Err(_) => Err(asset),
                }
            });
        }

        let ready = try_join_all(pending).map_ok(|_| ()).boxed_local().shared();
        (Self { ready }, signals)
    }

    /// Future resolving once every asset has loaded
    pub fn wait(&self) -> impl Future<Output = Result<()>> + 'static {
        let ready = self.ready.clone();
        async move {
            ready
                .await
                .map_err(|asset| GameError::AssetLoad(asset.path()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::task::{ArcWake, waker};
    use std::pin::pin;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::{Context, Poll};

    #[derive(Default)]
    struct WakeCount(AtomicUsize);

    impl ArcWake for WakeCount {
        fn wake_by_ref(arc_self: &Arc<Self>) {
            arc_self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl WakeCount {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_asset_paths_unique() {
        let mut paths: Vec<&str> = Asset::ALL.iter().map(|a| a.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Asset::ALL.len());
    }

    #[test]
    fn test_sizes_lookup() {
        let mut sizes = AssetSizes::new();
        assert_eq!(sizes.size(Asset::Catcher), Size::default());
        sizes.set(Asset::Catcher, Size::new(65.0, 20.0));
        assert_eq!(sizes.size(Asset::Catcher), Size::new(65.0, 20.0));
        assert_eq!(sizes.size(Asset::Falling), Size::default());
    }

    #[test]
    fn test_barrier_resolves_after_all_loads() {
        let (barrier, signals) = LoadBarrier::track(&Asset::ALL);
        assert_eq!(signals.len(), Asset::ALL.len());
        let mut ready = pin!(barrier.wait());

        for signal in &signals[..signals.len() - 1] {
            signal.loaded();
            assert!(ready.as_mut().now_or_never().is_none());
        }
        signals[signals.len() - 1].loaded();
        assert!(matches!(ready.now_or_never(), Some(Ok(()))));
    }

    #[test]
    fn test_every_waiter_is_woken() {
        let (barrier, signals) = LoadBarrier::track(&[Asset::Catcher]);
        let first_count = Arc::new(WakeCount::default());
        let second_count = Arc::new(WakeCount::default());
        let first_waker = waker(first_count.clone());
        let second_waker = waker(second_count.clone());
        let mut first = pin!(barrier.wait());
        let mut second = pin!(barrier.clone().wait());

        assert!(first.as_mut().poll(&mut Context::from_waker(&first_waker)).is_pending());
        assert!(second.as_mut().poll(&mut Context::from_waker(&second_waker)).is_pending());

        signals[0].loaded();
        assert!(first_count.get() >= 1);
        assert!(second_count.get() >= 1);
        assert!(matches!(
            first.poll(&mut Context::from_waker(&first_waker)),
            Poll::Ready(Ok(()))
        ));
        assert!(matches!(
            second.poll(&mut Context::from_waker(&second_waker)),
            Poll::Ready(Ok(()))
        ));
    }

    #[test]
    fn test_failed_load_aborts() {
        let (barrier, signals) = LoadBarrier::track(&Asset::ALL);
        signals[0].loaded();
        signals[1].failed();
        // The rest never report; the failure still ends the wait
        let err = block_on(barrier.wait()).unwrap_err();
        assert!(matches!(err, GameError::AssetLoad("imgs/ocean.png")));
    }

    #[test]
    fn test_first_report_wins() {
        let (barrier, signals) = LoadBarrier::track(&[Asset::Falling]);
        let onerror = signals[0].clone();
        signals[0].loaded();
        onerror.failed();
        assert!(block_on(barrier.wait()).is_ok());
    }

    #[test]
    fn test_dropped_signal_fails() {
        let (barrier, signals) = LoadBarrier::track(&[Asset::Spawner]);
        drop(signals);
        let err = block_on(barrier.wait()).unwrap_err();
        assert!(matches!(err, GameError::AssetLoad("imgs/airplane.png")));
    }

    #[test]
    fn test_empty_barrier_is_ready() {
        let (barrier, _) = LoadBarrier::track(&[]);
        assert!(block_on(barrier.wait()).is_ok());
    }
}
