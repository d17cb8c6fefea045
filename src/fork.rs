//! Fork-join capability: run two units of work concurrently, wait for both.
//!
//! The driver is generic over this trait and never sees which backend runs
//! its halves. All backends propagate a panic from either unit to the caller.

/// Run two independent closures concurrently and block until both complete.
pub trait ForkJoin: Sync {
    fn fork<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;
}

/// Work-stealing pool backend (`rayon::join`).
#[derive(Clone, Copy, Debug, Default)]
pub struct RayonPool;

impl ForkJoin for RayonPool {
    fn fork<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(a, b)
    }
}

/// One scoped OS thread per fork; the caller runs the second unit itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsThreads;

impl ForkJoin for OsThreads {
    fn fork<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        std::thread::scope(|scope| {
            let left = scope.spawn(a);
            let rb = b();
            let ra = match left.join() {
                Ok(v) => v,
                Err(payload) => std::panic::resume_unwind(payload),
            };
            (ra, rb)
        })
    }
}

/// No concurrency: both units run on the calling thread, in order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl ForkJoin for Sequential {
    fn fork<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        (a(), b())
    }
}
