//! Staged sort task: validate, prepare, execute, finalize.
//!
//! Each stage returns an explicit `Result` checked at the stage boundary; the
//! hot sorting loop itself is infallible. The buffer roles follow the engine
//! contract: the input is copied into an owned working buffer (`primary`) and
//! the caller's output slice doubles as the scratch buffer, so at most one
//! final copy is ever needed.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;

use crate::driver::{BufferId, leaf_len, sort_range};
use crate::fork::{ForkJoin, OsThreads, RayonPool, Sequential};

/// Errors surfaced at stage boundaries.
#[derive(Debug, Error)]
pub enum SortError {
    /// Input and output lengths differ; nothing was executed.
    #[error("output length {output} does not match input length {input}")]
    SizeMismatch { input: usize, output: usize },
    /// Staged API misuse or bad caller-supplied argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The working or scratch buffer could not be allocated.
    #[error("failed to allocate sort buffers for {elements} elements")]
    Allocation { elements: usize },
    /// A forked unit of work failed. Fatal; the engine never retries.
    #[error("forked sort unit failed: {0}")]
    Concurrency(String),
}

/// Which fork-join backend executes the recursive halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    /// rayon work-stealing pool.
    #[default]
    Rayon,
    /// One scoped OS thread per fork.
    OsThreads,
    /// Both halves on the calling thread.
    Sequential,
}

/// Sort-time configuration.
#[derive(Clone, Debug, Default)]
pub struct SortConfig {
    threads: Option<usize>,
    backend: Backend,
}

impl SortConfig {
    /// Concurrency hint used to size the parallel leaves (0 clamps to 1).
    /// Defaults to the number of logical cores.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }

    /// Select the fork-join backend (default: rayon).
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub(crate) fn concurrency(&self) -> usize {
        if self.backend == Backend::Sequential {
            return 1;
        }
        self.threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }
}

/// A single sort invocation, broken into its lifecycle stages.
///
/// `run` drives all four stages in order; callers that want to observe stage
/// boundaries can invoke them individually, in order.
pub struct SortTask<'a> {
    input: &'a [i32],
    output: &'a mut [i32],
    config: SortConfig,
    working: Vec<i32>,
    leaf: usize,
    outcome: Option<BufferId>,
}

impl<'a> SortTask<'a> {
    pub fn new(input: &'a [i32], output: &'a mut [i32], config: SortConfig) -> Self {
        SortTask {
            input,
            output,
            config,
            working: Vec::new(),
            leaf: 0,
            outcome: None,
        }
    }

    /// Check the size precondition before any work begins.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.input.len() != self.output.len() {
            return Err(SortError::SizeMismatch {
                input: self.input.len(),
                output: self.output.len(),
            });
        }
        Ok(())
    }

    /// Copy the input into the working buffer and fix the leaf size.
    pub fn prepare(&mut self) -> Result<(), SortError> {
        let n = self.input.len();
        self.working = alloc_buffer(n)?;
        self.working.extend_from_slice(self.input);
        self.leaf = leaf_len(n, self.config.concurrency());
        Ok(())
    }

    /// Run the fork-join driver. The sorted run lands either in the working
    /// buffer or in the output slice; `finalize` resolves which.
    pub fn execute(&mut self) -> Result<(), SortError> {
        let leaf = self.leaf;
        let working = &mut self.working[..];
        let output = &mut *self.output;
        let outcome = match self.config.backend {
            Backend::Rayon => run_driver(&RayonPool, working, output, leaf),
            Backend::OsThreads => run_driver(&OsThreads, working, output, leaf),
            Backend::Sequential => run_driver(&Sequential, working, output, leaf),
        }?;
        self.outcome = Some(outcome);
        Ok(())
    }

    /// Copy the run into the output slice when it ended in the working buffer.
    pub fn finalize(&mut self) -> Result<(), SortError> {
        match self.outcome {
            Some(BufferId::Primary) => {
                self.output.copy_from_slice(&self.working);
                Ok(())
            }
            Some(BufferId::Scratch) => Ok(()),
            None => Err(SortError::InvalidArgument(
                "finalize called before execute".into(),
            )),
        }
    }

    /// Drive all stages in order.
    pub fn run(mut self) -> Result<(), SortError> {
        self.validate()?;
        self.prepare()?;
        self.execute()?;
        self.finalize()
    }
}

/// Fallible buffer allocation (capacity `n`, empty).
pub(crate) fn alloc_buffer(n: usize) -> Result<Vec<i32>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n)
        .map_err(|_| SortError::Allocation { elements: n })?;
    Ok(buf)
}

/// A panic escaping the fork-join tree is a fatal backend failure, mapped to
/// `SortError::Concurrency` at this single boundary.
fn run_driver<F: ForkJoin>(
    fork: &F,
    primary: &mut [i32],
    scratch: &mut [i32],
    leaf: usize,
) -> Result<BufferId, SortError> {
    catch_unwind(AssertUnwindSafe(|| sort_range(fork, primary, scratch, leaf)))
        .map_err(|payload| SortError::Concurrency(panic_message(payload)))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
