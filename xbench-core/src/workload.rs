//! Workload Contract
//!
//! A workload is a named, zero-argument unit of work. Its body is stored
//! type-erased; whatever value it returns is routed through
//! [`std::hint::black_box`] so the optimizer cannot prove the call dead.

use crate::error::WorkloadError;
use std::fmt;
use std::hint::black_box;

type Body = Box<dyn FnMut() -> Result<(), WorkloadError>>;

/// A registered timing subject
pub struct Workload {
    id: &'static str,
    name: String,
    title: Option<String>,
    iterations: u64,
    body: Body,
}

impl Workload {
    /// Register an infallible workload body.
    ///
    /// `iterations` is the logical work-unit count used to normalize the mean
    /// into a per-iteration cost; it does not change how often `f` is called.
    pub fn new<T, F>(id: &'static str, name: impl Into<String>, iterations: u64, mut f: F) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        Self::from_body(
            id,
            name.into(),
            iterations,
            Box::new(move || {
                let _ = black_box(f());
                Ok(())
            }),
        )
    }

    /// Register a workload body that can fail.
    ///
    /// An `Err` from the body aborts the run it is measured in.
    pub fn fallible<T, E, F>(
        id: &'static str,
        name: impl Into<String>,
        iterations: u64,
        mut f: F,
    ) -> Self
    where
        F: FnMut() -> Result<T, E> + 'static,
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::from_body(
            id,
            name.into(),
            iterations,
            Box::new(move || match f() {
                Ok(value) => {
                    let _ = black_box(value);
                    Ok(())
                }
                Err(e) => Err(WorkloadError::new(e)),
            }),
        )
    }

    fn from_body(id: &'static str, name: String, iterations: u64, body: Body) -> Self {
        Self {
            id,
            name,
            title: None,
            iterations,
            body,
        }
    }

    /// Set the label shown while the workload is running
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Stable selector key
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Display label of the result row
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Progress label; falls back to the result label
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Declared logical work-unit count
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Invoke the body once
    #[inline]
    pub fn run_once(&mut self) -> Result<(), WorkloadError> {
        (self.body)()
    }
}

impl fmt::Debug for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workload")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("title", &self.title)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}
