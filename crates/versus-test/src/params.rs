//! Regression test parameters and operations

use crate::error::TestError;
use versus_core::PixelArray;

/// Environment variable that turns on per-comparison output
pub const VERBOSE_ENV: &str = "REGTEST_VERBOSE";

/// Whether per-comparison output was requested through `REGTEST_VERBOSE`
///
/// Any value other than empty, `0` or `false` enables it.
pub fn verbose_from_env() -> bool {
    match std::env::var(VERBOSE_ENV) {
        Ok(v) => {
            let v = v.trim().to_lowercase();
            !(v.is_empty() || v == "0" || v == "false")
        }
        Err(_) => false,
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the running
/// comparison index and every recorded failure. Comparisons never panic;
/// the test asserts on [`cleanup`](Self::cleanup) at the end so that all
/// mismatches are reported together.
pub struct RegParams {
    /// Name of the test (e.g., "measure_scenarios")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Print every comparison, not only failures
    pub verbose: bool,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "ari")
    ///
    /// # Returns
    ///
    /// A new `RegParams` instance, verbose if `REGTEST_VERBOSE` is set.
    pub fn new(test_name: &str) -> Self {
        let verbose = verbose_from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            verbose,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise. Two NaNs
    /// match; a NaN never matches a number.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;

        if values_match(expected, actual, delta) {
            self.trace(format_args!("value {expected} == {actual}"));
            true
        } else {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            })
        }
    }

    /// Compare two vectors element by element
    ///
    /// # Returns
    ///
    /// `true` if lengths agree and every element matches within delta.
    pub fn compare_vectors(&mut self, expected: &[f64], actual: &[f64], delta: f64) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            return self.fail(TestError::LengthMismatch {
                index: self.index,
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        let mismatch = expected
            .iter()
            .zip(actual)
            .position(|(&e, &a)| !values_match(e, a, delta));

        match mismatch {
            Some(position) => self.fail(TestError::VectorMismatch {
                index: self.index,
                position,
                expected: expected[position],
                actual: actual[position],
                delta,
            }),
            None => {
                self.trace(format_args!("vector of {} elements", expected.len()));
                true
            }
        }
    }

    /// Compare two pixel arrays for exact equality
    ///
    /// # Returns
    ///
    /// `true` if dimensions and every value are identical.
    pub fn compare_pixel_arrays(&mut self, expected: &PixelArray, actual: &PixelArray) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            return self.fail(TestError::ShapeMismatch {
                index: self.index,
                expected: expected.dimensions(),
                actual: actual.dimensions(),
            });
        }

        let (_, cols, bands) = expected.dimensions();
        let mismatch = expected
            .as_slice()
            .iter()
            .zip(actual.as_slice())
            .position(|(e, a)| e != a);

        match mismatch {
            Some(offset) => self.fail(TestError::PixelMismatch {
                index: self.index,
                row: offset / (cols * bands),
                col: (offset / bands) % cols,
                band: offset % bands,
            }),
            None => {
                self.trace(format_args!("pixel array {:?}", expected.dimensions()));
                true
            }
        }
    }

    /// Record a boolean condition as a comparison
    ///
    /// # Returns
    ///
    /// The condition itself.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;

        if condition {
            self.trace(format_args!("{what}"));
            true
        } else {
            self.fail(TestError::CheckFailed {
                index: self.index,
                what: what.to_string(),
            })
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        let success = self.failures.is_empty();
        if success {
            eprintln!("SUCCESS: {}_reg ({} comparisons)", self.test_name, self.index);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }

    fn fail(&mut self, error: TestError) -> bool {
        eprintln!("Failure in {}_reg: {}", self.test_name, error);
        self.failures.push(error);
        false
    }

    fn trace(&self, what: std::fmt::Arguments<'_>) {
        if self.verbose {
            eprintln!("  [{:03}] ok: {}", self.index, what);
        }
    }
}

fn values_match(expected: f64, actual: f64, delta: f64) -> bool {
    if expected.is_nan() || actual.is_nan() {
        return expected.is_nan() && actual.is_nan();
    }
    expected == actual || (expected - actual).abs() <= delta
}
