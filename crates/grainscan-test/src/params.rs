//! Regression test parameters and operations

use grainscan_core::{LabelMap, Pix};

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current comparison, and every failure recorded so far. Comparisons
/// never panic; call [`RegParams::cleanup`] at the end and assert on it.
pub struct RegParams {
    /// Name of the test (e.g., "label")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters and print the banner.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
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
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two images for exact equality, including channel count.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.same_shape(pix2) {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - shape mismatch \
                 {}x{}x{} vs {}x{}x{}",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix1.channels(),
                pix2.width(),
                pix2.height(),
                pix2.channels()
            );
            return self.fail(msg);
        }

        for y in 0..pix1.height() {
            for x in 0..pix1.width() {
                if pix1.get_pixel(x, y) != pix2.get_pixel(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: pix comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Compare two label maps for exact equality.
    pub fn compare_labels(&mut self, labels1: &LabelMap, labels2: &LabelMap) -> bool {
        self.index += 1;

        if labels1.width() != labels2.width() || labels1.height() != labels2.height() {
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            return self.fail(msg);
        }

        if let Some((i, (a, b))) = labels1
            .data()
            .iter()
            .zip(labels2.data())
            .enumerate()
            .find(|(_, (a, b))| a != b)
        {
            let w = labels1.width() as usize;
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - label {} vs {} at ({}, {})",
                self.test_name,
                self.index,
                a,
                b,
                i % w,
                i / w
            );
            return self.fail(msg);
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params");
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_pix() {
        let mut rp = RegParams::new("params");
        let a = Pix::from_vec(2, 1, 1, vec![1, 2]).unwrap();
        let b = Pix::from_vec(2, 1, 1, vec![1, 3]).unwrap();
        let c = Pix::from_vec(1, 2, 1, vec![1, 2]).unwrap();
        assert!(rp.compare_pix(&a, &a.clone()));
        assert!(!rp.compare_pix(&a, &b));
        assert!(!rp.compare_pix(&a, &c));
        assert!(!rp.is_success());
    }

    #[test]
    fn test_compare_labels() {
        let mut rp = RegParams::new("params");
        let a = LabelMap::from_vec(2, 2, vec![0, 1, 1, 2]).unwrap();
        let b = LabelMap::from_vec(2, 2, vec![0, 1, 2, 2]).unwrap();
        assert!(rp.compare_labels(&a, &a.clone()));
        assert!(!rp.compare_labels(&a, &b));
        assert!(rp.failures()[0].contains("at (0, 1)"));
    }
}
