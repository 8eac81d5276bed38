//! Contains the [`Input`] trait that property tests implement for their generated lexemes, so
//! that a whole generated program can be checked against the tokens scanned from it.

use std::fmt::Display;

use proptest::{prop_assert_eq, test_runner::TestCaseResult};

/// Represents a generated piece of source text that knows what it should be scanned into.
pub trait Input<Output> {
    /// Verifies that the given output is what this input should have produced.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: the output doesn't match the input.
    fn assert(self, output: Output) -> TestCaseResult;
}

/// A sequence of inputs matches a sequence of outputs of the same length, pairwise.
impl<'a, T, U> Input<&'a [T]> for &'a [U]
where
    for<'b> &'b U: Input<&'b T>,
{
    fn assert(self, output: &'a [T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len(), "the number of scanned items differs");

        self.iter()
            .zip(output)
            .try_for_each(|(input, output)| input.assert(output))
    }
}

/// Renders the generated inputs as source text, putting the separator between them.
pub fn join<T: Display>(inputs: &[T], separator: &str) -> String {
    let mut source = String::new();

    for (index, input) in inputs.iter().enumerate() {
        if index > 0 {
            source.push_str(separator);
        }
        source.push_str(&input.to_string());
    }

    source
}
