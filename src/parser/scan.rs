//! Candidate discovery: lines that mention a documentable test function.

/// Name prefix shared by every documentable function.
pub const TEST_PREFIX: &str = "Test_";

/// Offsets of all lines containing [`TEST_PREFIX`], in order.
pub fn candidates(lines: &[&str]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(TEST_PREFIX))
        .map(|(i, _)| i)
        .collect()
}
