use std::cmp::Ordering;

use crate::core::filters::{validate_citations, InputError};

/// h-index of an ascending citation list
///
/// Binary search compares each citation count against the number of papers
/// from that index to the end. An exact hit is the answer; otherwise the
/// answer is the count of papers from `low` onward once the search ends.
pub fn h_index(citations: &[i64]) -> Result<usize, InputError> {
    validate_citations(citations)?;

    let n = citations.len();
    let mut low = 0usize;
    let mut end = n;

    while low < end {
        let high = end - 1;
        let mid = low + (high - low) / 2;
        let right = n - mid;

        // `right` fits in i64 for any slice that fits in memory
        match citations[mid].cmp(&(right as i64)) {
            Ordering::Equal => return Ok(right),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => end = mid,
        }
    }

    Ok(n - low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_hit() {
        assert_eq!(h_index(&[0, 1, 3, 5, 6]), Ok(3));
    }

    #[test]
    fn test_no_exact_hit() {
        assert_eq!(h_index(&[1, 2, 100]), Ok(2));
        assert_eq!(h_index(&[10, 10, 10]), Ok(3));
        assert_eq!(h_index(&[0, 0, 0]), Ok(0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(h_index(&[]), Ok(0));
    }

    #[test]
    fn test_single() {
        assert_eq!(h_index(&[0]), Ok(0));
        assert_eq!(h_index(&[1]), Ok(1));
        assert_eq!(h_index(&[7]), Ok(1));
    }

    #[test]
    fn test_unsorted_rejected() {
        assert_eq!(
            h_index(&[5, 1]),
            Err(InputError::UnsortedCitations { index: 1 })
        );
    }
}
