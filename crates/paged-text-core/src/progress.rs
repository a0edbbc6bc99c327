//! Reading progress as a percentage of file bytes behind the current page.

/// Estimates how far through a file the view is, in whole percent.
///
/// The first page always reads as 0 and an offset sitting exactly on the
/// line count reads as 100. Anything else is `bytes_consumed / total_bytes`
/// floored. `total_bytes` comes from the file on disk, so it can disagree
/// with the decoded byte count (BOMs, legacy encodings, a file rewritten since
/// it was loaded); the result is capped at 100 and an empty file reads as 0.
pub fn estimate(offset: usize, line_count: usize, bytes_consumed: u64, total_bytes: u64) -> u8 {
    if offset == 0 {
        return 0;
    }
    if offset == line_count {
        return 100;
    }
    if total_bytes == 0 {
        return 0;
    }

    let percent = u128::from(bytes_consumed) * 100 / u128::from(total_bytes);
    u8::try_from(percent.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_is_zero() {
        assert_eq!(estimate(0, 7, 10, 14), 0);
        assert_eq!(estimate(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_end_offset_is_hundred() {
        assert_eq!(estimate(7, 7, 3, 14), 100);
    }

    #[test]
    fn test_general_branch_floors() {
        // 2/3 of the bytes is 66.67%
        assert_eq!(estimate(5, 12, 20, 30), 66);
        assert_eq!(estimate(5, 12, 29, 30), 96);
    }

    #[test]
    fn test_zero_sized_file_on_disk() {
        assert_eq!(estimate(5, 7, 14, 0), 0);
    }

    #[test]
    fn test_skewed_sizes_are_capped() {
        // Decoded text larger than the file on disk
        assert_eq!(estimate(5, 7, 40, 14), 100);
    }

    #[test]
    fn test_overshoot_offset_uses_byte_ratio() {
        assert_eq!(estimate(10, 7, 14, 14), 100);
        assert_eq!(estimate(10, 7, 12, 16), 75);
    }
}
