//! Default experiment parameters for pagesim.

/// Default length of a generated reference trace.
///
/// Long enough that rate differences between policies are visible, short
/// enough that the O(n²) OPT oracle stays instant.
pub const DEFAULT_TRACE_LENGTH: usize = 100;

/// Default upper bound (inclusive) for generated page ids.
///
/// Generated pages are drawn uniformly from `[1, DEFAULT_MAX_PAGE_ID]`.
/// Ten distinct pages against 2–8 frames keeps every policy under real
/// eviction pressure.
pub const DEFAULT_MAX_PAGE_ID: u32 = 10;

/// Default frame-count sweep for comparing policies.
pub const DEFAULT_FRAME_COUNTS: [usize; 7] = [2, 3, 4, 5, 6, 7, 8];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counts_are_valid_capacities() {
        assert!(DEFAULT_FRAME_COUNTS.iter().all(|&n| n >= 1));
    }

    #[test]
    fn test_defaults_exercise_eviction() {
        // Every default frame count is smaller than the page universe,
        // so a full-length trace must fault past the fill phase.
        assert!(DEFAULT_FRAME_COUNTS
            .iter()
            .all(|&n| n < DEFAULT_MAX_PAGE_ID as usize));
        assert!(DEFAULT_TRACE_LENGTH > DEFAULT_MAX_PAGE_ID as usize);
    }
}
