use crate::domain::model::PaginationResult;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Compute the slice window for `page` over `total_count` filtered rows, plus the
/// metadata reported to the client.
///
/// Both ends of the window are clamped into `[0, total_count]`, so a page before
/// the first or after the last yields an empty range instead of wrapping.
pub fn paginate(total_count: usize, page: i64, limit: NonZeroUsize) -> (Range<usize>, PaginationResult) {
    let limit_len = limit.get();
    let total_pages = total_count.div_ceil(limit_len);

    // i128 避免極端 page 值溢位
    let offset = (i128::from(page) - 1).saturating_mul(limit_len as i128);
    let clamp = |value: i128| value.clamp(0, total_count as i128) as usize;
    let window = clamp(offset)..clamp(offset.saturating_add(limit_len as i128));

    let pagination = PaginationResult {
        current_page: page,
        total_pages,
        total_count,
        limit: limit_len,
        has_next_page: i128::from(page) < total_pages as i128,
        has_previous_page: page > 1,
    };

    (window, pagination)
}
