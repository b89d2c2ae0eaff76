//! The transition window calculator.
//!
//! Pure function from `(tick, trail length, route length, cyclic flag)` to
//! the set of active positions of one route — the core algorithmic unit of
//! the engine, deliberately free of any scheduler state so it can be tested
//! exhaustively on its own.
//!
//! # Window rule
//!
//! At tick `t` with trail length `L`, the base window covers positions
//! `t ..= t+L−1`, clipped to the route.  An acyclic route is simply done
//! once the window slides past its last position.  A cyclic route wraps:
//! once the window's upper edge reaches the route length the window is
//! taken modulo `N`, and when it straddles the seam between the last and
//! first position both fragments are active.

use dmf_core::Tick;

/// Active position indices of one route at `tick`.
///
/// Returns positions in ascending order.  Empty exactly when an acyclic
/// route's window has fully slid past the route end.
///
/// `trail_length` and `route_len` must both be ≥ 1 (guaranteed by
/// `ExecuteConfig::validate` and the `Route` invariant respectively).
pub fn active_positions(tick: Tick, trail_length: u32, route_len: u32, cyclic: bool) -> Vec<u32> {
    debug_assert!(trail_length >= 1, "trail_length must be >= 1");
    debug_assert!(route_len >= 1, "route_len must be >= 1");

    let len = route_len as u64;
    let start = tick.0;
    let end = start + trail_length as u64 - 1;

    if !cyclic {
        // Single pass: clip to [0, len-1], empty once start passes the end.
        if start >= len {
            return Vec::new();
        }
        return (start..=end.min(len - 1)).map(|i| i as u32).collect();
    }

    if end < len {
        // Window entirely within the first traversal — same as the base case.
        return (start..=end).map(|i| i as u32).collect();
    }

    // Wrapped window.  A trail at least as long as the route keeps every
    // position active.
    if trail_length >= route_len {
        return (0..route_len).collect();
    }

    let s = (start % len) as u32;
    let e = (end % len) as u32;
    if s <= e {
        (s..=e).collect()
    } else {
        // Straddles the seam: tail of the route plus head of the next pass.
        (0..=e).chain(s..route_len).collect()
    }
}
