//! Work-window arithmetic.
//!
//! The work window is a fixed 12-hour span starting at a configured hour
//! and may wrap past midnight (start 18 means 18:00-06:00). Checking in
//! late in the window scales the energy budget down proportionally;
//! checking in before the window opens gives full credit.

/// Length of the daily work window in hours
pub const WINDOW_HOURS: f64 = 12.0;

/// Where "now" falls relative to the work window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowHours {
    pub hours_remaining: f64,
    pub is_before_window: bool,
}

/// Read-only projection of the time-adjusted budget for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInfo {
    pub base_points: u32,
    pub adjusted_points: u32,
    /// Rounded to one decimal for display
    pub hours_remaining: f64,
    pub checkin_hour: u32,
    pub checkin_minute: u32,
    pub is_before_window: bool,
    pub window_start: u32,
    pub window_end: u32,
}

/// End hour of the window (mod 24)
pub fn window_end(window_start: u32) -> u32 {
    (window_start + 12) % 24
}

/// Hours remaining in the work window at a given wall-clock time.
///
/// When the window wraps midnight the day splits into three segments:
/// the evening run-up from the start hour, the early-morning tail before
/// the end hour, and the excluded daytime gap in between. "Before the
/// window" only applies in the part of the gap ahead of today's start.
pub fn hours_in_window(current_hour: u32, current_minute: u32, window_start: u32) -> WindowHours {
    let current = f64::from(current_hour) + f64::from(current_minute) / 60.0;
    let start = f64::from(window_start);
    let end = f64::from(window_end(window_start));

    if end < start {
        // Window spans midnight
        let in_evening = current >= start;
        let in_morning = current < end;

        let (hours_remaining, is_before_window) = if in_evening {
            ((24.0 - current) + end, false)
        } else if in_morning {
            (end - current, false)
        } else {
            // The excluded daytime gap. Early in the gap the window just
            // ended (nothing remains); late in the gap tonight's window
            // is the nearer event and the user is ahead of it.
            let until_start = start - current;
            let since_end = current - end;
            if until_start < since_end {
                (WINDOW_HOURS, true)
            } else {
                (0.0, false)
            }
        };

        WindowHours {
            hours_remaining: hours_remaining.max(0.0),
            is_before_window,
        }
    } else {
        // Same-day window
        if current < start {
            // Full credit ahead of the window
            WindowHours {
                hours_remaining: WINDOW_HOURS,
                is_before_window: true,
            }
        } else if current < end {
            WindowHours {
                hours_remaining: (end - current).max(0.0),
                is_before_window: false,
            }
        } else {
            WindowHours {
                hours_remaining: 0.0,
                is_before_window: false,
            }
        }
    }
}

/// Scale an energy budget by the fraction of the work window remaining
/// at check-in time. Before the window opens the budget passes through
/// unchanged; inside (or past) the window the result is rounded to the
/// nearest point with a floor of 1 - the budget is never reported as
/// zero.
pub fn time_adjusted_points(
    base_points: u32,
    checkin_hour: u32,
    checkin_minute: u32,
    window_start: u32,
) -> u32 {
    let window = hours_in_window(checkin_hour, checkin_minute, window_start);
    if window.is_before_window {
        return base_points;
    }

    let adjusted = (f64::from(base_points) * window.hours_remaining / WINDOW_HOURS).round() as u32;
    adjusted.max(1)
}

/// Bundle everything the UI needs to explain the adjusted budget
pub fn time_info(
    base_points: u32,
    checkin_hour: u32,
    checkin_minute: u32,
    window_start: u32,
) -> TimeInfo {
    let window = hours_in_window(checkin_hour, checkin_minute, window_start);
    TimeInfo {
        base_points,
        adjusted_points: time_adjusted_points(base_points, checkin_hour, checkin_minute, window_start),
        hours_remaining: (window.hours_remaining * 10.0).round() / 10.0,
        checkin_hour,
        checkin_minute,
        is_before_window: window.is_before_window,
        window_start,
        window_end: window_end(window_start),
    }
}
