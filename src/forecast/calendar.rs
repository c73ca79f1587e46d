//! Weekday stepping. Exchange holidays are not modelled.

use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First weekday strictly after `date`, `None` past the end of the calendar.
pub fn next_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let mut next = date;
    loop {
        next = next.checked_add_days(Days::new(1))?;
        if is_business_day(next) {
            return Some(next);
        }
    }
}

/// The `count` weekdays following `date`, in order.
///
/// `None` when the calendar runs out before `count` dates are produced.
pub fn business_days_after(date: NaiveDate, count: usize) -> Option<Vec<NaiveDate>> {
    let mut out = Vec::new();
    let mut current = date;
    for _ in 0..count {
        current = next_business_day(current)?;
        out.push(current);
    }
    Some(out)
}
