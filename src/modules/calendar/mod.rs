//! Brazilian business-day calendar.
//!
//! Generalizes the teacher's `TimezoneConverter`/`Currency` pattern (a
//! stateless utility type backed by associated functions) from timezone
//! conversion to calendar arithmetic: mapping dates to accumulated day
//! counts and stepping a disbursement date to the next business day.

use chrono::{Datelike, Months, NaiveDate};

/// Stateless Brazilian banking-calendar utility.
pub struct Calendar;

impl Calendar {
    /// `true` if `date` falls on a Saturday or Sunday.
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
    }

    /// `true` if `date` is a fixed or movable Brazilian national holiday.
    pub fn is_holiday(date: NaiveDate) -> bool {
        national_holidays(date.year()).contains(&date)
    }

    /// `true` if `date` is Mon–Fri and not a national holiday.
    pub fn is_business_day(date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !Self::is_holiday(date)
    }

    /// The first business day at or after `date`.
    pub fn next_business_day(date: NaiveDate) -> NaiveDate {
        let mut d = date;
        while !Self::is_business_day(d) {
            d = d.succ_opt().expect("NaiveDate does not overflow in practice");
        }
        d
    }

    /// Signed day-count from `a` to `b` (calendar days, not filtered for
    /// weekends/holidays). Used for `accumulated_days` (spec §4.1) and for
    /// the reimbursement mode's repurchase/due-date offset (spec §4.8),
    /// both of which are calendar-day quantities despite the historical
    /// "business days" name carried over from the source system.
    pub fn business_days_between(a: NaiveDate, b: NaiveDate) -> i64 {
        (b - a).num_days()
    }

    /// `first_payment_date` shifted by `months` calendar months, clamping
    /// the day-of-month to the target month's last day (spec §4.1: Jan 31 +
    /// 1 month = Feb 28/29).
    pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
        if months == 0 {
            return date;
        }
        if let Some(d) = date.checked_add_months(Months::new(months)) {
            return d;
        }
        // checked_add_months only fails when the target month lacks the
        // source day-of-month; retry by walking the day back to the last
        // valid day of the target month.
        let mut day = date.day();
        loop {
            day -= 1;
            if let Some(shifted) = NaiveDate::from_ymd_opt(date.year(), date.month(), day)
                .and_then(|d| d.checked_add_months(Months::new(months)))
            {
                return shifted;
            }
        }
    }
}

/// Fixed-date Brazilian national holidays, plus the Easter-derived movable
/// ones (Carnival Tuesday, Good Friday, Corpus Christi) computed for the
/// given year via the anonymous Gregorian Easter algorithm.
fn national_holidays(year: i32) -> Vec<NaiveDate> {
    let ymd = |m: u32, d: u32| NaiveDate::from_ymd_opt(year, m, d).expect("valid calendar date");

    let mut holidays = vec![
        ymd(1, 1),   // Confraternização Universal
        ymd(4, 21),  // Tiradentes
        ymd(5, 1),   // Dia do Trabalho
        ymd(9, 7),   // Independência do Brasil
        ymd(10, 12), // Nossa Senhora Aparecida
        ymd(11, 2),  // Finados
        ymd(11, 15), // Proclamação da República
        ymd(12, 25), // Natal
    ];

    let easter = easter_sunday(year);
    holidays.push(easter - chrono::Duration::days(47)); // Carnaval
    holidays.push(easter - chrono::Duration::days(2)); // Sexta-feira Santa
    holidays.push(easter + chrono::Duration::days(60)); // Corpus Christi

    holidays
}

/// Anonymous Gregorian algorithm (Meeus/Jones/Butcher) for the date of
/// Easter Sunday in a given Gregorian-calendar year.
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).expect("valid Easter date")
}
