use strandwheel_calendar::{
    CalendarError, compose, decompose, days_in_month, month_lengths, year_length,
};

#[test]
fn compose_decompose_roundtrip() {
    for year in 0..=40u64 {
        for month in 1..=12u8 {
            let max_day = days_in_month(year, month).unwrap();
            for day in 1..=max_day {
                let abs = compose(year, month, day).unwrap();
                let date = decompose(abs);
                assert_eq!(
                    (date.year(), date.month(), date.day()),
                    (year, month - 1, day),
                    "roundtrip failed for {year}-{month}-{day} (abs {abs})"
                );
            }
        }
    }
}

#[test]
fn decompose_compose_roundtrip() {
    for abs in 0..20_000u64 {
        let date = decompose(abs);
        let back = compose(date.year(), date.month_number(), date.day()).unwrap();
        assert_eq!(back, abs, "absolute day {abs} did not survive the roundtrip");
    }
}

#[test]
fn compose_is_contiguous_across_years() {
    for year in 0..100u64 {
        let first = compose(year, 1, 1).unwrap();
        let last = compose(year, 12, 31).unwrap();
        assert_eq!(last - first + 1, u64::from(year_length(year)), "year {year}");
        assert_eq!(compose(year + 1, 1, 1).unwrap(), last + 1, "year {year}");
    }
}

#[test]
fn leap_day_scenarios() {
    let abs = compose(4, 2, 29).unwrap();
    let date = decompose(abs);
    assert_eq!(date.day(), 29);
    assert_eq!(date.month(), 1);
    assert_eq!(date.year(), 4);

    assert_eq!(
        compose(3, 2, 29).unwrap_err(),
        CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 3,
            max_day: 28,
        }
    );
}

#[test]
fn month_table_sums() {
    for year in 0..=10_000u64 {
        let total: u16 = month_lengths(year).iter().copied().map(u16::from).sum();
        assert_eq!(total, year_length(year), "year {year}");
        assert_eq!(year_length(year) == 366, year % 4 == 0, "year {year}");
    }
}
