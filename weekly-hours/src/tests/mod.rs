mod label;

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
}

#[macro_export]
macro_rules! time {
    ( $time: expr ) => {{
        let (hour, minute) = $time.split_once(':').expect("invalid time literal");

        $crate::TimeOfDay::new(
            hour.parse().expect("invalid hour literal"),
            minute.parse().expect("invalid minute literal"),
        )
        .expect("time literal out of range")
    }};
}

#[macro_export]
macro_rules! week {
    () => {
        $crate::WeekTable::default()
    };
    ( $( $day: literal => $hours: literal ),+ $( , )? ) => {
        $crate::WeekTable::from_rows([ $( ($day, $hours) ),+ ])
    };
}
