pub mod configuration;
pub mod configurationerror;

pub mod time {
    pub mod calendarerror;
    pub mod utility;
    pub mod easter;
    pub mod rangeofdates;
    pub mod weekendmask;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod mondayshift;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod holidayruleset;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod businessdaycalculator;
        pub mod workdaymonthreport;
    }
}
