//! Built-in locale data.

/// Calendar symbols and patterns for one locale.
#[derive(Debug)]
pub struct LocaleData {
    pub id: &'static str,
    pub era_names_short: [&'static str; 2],
    pub era_names_full: [&'static str; 2],
    pub month_names_full: [&'static str; 12],
    pub month_names_short: [&'static str; 12],
    pub month_names_narrow: [&'static str; 12],
    pub standalone_month_names_full: [&'static str; 12],
    pub standalone_month_names_short: [&'static str; 12],
    pub standalone_month_names_narrow: [&'static str; 12],
    /// Sunday first.
    pub day_names_full: [&'static str; 7],
    pub day_names_short: [&'static str; 7],
    pub day_names_narrow: [&'static str; 7],
    pub standalone_day_names_full: [&'static str; 7],
    pub standalone_day_names_short: [&'static str; 7],
    pub standalone_day_names_narrow: [&'static str; 7],
    pub quarter_names_full: [&'static str; 4],
    pub quarter_names_short: [&'static str; 4],
    pub standalone_quarter_names_full: [&'static str; 4],
    pub standalone_quarter_names_short: [&'static str; 4],
    pub am_string: &'static str,
    pub pm_string: &'static str,
    /// Short, medium, long, full.
    pub date_patterns: [&'static str; 4],
    /// Short, medium, long, full.
    pub time_patterns: [&'static str; 4],
    /// Joins `{1}` (date) and `{0}` (time), indexed by date style.
    pub date_time_patterns: [&'static str; 4],
    /// Yesterday, today, tomorrow.
    pub relative_days: [&'static str; 3],
    /// `h` or `H`, used for the `j` skeleton letter.
    pub hour_letter: char,
    /// Days from Sunday.
    pub first_weekday: u32,
    pub utc_name_full: &'static str,
    /// Canonical skeleton to pattern.
    pub skeletons: &'static [(&'static str, &'static str)],
}

/// US English.
pub static EN_US: LocaleData = LocaleData {
    id: "en_US",
    era_names_short: ["BC", "AD"],
    era_names_full: ["Before Christ", "Anno Domini"],
    month_names_full: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    month_names_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    standalone_month_names_full: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    standalone_month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    standalone_month_names_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    day_names_full: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_names_narrow: ["S", "M", "T", "W", "T", "F", "S"],
    standalone_day_names_full: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    standalone_day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    standalone_day_names_narrow: ["S", "M", "T", "W", "T", "F", "S"],
    quarter_names_full: ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"],
    quarter_names_short: ["Q1", "Q2", "Q3", "Q4"],
    standalone_quarter_names_full: ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"],
    standalone_quarter_names_short: ["Q1", "Q2", "Q3", "Q4"],
    am_string: "AM",
    pm_string: "PM",
    date_patterns: ["M/d/yy", "MMM d, y", "MMMM d, y", "EEEE, MMMM d, y"],
    time_patterns: ["h:mm a", "h:mm:ss a", "h:mm:ss a z", "h:mm:ss a zzzz"],
    date_time_patterns: ["{1}, {0}", "{1}, {0}", "{1} 'at' {0}", "{1} 'at' {0}"],
    relative_days: ["Yesterday", "Today", "Tomorrow"],
    hour_letter: 'h',
    first_weekday: 0,
    utc_name_full: "Coordinated Universal Time",
    skeletons: &[
        ("d", "d"),
        ("E", "ccc"),
        ("Ed", "d E"),
        ("EEEE", "cccc"),
        ("Gy", "y G"),
        ("GyMMM", "MMM y G"),
        ("GyMMMd", "MMM d, y G"),
        ("h", "h a"),
        ("H", "HH"),
        ("hm", "h:mm a"),
        ("Hm", "HH:mm"),
        ("hms", "h:mm:ss a"),
        ("Hms", "HH:mm:ss"),
        ("ms", "mm:ss"),
        ("M", "L"),
        ("Md", "M/d"),
        ("MEd", "E, M/d"),
        ("MMM", "LLL"),
        ("MMMd", "MMM d"),
        ("MMMEd", "E, MMM d"),
        ("MMMM", "LLLL"),
        ("MMMMd", "MMMM d"),
        ("y", "y"),
        ("yM", "M/y"),
        ("yMd", "M/d/y"),
        ("yMEd", "E, M/d/y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "MMM d, y"),
        ("yMMMEd", "E, MMM d, y"),
        ("yMMMM", "MMMM y"),
        ("yMMMMd", "MMMM d, y"),
        ("yMMMMEEEEd", "EEEE, MMMM d, y"),
        ("yQQQ", "QQQ y"),
        ("yQQQQ", "QQQQ y"),
    ],
};

/// German (Germany).
pub static DE_DE: LocaleData = LocaleData {
    id: "de_DE",
    era_names_short: ["v. Chr.", "n. Chr."],
    era_names_full: ["v. Chr.", "n. Chr."],
    month_names_full: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    month_names_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    month_names_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    standalone_month_names_full: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    standalone_month_names_short: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    standalone_month_names_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    day_names_full: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    day_names_short: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    day_names_narrow: ["S", "M", "D", "M", "D", "F", "S"],
    standalone_day_names_full: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    standalone_day_names_short: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    standalone_day_names_narrow: ["S", "M", "D", "M", "D", "F", "S"],
    quarter_names_full: ["1. Quartal", "2. Quartal", "3. Quartal", "4. Quartal"],
    quarter_names_short: ["Q1", "Q2", "Q3", "Q4"],
    standalone_quarter_names_full: ["1. Quartal", "2. Quartal", "3. Quartal", "4. Quartal"],
    standalone_quarter_names_short: ["Q1", "Q2", "Q3", "Q4"],
    am_string: "AM",
    pm_string: "PM",
    date_patterns: ["dd.MM.yy", "dd.MM.y", "d. MMMM y", "EEEE, d. MMMM y"],
    time_patterns: ["HH:mm", "HH:mm:ss", "HH:mm:ss z", "HH:mm:ss zzzz"],
    date_time_patterns: ["{1}, {0}", "{1}, {0}", "{1} 'um' {0}", "{1} 'um' {0}"],
    relative_days: ["Gestern", "Heute", "Morgen"],
    hour_letter: 'H',
    first_weekday: 1,
    utc_name_full: "Koordinierte Weltzeit",
    skeletons: &[
        ("d", "d"),
        ("E", "ccc"),
        ("Ed", "E, d."),
        ("EEEE", "cccc"),
        ("Gy", "y G"),
        ("GyMMM", "MMM y G"),
        ("GyMMMd", "d. MMM y G"),
        ("h", "h 'Uhr' a"),
        ("H", "HH 'Uhr'"),
        ("hm", "h:mm a"),
        ("Hm", "HH:mm"),
        ("hms", "h:mm:ss a"),
        ("Hms", "HH:mm:ss"),
        ("ms", "mm:ss"),
        ("M", "L"),
        ("Md", "d.M."),
        ("MEd", "E, d.M."),
        ("MMM", "LLL"),
        ("MMMd", "d. MMM"),
        ("MMMEd", "E, d. MMM"),
        ("MMMM", "LLLL"),
        ("MMMMd", "d. MMMM"),
        ("y", "y"),
        ("yM", "M/y"),
        ("yMd", "d.M.y"),
        ("yMEd", "E, d.M.y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "d. MMM y"),
        ("yMMMEd", "E, d. MMM y"),
        ("yMMMM", "MMMM y"),
        ("yMMMMd", "d. MMMM y"),
        ("yMMMMEEEEd", "EEEE, d. MMMM y"),
        ("yQQQ", "QQQ y"),
        ("yQQQQ", "QQQQ y"),
    ],
};

/// French (France).
pub static FR_FR: LocaleData = LocaleData {
    id: "fr_FR",
    era_names_short: ["av. J.-C.", "ap. J.-C."],
    era_names_full: ["avant Jésus-Christ", "après Jésus-Christ"],
    month_names_full: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    month_names_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    month_names_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    standalone_month_names_full: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    standalone_month_names_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    standalone_month_names_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    day_names_full: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    day_names_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    day_names_narrow: ["D", "L", "M", "M", "J", "V", "S"],
    standalone_day_names_full: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    standalone_day_names_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    standalone_day_names_narrow: ["D", "L", "M", "M", "J", "V", "S"],
    quarter_names_full: [
        "1er trimestre",
        "2e trimestre",
        "3e trimestre",
        "4e trimestre",
    ],
    quarter_names_short: ["T1", "T2", "T3", "T4"],
    standalone_quarter_names_full: [
        "1er trimestre",
        "2e trimestre",
        "3e trimestre",
        "4e trimestre",
    ],
    standalone_quarter_names_short: ["T1", "T2", "T3", "T4"],
    am_string: "AM",
    pm_string: "PM",
    date_patterns: ["dd/MM/y", "d MMM y", "d MMMM y", "EEEE d MMMM y"],
    time_patterns: ["HH:mm", "HH:mm:ss", "HH:mm:ss z", "HH:mm:ss zzzz"],
    date_time_patterns: ["{1} {0}", "{1} {0}", "{1} 'à' {0}", "{1} 'à' {0}"],
    relative_days: ["hier", "aujourd’hui", "demain"],
    hour_letter: 'H',
    first_weekday: 1,
    utc_name_full: "temps universel coordonné",
    skeletons: &[
        ("d", "d"),
        ("E", "E"),
        ("Ed", "E d"),
        ("EEEE", "cccc"),
        ("Gy", "y G"),
        ("GyMMM", "MMM y G"),
        ("GyMMMd", "d MMM y G"),
        ("h", "h a"),
        ("H", "HH 'h'"),
        ("hm", "h:mm a"),
        ("Hm", "HH:mm"),
        ("hms", "h:mm:ss a"),
        ("Hms", "HH:mm:ss"),
        ("ms", "mm:ss"),
        ("M", "L"),
        ("Md", "dd/MM"),
        ("MEd", "E dd/MM"),
        ("MMM", "LLL"),
        ("MMMd", "d MMM"),
        ("MMMEd", "E d MMM"),
        ("MMMM", "LLLL"),
        ("MMMMd", "d MMMM"),
        ("y", "y"),
        ("yM", "MM/y"),
        ("yMd", "dd/MM/y"),
        ("yMEd", "E dd/MM/y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "d MMM y"),
        ("yMMMEd", "E d MMM y"),
        ("yMMMM", "MMMM y"),
        ("yMMMMd", "d MMMM y"),
        ("yMMMMEEEEd", "EEEE d MMMM y"),
        ("yQQQ", "QQQ y"),
        ("yQQQQ", "QQQQ y"),
    ],
};
