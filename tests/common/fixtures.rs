//! Static cookie-log corpora used across harnesses.
//!
//! `CORPUS_SMALL` is the canonical eight-row sample. [`corpus_busy_day`] is
//! larger: one cookie is the strict majority on 2018-06-01, surrounded by
//! other cookies and other days.

/// Header-only log.
pub const HEADER_ONLY: &str = "cookie,timestamp\n";

/// The canonical sample log: two days with a clear leader each, and a tie
/// on 2018-12-08.
pub const CORPUS_SMALL: &str = "\
cookie,timestamp
AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-09T10:13:00+00:00
5UAVanZf6UtGyKVS,2018-12-09T07:25:00+00:00
AtY0laUfhglK3lC7,2018-12-09T06:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-08T22:03:00+00:00
4sMM2LxV07bPJzwf,2018-12-08T21:30:00+00:00
fbcn5UAVanZf6UtG,2018-12-08T09:30:00+00:00
4sMM2LxV07bPJzwf,2018-12-07T23:30:00+00:00
";

/// Logs that fail file validation, paired with a short label.
pub const CORPUS_BAD_SHAPE: &[(&str, &str)] = &[
    ("missing header", "AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00\n"),
    ("free text", "some data"),
    ("empty", ""),
    ("wrong header", "id,time\nAtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00\n"),
    ("naive timestamp", "cookie,timestamp\nAtY0laUfhglK3lC7,2018-12-09 14:19:00\n"),
    ("one column", "cookie,timestamp\nAtY0laUfhglK3lC7\n"),
];

/// The cookie that dominates 2018-06-01 in [`corpus_busy_day`].
pub const BUSY_DAY_LEADER: &str = "AzWXSm21KK6zT5yS";

/// Rows of the leader on 2018-06-01 in [`corpus_busy_day`].
pub const BUSY_DAY_LEADER_ROWS: usize = 52;

/// Rows of every other cookie on 2018-06-01 in [`corpus_busy_day`].
pub const BUSY_DAY_OTHER_ROWS: usize = 30;

const OTHER_COOKIES: &[&str] = &[
    "SAZuXPGUrfbcn5UA",
    "5UAVanZf6UtGyKVS",
    "4sMM2LxV07bPJzwf",
    "fbcn5UAVanZf6UtG",
    "AtY0laUfhglK3lC7",
];

/// A log where [`BUSY_DAY_LEADER`] appears 52 times on 2018-06-01 and 30
/// other cookie rows share the same day, shuffled together. 2018-05-31 and
/// 2018-06-02 each hold 60 rows of a single other cookie, so ignoring the
/// date would pick a different winner.
pub fn corpus_busy_day() -> String {
    let day_total = BUSY_DAY_LEADER_ROWS + BUSY_DAY_OTHER_ROWS;
    let day: Vec<&str> = (0..day_total)
        .map(|i| {
            if i < BUSY_DAY_OTHER_ROWS {
                OTHER_COOKIES[i % OTHER_COOKIES.len()]
            } else {
                BUSY_DAY_LEADER
            }
        })
        .collect();

    let mut out = String::from("cookie,timestamp\n");
    for i in 0..60usize {
        out.push_str(&format!(
            "{},2018-06-02T{:02}:{:02}:00+00:00\n",
            OTHER_COOKIES[0],
            23 - i % 24,
            i
        ));
    }
    // 7 is coprime with the day's row count, so this visits every row once.
    for i in 0..day_total {
        let cookie = day[(i * 7) % day_total];
        out.push_str(&format!(
            "{cookie},2018-06-01T{:02}:{:02}:{:02}+00:00\n",
            23 - i % 24,
            i % 60,
            (i * 13) % 60
        ));
    }
    for i in 0..60usize {
        out.push_str(&format!(
            "{},2018-05-31T{:02}:{:02}:00+00:00\n",
            OTHER_COOKIES[2],
            23 - i % 24,
            i
        ));
    }
    out
}
