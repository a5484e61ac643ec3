//! Text rendering of the statistics report and of raw trip rows.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use crate::analyzers::types::{
    ColumnStat, DurationStats, Mode, Stat, StationStats, TimeStats, TripDuration, UserStats,
    ValueCount,
};
use crate::table::{ColumnSet, Trip};

const SEPARATOR_WIDTH: usize = 40;

pub fn write_separator<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", "-".repeat(SEPARATOR_WIDTH))
}

pub fn write_time_stats<W: Write>(w: &mut W, stats: &TimeStats, elapsed: Duration) -> io::Result<()> {
    writeln!(w, "\nCalculating The Most Frequent Times of Travel...\n")?;
    write_mode(w, "The most common travel month is", &stats.month)?;
    write_mode(w, "The most common day of the week travelled is", &stats.day)?;
    write_mode(w, "The most common start hour of travel is", &stats.hour)?;
    write_footer(w, elapsed)
}

pub fn write_station_stats<W: Write>(
    w: &mut W,
    stats: &StationStats,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(w, "\nCalculating The Most Popular Stations and Trip...\n")?;
    write_mode(w, "The most commonly travelled start station is", &stats.start)?;
    write_mode(w, "The most commonly travelled end station is", &stats.end)?;
    match &stats.trip {
        Ok(pair) => writeln!(
            w,
            "The most commonly travelled start and end station trips are between {} and {} ({} trips)\n",
            pair.start, pair.end, pair.trips
        )?,
        Err(e) => writeln!(w, "Sorry, {e}\n")?,
    }
    write_footer(w, elapsed)
}

pub fn write_duration_stats<W: Write>(
    w: &mut W,
    stats: &DurationStats,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(w, "\nCalculating Trip Duration...\n")?;
    write_duration(w, "The total travel time is", &stats.total)?;
    write_duration(w, "The average travel time is", &stats.average)?;
    write_footer(w, elapsed)
}

pub fn write_user_stats<W: Write>(w: &mut W, stats: &UserStats, elapsed: Duration) -> io::Result<()> {
    writeln!(w, "\nCalculating User Stats...\n")?;

    writeln!(w, "\nCalculating User type and count...\n")?;
    write_counts(w, &stats.user_types, |w, c| {
        writeln!(w, "The user type is {} and there are {} members", c.value, c.count)
    })?;

    writeln!(w, "\nCalculating User gender and count...\n")?;
    match &stats.genders {
        ColumnStat::Missing => writeln!(w, "There is no gender data to be analysed here")?,
        ColumnStat::Present(genders) => write_counts(w, genders, |w, c| {
            writeln!(w, "The gender is {} and there are {} of them", c.value, c.count)
        })?,
    }

    writeln!(w, "\nCalculating birth year metrics if available in dataset...\n")?;
    match &stats.birth_years {
        ColumnStat::Missing => writeln!(w, "There is no birth year data to be analysed here")?,
        ColumnStat::Present(Err(e)) => writeln!(w, "Sorry, {e}")?,
        ColumnStat::Present(Ok(years)) => {
            writeln!(w, "The earliest birth year of a customer is {}", years.earliest)?;
            writeln!(w, "The most recent birth year of a customer is {}", years.most_recent)?;
            writeln!(
                w,
                "The most common birth year of a customer is {}{}",
                years.most_common.headline(),
                tie_note(&years.most_common)
            )?;
        }
    }

    write_footer(w, elapsed)
}

/// Writes one page of trips. `offset` is the index of the first trip in the table.
pub fn write_rows<W: Write>(
    w: &mut W,
    trips: &[Trip],
    columns: ColumnSet,
    offset: usize,
) -> io::Result<()> {
    write!(
        w,
        "{:>7} {:>4} {:<9} {:<9} {:>10}  {:<14}",
        "", "Hour", "Day", "Month", "Duration", "User Type"
    )?;
    if columns.gender {
        write!(w, " {:<8}", "Gender")?;
    }
    if columns.birth_year {
        write!(w, " {:<10}", "Birth Year")?;
    }
    writeln!(w, "  Start Station -> End Station")?;

    for (i, trip) in trips.iter().enumerate() {
        write!(
            w,
            "{:>7} {:>4} {:<9} {:<9} {:>10.1}  {:<14}",
            offset + i,
            trip.hour(),
            trip.day(),
            trip.month(),
            trip.trip_duration,
            or_blank(trip.user_type.as_deref()),
        )?;
        if columns.gender {
            write!(w, " {:<8}", or_blank(trip.gender.as_deref()))?;
        }
        if columns.birth_year {
            let year = trip.birth_year.map(|y| format!("{y:.0}"));
            write!(w, " {:<10}", or_blank(year.as_deref()))?;
        }
        writeln!(w, "  {} -> {}", trip.start_station, trip.end_station)?;
    }
    Ok(())
}

fn write_mode<W: Write, T: Display>(w: &mut W, label: &str, stat: &Stat<Mode<T>>) -> io::Result<()> {
    match stat {
        Ok(mode) => writeln!(w, "{label} {}{}\n", mode.headline(), tie_note(mode)),
        Err(e) => writeln!(w, "Sorry, {e}\n"),
    }
}

fn write_duration<W: Write>(w: &mut W, label: &str, stat: &Stat<TripDuration>) -> io::Result<()> {
    match stat {
        Ok(duration) => {
            let parts = duration.parts();
            writeln!(
                w,
                "{label} {} minutes and {} seconds\n",
                parts.minutes, parts.seconds
            )
        }
        Err(e) => writeln!(w, "Sorry, {e}\n"),
    }
}

fn write_counts<W, F>(w: &mut W, stat: &Stat<Vec<ValueCount<String>>>, mut line: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, &ValueCount<String>) -> io::Result<()>,
{
    match stat {
        Ok(counts) => counts.iter().try_for_each(|c| line(w, c)),
        Err(e) => writeln!(w, "Sorry, {e}"),
    }
}

fn write_footer<W: Write>(w: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(w, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    write_separator(w)
}

fn tie_note<T>(mode: &Mode<T>) -> String {
    if mode.is_tied() {
        format!(" (one of {} tied values)", mode.ties().len())
    } else {
        String::new()
    }
}

fn or_blank(value: Option<&str>) -> &str {
    value.unwrap_or("")
}
