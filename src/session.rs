//! The interactive explore-report-restart loop.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{error, info};

use crate::analyzers::{duration_stats, station_stats, time_stats, user_stats};
use crate::catalog::CityCatalog;
use crate::loader::DatasetLoader;
use crate::output::{
    write_duration_stats, write_rows, write_separator, write_station_stats, write_time_stats,
    write_user_stats,
};
use crate::prompt::Prompter;
use crate::source::TripSource;
use crate::table::TripTable;

/// Rows shown per request when paging through raw trips.
pub const PAGE_SIZE: usize = 5;

/// City and filter values chosen by the user, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub city: String,
    pub month: String,
    pub day: String,
}

pub struct Session<'a, S, R, W> {
    catalog: &'a CityCatalog,
    loader: DatasetLoader<'a, S>,
    prompter: Prompter<R, W>,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: TripSource,
    R: BufRead,
    W: Write,
{
    pub fn new(catalog: &'a CityCatalog, source: S, input: R, output: W) -> Self {
        Self {
            catalog,
            loader: DatasetLoader::new(catalog, source),
            prompter: Prompter::new(input, output),
        }
    }

    /// Runs iterations until the user declines to restart.
    pub fn run(&mut self) -> io::Result<()> {
        let mut iteration = 0;
        loop {
            iteration += 1;
            info!(iteration, "Starting session iteration");
            self.run_once()?;

            if !self
                .prompter
                .confirm("\nWould you like to restart? Enter yes or no.\n")?
            {
                break;
            }
        }
        Ok(())
    }

    /// One pass: ask, load, optionally page rows, report.
    ///
    /// A load failure is reported to the user and ends the pass early; only
    /// I/O errors on the prompt streams propagate.
    pub fn run_once(&mut self) -> io::Result<()> {
        let criteria = self.ask_criteria()?;

        let table = match self
            .loader
            .load(&criteria.city, &criteria.month, &criteria.day)
        {
            Ok(table) => table,
            Err(e) => {
                error!(error = %e, city = %criteria.city, "Failed to load dataset");
                writeln!(
                    self.prompter.output(),
                    "Could not analyse {}: {e}",
                    criteria.city
                )?;
                return Ok(());
            }
        };

        self.page_rows(&table)?;
        self.report(&table)
    }

    pub fn ask_criteria(&mut self) -> io::Result<Criteria> {
        writeln!(
            self.prompter.output(),
            "Hello! Let's explore some US bikeshare data!"
        )?;

        let catalog = self.catalog;
        let cities = catalog.cities().collect::<Vec<_>>().join(", ");

        let city = self.prompter.ask(
            &format!("NOTE: Only the following cities are allowed: {cities}"),
            "Enter your city name: ",
            |c| catalog.validate_city(c),
        )?;
        let month = self.prompter.ask(
            "NOTE: Only the first six months of the year formatted as string are allowed e.g. may, february etc. and \"all\"",
            "Enter month by name or \"all\": ",
            |m| catalog.validate_month(m),
        )?;
        let day = self.prompter.ask(
            "NOTE: Only day of week formatted as string is allowed e.g. monday, friday, wednesday etc.",
            "Enter day of week or \"all\": ",
            |d| catalog.validate_day(d),
        )?;

        write_separator(self.prompter.output())?;
        Ok(Criteria { city, month, day })
    }

    /// Shows raw trips [`PAGE_SIZE`] at a time. Viewing starts only on `yes`
    /// and then continues until the user answers `no`.
    pub fn page_rows(&mut self, table: &TripTable) -> io::Result<()> {
        if table.is_empty() {
            writeln!(self.prompter.output(), "No trips match the selected filters.")?;
            return Ok(());
        }

        let question =
            format!("Would you like to view {PAGE_SIZE} rows of individual trip data? Enter yes or no?: ");
        if !self.prompter.confirm(&question)? {
            return Ok(());
        }

        let next = format!("Do you want to see next {PAGE_SIZE} rows of individual trip data?: ");
        for (page, rows) in table.trips().chunks(PAGE_SIZE).enumerate() {
            let offset = page * PAGE_SIZE;
            write_rows(self.prompter.output(), rows, table.columns(), offset)?;

            if offset + rows.len() >= table.len() {
                writeln!(self.prompter.output(), "No more rows to display.")?;
                break;
            }
            if self.prompter.declines(&next)? {
                break;
            }
        }
        Ok(())
    }

    /// Runs the four aggregation groups over the full table, timing each.
    pub fn report(&mut self, table: &TripTable) -> io::Result<()> {
        let out = self.prompter.output();

        let started = Instant::now();
        let stats = time_stats(table);
        write_time_stats(out, &stats, started.elapsed())?;

        let started = Instant::now();
        let stats = station_stats(table);
        write_station_stats(out, &stats, started.elapsed())?;

        let started = Instant::now();
        let stats = duration_stats(table);
        write_duration_stats(out, &stats, started.elapsed())?;

        let started = Instant::now();
        let stats = user_stats(table);
        write_user_stats(out, &stats, started.elapsed())?;

        Ok(())
    }
}
