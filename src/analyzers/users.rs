//! User type, gender and birth year breakdowns.

use tracing::debug;

use crate::analyzers::types::{BirthYearStats, ColumnStat, Stat, UserStats, ValueCount};
use crate::analyzers::utility::{mode, value_counts};
use crate::error::StatError;
use crate::table::TripTable;

#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn user_stats(table: &TripTable) -> UserStats {
    let columns = table.columns();

    let user_types = counts(
        table.iter().filter_map(|t| t.user_type.as_deref()),
        "user type",
    );

    let genders = if columns.gender {
        ColumnStat::Present(counts(
            table.iter().filter_map(|t| t.gender.as_deref()),
            "gender",
        ))
    } else {
        ColumnStat::Missing
    };

    let birth_years = if columns.birth_year {
        ColumnStat::Present(birth_year_stats(table))
    } else {
        ColumnStat::Missing
    };

    debug!(
        gender_column = columns.gender,
        birth_year_column = columns.birth_year,
        "User stats computed"
    );
    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn counts<'a, I>(values: I, statistic: &'static str) -> Stat<Vec<ValueCount<String>>>
where
    I: Iterator<Item = &'a str>,
{
    let counts = value_counts(values);
    if counts.is_empty() {
        return Err(StatError::no_data(statistic));
    }
    Ok(counts
        .into_iter()
        .map(|c| ValueCount {
            value: c.value.to_string(),
            count: c.count,
        })
        .collect())
}

/// Earliest, most recent and most common birth year among rows that have one.
///
/// Rows without a birth year are skipped here only; the table is not touched.
fn birth_year_stats(table: &TripTable) -> Stat<BirthYearStats> {
    let years: Vec<i32> = table
        .iter()
        .filter_map(|t| t.birth_year)
        .filter(|y| y.is_finite())
        .map(|y| y as i32)
        .collect();

    let no_data = || StatError::no_data("birth year");
    let earliest = years.iter().copied().min().ok_or_else(no_data)?;
    let most_recent = years.iter().copied().max().ok_or_else(no_data)?;
    let most_common = mode(years).ok_or_else(no_data)?;

    Ok(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_utils::rider;
    use crate::table::ColumnSet;

    #[test]
    fn test_user_type_counts() {
        let table = TripTable::new(
            vec![
                rider(Some("Customer"), None, None),
                rider(Some("Subscriber"), None, None),
                rider(Some("Subscriber"), None, None),
                rider(None, None, None),
            ],
            ColumnSet::default(),
        );

        let stats = user_stats(&table);
        let types = stats.user_types.unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].value, "Subscriber");
        assert_eq!(types[0].count, 2);
        assert_eq!(types[1].value, "Customer");
        assert_eq!(types[1].count, 1);
    }

    #[test]
    fn test_missing_demographic_columns() {
        let table = TripTable::new(vec![rider(Some("Customer"), None, None)], ColumnSet::default());

        let stats = user_stats(&table);
        assert!(stats.genders.is_missing());
        assert!(stats.birth_years.is_missing());
    }

    #[test]
    fn test_gender_counts() {
        let table = TripTable::new(
            vec![
                rider(Some("Subscriber"), Some("Female"), None),
                rider(Some("Subscriber"), Some("Male"), None),
                rider(Some("Subscriber"), Some("Male"), None),
                rider(Some("Customer"), None, None),
            ],
            ColumnSet::full(),
        );

        let ColumnStat::Present(Ok(genders)) = user_stats(&table).genders else {
            panic!("expected gender counts");
        };
        assert_eq!(
            genders,
            vec![
                ValueCount {
                    value: "Male".to_string(),
                    count: 2
                },
                ValueCount {
                    value: "Female".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_birth_years_skip_nulls() {
        let table = TripTable::new(
            vec![
                rider(Some("Subscriber"), Some("Male"), Some(1990.0)),
                rider(Some("Subscriber"), Some("Male"), Some(1990.0)),
                rider(Some("Subscriber"), Some("Female"), Some(1985.0)),
                rider(Some("Customer"), None, None),
            ],
            ColumnSet::full(),
        );

        let stats = user_stats(&table);
        let ColumnStat::Present(Ok(years)) = stats.birth_years else {
            panic!("expected birth year stats");
        };
        assert_eq!(years.earliest, 1985);
        assert_eq!(years.most_recent, 1990);
        assert_eq!(*years.most_common.headline(), 1990);
        assert_eq!(years.most_common.count(), 2);

        // the row without a birth year is still counted elsewhere
        assert_eq!(table.len(), 4);
        let types = stats.user_types.unwrap();
        assert_eq!(types.iter().map(|c| c.count).sum::<usize>(), 4);
    }

    #[test]
    fn test_birth_year_column_all_null() {
        let table = TripTable::new(vec![rider(Some("Customer"), None, None)], ColumnSet::full());

        let stats = user_stats(&table);
        assert_eq!(
            stats.birth_years,
            ColumnStat::Present(Err(StatError::no_data("birth year")))
        );
        assert_eq!(
            stats.genders,
            ColumnStat::Present(Err(StatError::no_data("gender")))
        );
    }

    #[test]
    fn test_user_stats_empty() {
        let stats = user_stats(&TripTable::new(Vec::new(), ColumnSet::full()));
        assert_eq!(stats.user_types, Err(StatError::no_data("user type")));
        assert!(matches!(stats.genders, ColumnStat::Present(Err(_))));
        assert!(matches!(stats.birth_years, ColumnStat::Present(Err(_))));
    }
}
