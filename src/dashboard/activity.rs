//! The recent activity card and relative timestamp formatting.

use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::{
    AnalyticsConfig, Error,
    config::{DAYS_LIMIT, HOURS_LIMIT, JUST_NOW_LIMIT, MINUTES_LIMIT, WEEKS_LIMIT},
    currency::format_currency,
    models::{FamilyId, TransactionId, TransactionType},
    stores::{CategoryStore, SortOrder, TransactionQuery, TransactionStore},
};

use super::UNCATEGORIZED_LABEL;

/// One row of the recent activity list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivityItem {
    /// The transaction the row describes.
    pub transaction_id: TransactionId,

    /// Whether the transaction was income or an expense.
    pub transaction_type: TransactionType,

    /// The transaction amount.
    pub amount: f64,

    /// The amount formatted for display, e.g. "$42.50".
    pub display_amount: String,

    /// The resolved category name, or a fallback when the lookup failed.
    pub category_name: String,

    /// How long ago the record was created, e.g. "2 hours ago".
    pub recorded: String,
}

/// The dashboard's recent activity card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivityCard {
    /// The most recent transactions, newest first.
    pub items: Vec<RecentActivityItem>,

    /// The family's total transaction count, queried separately.
    pub total_count: u64,

    /// Whether more transactions exist than the card shows.
    pub has_more: bool,
}

impl RecentActivityCard {
    /// The documented default shown when the card cannot be built.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            has_more: false,
        }
    }
}

/// Build the most-recent-first activity list for a family.
///
/// # Errors
/// Propagates store errors from the recent-transaction query and the total
/// count query; both are primary data for this card. A failed category
/// lookup for a single item falls back to a fixed label instead.
pub fn build_recent_activity(
    transactions: &dyn TransactionStore,
    categories: &dyn CategoryStore,
    family_id: FamilyId,
    now: OffsetDateTime,
    config: &AnalyticsConfig,
) -> Result<RecentActivityCard, Error> {
    let query = TransactionQuery {
        family_id,
        date_range: None,
        limit: Some(config.recent_activity_count as u64),
        sort_created: Some(SortOrder::Descending),
    };

    let recent = transactions
        .get_query(&query)
        .inspect_err(|error| tracing::error!("could not get recent transactions: {error}"))?;

    let total_count = transactions
        .count_by_family(family_id)
        .inspect_err(|error| tracing::error!("could not count transactions: {error}"))?;

    let items: Vec<RecentActivityItem> = recent
        .into_iter()
        .map(|transaction| {
            let category_name = match categories.get(transaction.category_id) {
                Ok(category) => category.name,
                Err(error) => {
                    tracing::warn!(
                        "could not resolve category {} for transaction {}: {error}",
                        transaction.category_id,
                        transaction.id
                    );
                    UNCATEGORIZED_LABEL.to_owned()
                }
            };

            RecentActivityItem {
                transaction_id: transaction.id,
                transaction_type: transaction.transaction_type,
                amount: transaction.amount,
                display_amount: format_currency(transaction.amount),
                category_name,
                recorded: format_relative_time(now, transaction.created_at),
            }
        })
        .collect();

    let has_more = total_count > items.len() as u64;

    Ok(RecentActivityCard {
        items,
        total_count,
        has_more,
    })
}

/// Format how long ago `created_at` was relative to `now`.
///
/// Buckets are evaluated in ascending order of threshold and the first
/// match wins. Records older than thirty days show their calendar date
/// instead of a relative phrase.
fn format_relative_time(now: OffsetDateTime, created_at: OffsetDateTime) -> String {
    let elapsed = now - created_at;

    if elapsed < JUST_NOW_LIMIT {
        "just now".to_owned()
    } else if elapsed < MINUTES_LIMIT {
        ago(elapsed.whole_minutes(), "minute")
    } else if elapsed < HOURS_LIMIT {
        ago(elapsed.whole_hours(), "hour")
    } else if elapsed < DAYS_LIMIT {
        if elapsed == Duration::days(1) {
            "yesterday".to_owned()
        } else {
            ago(elapsed.whole_days(), "day")
        }
    } else if elapsed < WEEKS_LIMIT {
        ago(elapsed.whole_days() / 7, "week")
    } else {
        created_at.date().to_string()
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::datetime};

    use crate::{
        AnalyticsConfig, Error,
        test_utils::{FAMILY, FakeCategoryStore, FakeTransactionStore, category, expense, income},
    };

    use super::{RecentActivityCard, build_recent_activity, format_relative_time};

    const NOW: time::OffsetDateTime = datetime!(2024 - 03 - 15 12:00 UTC);

    fn relative(elapsed: Duration) -> String {
        format_relative_time(NOW, NOW - elapsed)
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(relative(Duration::seconds(30)), "just now");
        assert_eq!(relative(Duration::seconds(0)), "just now");
    }

    #[test]
    fn under_an_hour_counts_minutes() {
        assert_eq!(relative(Duration::seconds(90)), "1 minute ago");
        assert_eq!(relative(Duration::minutes(45)), "45 minutes ago");
    }

    #[test]
    fn under_a_day_counts_hours() {
        assert_eq!(relative(Duration::minutes(60)), "1 hour ago");
        assert_eq!(relative(Duration::hours(23)), "23 hours ago");
    }

    #[test]
    fn exactly_one_day_is_yesterday() {
        assert_eq!(relative(Duration::hours(24)), "yesterday");
    }

    #[test]
    fn over_a_day_counts_days() {
        // 25 hours is already "1 day ago": only the exact 24-hour mark reads
        // "yesterday".
        assert_eq!(relative(Duration::hours(25)), "1 day ago");
        assert_eq!(relative(Duration::days(3)), "3 days ago");
    }

    #[test]
    fn under_a_month_counts_weeks() {
        assert_eq!(relative(Duration::days(7)), "1 week ago");
        assert_eq!(relative(Duration::days(20)), "2 weeks ago");
    }

    #[test]
    fn a_month_or_older_shows_the_calendar_date() {
        assert_eq!(relative(Duration::days(30)), "2024-02-14");
        assert_eq!(relative(Duration::days(365)), "2023-03-16");
    }

    #[test]
    fn lists_most_recent_transactions_first() {
        let mut older = income(1, 100.0, 10, NOW.date() - Duration::days(2));
        older.created_at = NOW - Duration::days(2);
        let mut newer = expense(2, 40.0, 10, NOW.date());
        newer.created_at = NOW - Duration::hours(2);

        let store = FakeTransactionStore::with(vec![older, newer]);
        let categories = FakeCategoryStore::with(vec![category(10, "Groceries")]);

        let card = build_recent_activity(
            &store,
            &categories,
            FAMILY,
            NOW,
            &AnalyticsConfig::default(),
        )
        .unwrap();

        assert_eq!(card.items.len(), 2);
        assert_eq!(card.items[0].transaction_id, 2);
        assert_eq!(card.items[0].recorded, "2 hours ago");
        assert_eq!(card.items[1].transaction_id, 1);
        assert_eq!(card.items[1].recorded, "2 days ago");
    }

    #[test]
    fn caps_the_list_and_reports_more_data() {
        let transactions = (1..=10)
            .map(|id| {
                let mut transaction = expense(id, 10.0, 10, NOW.date());
                transaction.created_at = NOW - Duration::minutes(id);
                transaction
            })
            .collect();

        let store = FakeTransactionStore::with(transactions);
        let categories = FakeCategoryStore::with(vec![category(10, "Groceries")]);
        let config = AnalyticsConfig {
            recent_activity_count: 4,
            ..Default::default()
        };

        let card = build_recent_activity(&store, &categories, FAMILY, NOW, &config).unwrap();

        assert_eq!(card.items.len(), 4);
        assert_eq!(card.total_count, 10);
        assert!(card.has_more);
    }

    #[test]
    fn no_more_data_when_everything_fits() {
        let store = FakeTransactionStore::with(vec![expense(1, 10.0, 10, NOW.date())]);
        let categories = FakeCategoryStore::with(vec![category(10, "Groceries")]);

        let card = build_recent_activity(
            &store,
            &categories,
            FAMILY,
            NOW,
            &AnalyticsConfig::default(),
        )
        .unwrap();

        assert_eq!(card.total_count, 1);
        assert!(!card.has_more);
    }

    #[test]
    fn items_carry_display_amounts_and_category_names() {
        let store = FakeTransactionStore::with(vec![expense(1, 1234.5, 10, NOW.date())]);
        let categories = FakeCategoryStore::with(vec![category(10, "Groceries")]);

        let card = build_recent_activity(
            &store,
            &categories,
            FAMILY,
            NOW,
            &AnalyticsConfig::default(),
        )
        .unwrap();

        assert_eq!(card.items[0].display_amount, "$1,234.50");
        assert_eq!(card.items[0].category_name, "Groceries");
    }

    #[test]
    fn failed_category_lookup_falls_back_without_failing_the_card() {
        let store = FakeTransactionStore::with(vec![expense(1, 10.0, 99, NOW.date())]);
        let categories = FakeCategoryStore::default();

        let card = build_recent_activity(
            &store,
            &categories,
            FAMILY,
            NOW,
            &AnalyticsConfig::default(),
        )
        .unwrap();

        assert_eq!(card.items[0].category_name, "Uncategorized");
    }

    #[test]
    fn failed_transaction_query_fails_the_card() {
        let store = FakeTransactionStore::failing("timed out");
        let categories = FakeCategoryStore::default();

        let got = build_recent_activity(
            &store,
            &categories,
            FAMILY,
            NOW,
            &AnalyticsConfig::default(),
        );

        assert_eq!(got, Err(Error::Store("timed out".to_owned())));
    }

    #[test]
    fn empty_card_has_no_items() {
        let card = RecentActivityCard::empty();

        assert!(card.items.is_empty());
        assert_eq!(card.total_count, 0);
        assert!(!card.has_more);
    }
}
