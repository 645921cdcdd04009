#![allow(missing_docs)]

//! In-memory store fakes and fixture builders shared by the unit tests.

use std::collections::HashMap;

use time::Date;

use crate::{
    Error,
    models::{
        Budget, BudgetId, BudgetPeriod, Category, CategoryId, FamilyId, Transaction,
        TransactionId, TransactionType,
    },
    stores::{BudgetStore, CategoryStore, SortOrder, TransactionQuery, TransactionStore},
};

/// The family every fixture belongs to.
pub(crate) const FAMILY: FamilyId = 7;

/// A [TransactionStore] backed by a vector.
#[derive(Debug, Default)]
pub(crate) struct FakeTransactionStore {
    pub transactions: Vec<Transaction>,
    /// When set, every call fails with this message.
    pub fail_with: Option<String>,
}

impl FakeTransactionStore {
    pub fn with(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            transactions: Vec::new(),
            fail_with: Some(message.to_owned()),
        }
    }
}

impl TransactionStore for FakeTransactionStore {
    fn get_query(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, Error> {
        if let Some(message) = &self.fail_with {
            return Err(Error::Store(message.clone()));
        }

        let mut matches: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| transaction.family_id == query.family_id)
            .filter(|transaction| match &query.date_range {
                Some(range) => range.contains(&transaction.date),
                None => true,
            })
            .cloned()
            .collect();

        match query.sort_created {
            Some(SortOrder::Ascending) => {
                matches.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            }
            Some(SortOrder::Descending) => {
                matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            None => {}
        }

        if let Some(limit) = query.limit {
            matches.truncate(limit as usize);
        }

        Ok(matches)
    }

    fn count_by_family(&self, family_id: FamilyId) -> Result<u64, Error> {
        if let Some(message) = &self.fail_with {
            return Err(Error::Store(message.clone()));
        }

        let count = self
            .transactions
            .iter()
            .filter(|transaction| transaction.family_id == family_id)
            .count();

        Ok(count as u64)
    }
}

/// A [CategoryStore] backed by a map.
#[derive(Debug, Default)]
pub(crate) struct FakeCategoryStore {
    pub categories: HashMap<CategoryId, Category>,
    /// When set, every call fails with this message.
    pub fail_with: Option<String>,
}

impl FakeCategoryStore {
    pub fn with(categories: Vec<Category>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|category| (category.id, category))
                .collect(),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            categories: HashMap::new(),
            fail_with: Some(message.to_owned()),
        }
    }
}

impl CategoryStore for FakeCategoryStore {
    fn get(&self, category_id: CategoryId) -> Result<Category, Error> {
        if let Some(message) = &self.fail_with {
            return Err(Error::Store(message.clone()));
        }

        self.categories
            .get(&category_id)
            .cloned()
            .ok_or(Error::NotFound)
    }
}

/// A [BudgetStore] backed by a vector.
#[derive(Debug, Default)]
pub(crate) struct FakeBudgetStore {
    pub budgets: Vec<Budget>,
    /// When set, every call fails with this message.
    pub fail_with: Option<String>,
}

impl FakeBudgetStore {
    pub fn with(budgets: Vec<Budget>) -> Self {
        Self {
            budgets,
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            budgets: Vec::new(),
            fail_with: Some(message.to_owned()),
        }
    }
}

impl BudgetStore for FakeBudgetStore {
    fn get_active(&self, family_id: FamilyId, _as_of: Date) -> Result<Vec<Budget>, Error> {
        if let Some(message) = &self.fail_with {
            return Err(Error::Store(message.clone()));
        }

        Ok(self
            .budgets
            .iter()
            .filter(|budget| budget.family_id == family_id && budget.is_active)
            .cloned()
            .collect())
    }
}

fn transaction(
    id: TransactionId,
    amount: f64,
    kind: TransactionType,
    category_id: CategoryId,
    date: Date,
) -> Transaction {
    Transaction {
        id,
        amount,
        transaction_type: kind,
        category_id,
        family_id: FAMILY,
        date,
        created_at: date.midnight().assume_utc(),
        tags: Vec::new(),
    }
}

pub(crate) fn income(
    id: TransactionId,
    amount: f64,
    category_id: CategoryId,
    date: Date,
) -> Transaction {
    transaction(id, amount, TransactionType::Income, category_id, date)
}

pub(crate) fn expense(
    id: TransactionId,
    amount: f64,
    category_id: CategoryId,
    date: Date,
) -> Transaction {
    transaction(id, amount, TransactionType::Expense, category_id, date)
}

pub(crate) fn category(id: CategoryId, name: &str) -> Category {
    Category {
        id,
        name: name.to_owned(),
        color: "#2563eb".to_owned(),
        icon: "tag".to_owned(),
        category_type: TransactionType::Expense,
        parent_id: None,
    }
}

pub(crate) fn budget(
    id: BudgetId,
    name: &str,
    amount: f64,
    spent: f64,
    start_date: Date,
    end_date: Date,
) -> Budget {
    Budget {
        id,
        name: name.to_owned(),
        amount,
        spent,
        period: BudgetPeriod::Monthly,
        category_id: None,
        family_id: FAMILY,
        start_date,
        end_date,
        is_active: true,
    }
}
