use bson::{DateTime as BsonDateTime, doc, oid::ObjectId};

use crate::{
    Engine, Expense, ExpenseCmd, ExpenseUpdateCmd, ResultEngine,
    util::{parse_date, parse_id},
};

use super::{amount_to_bson, decode};

impl Engine {
    /// Insert a new expense. The store assigns its id.
    pub async fn add_expense(&self, cmd: ExpenseCmd) -> ResultEngine<ObjectId> {
        let date = parse_date(&cmd.date)?;

        let document = doc! {
            "amount": amount_to_bson(&cmd.amount)?,
            "date": BsonDateTime::from_chrono(date),
            "category": cmd.category,
            "description": cmd.description,
            "repeatMonthly": cmd.repeat_monthly,
        };

        self.expenses.insert_one(document).await
    }

    /// Every stored expense, unfiltered.
    pub async fn expenses(&self) -> ResultEngine<Vec<Expense>> {
        self.expenses
            .find_all()
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn expense(&self, id: &str) -> ResultEngine<Option<Expense>> {
        let id = parse_id(id)?;
        self.expenses.find_one(id).await?.map(decode).transpose()
    }

    /// Merge the fields of `cmd` into the expense `id`.
    ///
    /// Returns `false` when no expense has that id.
    pub async fn update_expense(&self, id: &str, cmd: ExpenseUpdateCmd) -> ResultEngine<bool> {
        let date = parse_date(&cmd.date)?;
        let id = parse_id(id)?;

        let mut set = doc! { "date": BsonDateTime::from_chrono(date) };
        if let Some(amount) = &cmd.amount {
            set.insert("amount", amount_to_bson(amount)?);
        }
        if let Some(category) = cmd.category {
            set.insert("category", category);
        }
        if let Some(description) = cmd.description {
            set.insert("description", description);
        }
        if let Some(repeat_monthly) = cmd.repeat_monthly {
            set.insert("repeatMonthly", repeat_monthly);
        }

        Ok(self.expenses.find_one_and_update(id, set).await?.is_some())
    }

    /// Returns `false` when no expense has that id.
    pub async fn delete_expense(&self, id: &str) -> ResultEngine<bool> {
        let id = parse_id(id)?;
        Ok(self.expenses.find_one_and_delete(id).await?.is_some())
    }
}
