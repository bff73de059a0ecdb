use bson::{DateTime as BsonDateTime, doc, oid::ObjectId};

use crate::{
    Engine, Income, IncomeCmd, IncomeUpdateCmd, ResultEngine,
    util::{parse_date, parse_id},
};

use super::{amount_to_bson, decode};

impl Engine {
    /// Insert a new income. The store assigns its id.
    pub async fn add_income(&self, cmd: IncomeCmd) -> ResultEngine<ObjectId> {
        let date = parse_date(&cmd.date)?;

        let document = doc! {
            "source": cmd.source,
            "amount": amount_to_bson(&cmd.amount)?,
            "description": cmd.description,
            "date": BsonDateTime::from_chrono(date),
            "wallet_id": cmd.wallet_id,
        };

        self.incomes.insert_one(document).await
    }

    pub async fn incomes(&self) -> ResultEngine<Vec<Income>> {
        self.incomes
            .find_all()
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn income(&self, id: &str) -> ResultEngine<Option<Income>> {
        let id = parse_id(id)?;
        self.incomes.find_one(id).await?.map(decode).transpose()
    }

    /// Merge the fields of `cmd` into the income `id`.
    ///
    /// Returns `false` when no income has that id.
    pub async fn update_income(&self, id: &str, cmd: IncomeUpdateCmd) -> ResultEngine<bool> {
        let date = parse_date(&cmd.date)?;
        let id = parse_id(id)?;

        let mut set = doc! { "date": BsonDateTime::from_chrono(date) };
        if let Some(source) = cmd.source {
            set.insert("source", source);
        }
        if let Some(amount) = &cmd.amount {
            set.insert("amount", amount_to_bson(amount)?);
        }
        if let Some(description) = cmd.description {
            set.insert("description", description);
        }
        if let Some(wallet_id) = cmd.wallet_id {
            set.insert("wallet_id", wallet_id);
        }

        Ok(self.incomes.find_one_and_update(id, set).await?.is_some())
    }

    pub async fn delete_income(&self, id: &str) -> ResultEngine<bool> {
        let id = parse_id(id)?;
        Ok(self.incomes.find_one_and_delete(id).await?.is_some())
    }
}
