pub use bson::oid::ObjectId;
pub use commands::{ExpenseCmd, ExpenseUpdateCmd, IncomeCmd, IncomeUpdateCmd};
pub use error::EngineError;
pub use expenses::Expense;
pub use incomes::Income;
pub use store::{Collection, DATABASE_NAME, DEFAULT_TIMEOUT, Store};
pub use util::{parse_date, parse_id};

mod commands;
mod error;
mod expenses;
mod incomes;
mod ops;
pub mod store;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

/// Name of the collection holding expenses.
pub const EXPENSE_COLLECTION: &str = "expense";
/// Name of the collection holding incomes.
pub const INCOME_COLLECTION: &str = "income";

/// Resource operations over an opened [`Store`].
///
/// Built once at startup and shared by every request; each operation is a
/// single store round trip.
#[derive(Debug)]
pub struct Engine {
    expenses: Collection,
    incomes: Collection,
}

impl Engine {
    pub fn new(store: &Store) -> Self {
        Self {
            expenses: store.collection(EXPENSE_COLLECTION),
            incomes: store.collection(INCOME_COLLECTION),
        }
    }
}
